use std::{error::Error, fs, path::Path};

use log::{error, info};

use super::{
    app::{App, AppCommand, Tab},
    dialogs::{AddDialog, EditDialog, ImportDialog, Notice},
    gateway::ScheduleGateway,
    import::{check_excel_extension, preview_import, preview_notice, read_import_rows},
    models::Command,
    render::render,
};

/* checks an Excel file against the loaded reference data without uploading it */
fn preview_file(app: &App, path: &Path) -> Notice {
    if !check_excel_extension(path) {
        return Notice::Error("Пожалуйста, выберите файл Excel (.xlsx или .xls)".to_owned());
    }
    let rows = match fs::read(path)
        .map_err(Box::<dyn Error>::from)
        .and_then(|bytes| read_import_rows(&bytes))
    {
        Ok(rows) => rows,
        Err(e) => {
            error!("Could not read {}: {}", path.display(), e);
            return Notice::Error("Ошибка при чтении файла".to_owned());
        }
    };
    let (entries, errors) = preview_import(rows, &app.reference);
    info!("{} rows are ready, {} rejected", entries.len(), errors.len());
    preview_notice(entries.len(), &errors)
}

/// Loads the session, performs one command and returns what should be shown:
/// the notice of the action, if any, followed by the current view.
pub async fn run<G: ScheduleGateway>(gateway: &G, command: Command) -> Result<String, Box<dyn Error>> {
    let mut app = App::default();
    app.load(gateway).await?;

    let mut out = Vec::new();
    match command {
        Command::Schedule { group, teacher } => match (group, teacher) {
            (None, Some(teacher_id)) => app.apply(AppCommand::ShowTeacherSchedule(teacher_id)),
            _ => {
                app.apply(AppCommand::SelectGroup(group));
                app.apply(AppCommand::SelectTeacher(teacher));
            }
        },
        Command::Groups => app.apply(AppCommand::SelectTab(Tab::Groups)),
        Command::Teachers => app.apply(AppCommand::SelectTab(Tab::Teachers)),
        Command::Campuses => app.apply(AppCommand::SelectTab(Tab::Campuses)),
        Command::Add(fields) => {
            app.apply(AppCommand::ToggleEditMode);
            let mut dialog = AddDialog::default();
            dialog.open();
            dialog.form = fields.into();
            let outcome = dialog.submit(gateway).await;
            app.finish(gateway, &outcome).await;
            out.push(outcome.notice.to_string());
        }
        Command::Edit { id, fields } => {
            app.apply(AppCommand::ToggleEditMode);
            match app.entry(id).cloned() {
                Some(entry) => {
                    let mut dialog = EditDialog::default();
                    dialog.assign(&entry);
                    dialog.form.apply_edits(&fields);
                    let outcome = dialog.submit(gateway).await;
                    app.finish(gateway, &outcome).await;
                    out.push(outcome.notice.to_string());
                }
                None => out.push(Notice::Error(format!("Занятие {} не найдено", id)).to_string()),
            }
        }
        Command::Delete { id } => {
            app.apply(AppCommand::ToggleEditMode);
            out.push(app.delete_entry(gateway, id).await.to_string());
        }
        Command::Import { file, dry_run } => {
            app.apply(AppCommand::ToggleEditMode);
            if dry_run {
                out.push(preview_file(&app, &file).to_string());
            } else {
                let mut dialog = ImportDialog::default();
                dialog.open();
                let outcome = dialog.submit(gateway, &file).await;
                app.finish(gateway, &outcome).await;
                out.push(outcome.notice.to_string());
            }
        }
    }

    out.push(render(&app));
    Ok(out.join("\n\n"))
}
