use super::{
    app::{App, Tab},
    helpers::short_time,
    models::schedule_model::ScheduleEntry,
};

const NO_CLASSES: &str = "Нет занятий";

/* form string of information about one class */
fn format_entry_as_string(app: &App, entry: &ScheduleEntry) -> String {
    let head = if app.edit_mode {
        format!("  [#{}] ", entry.id)
    } else {
        "  ".to_owned()
    };
    format!(
        "{}{} - {} | {}\n    {}\n    {}\n    Группа: {}\n    {}",
        head,
        short_time(&entry.start_time),
        short_time(&entry.end_time),
        entry.room,
        entry.subject,
        app.teacher_name(entry.teacher_id),
        app.group_name(entry.group_id),
        app.campus_name(entry.campus_id),
    )
}

fn render_filter(app: &App) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(id) = app.filter.group_id {
        parts.push(format!("группа {}", app.group_name(id)));
    }
    if let Some(id) = app.filter.teacher_id {
        parts.push(format!("преподаватель {}", app.teacher_name(id)));
    }
    (!parts.is_empty()).then(|| format!("Расписание: {}", parts.join(", ")))
}

pub fn render_week(app: &App) -> String {
    let mut out = Vec::new();
    if let Some(header) = render_filter(app) {
        out.push(header);
    }
    for bucket in app.week() {
        out.push(format!("== {} ==", bucket.day));
        if bucket.is_empty() {
            out.push(format!("  {}", NO_CLASSES));
        } else {
            out.extend(
                bucket
                    .entries
                    .iter()
                    .map(|entry| format_entry_as_string(app, entry)),
            );
        }
    }
    out.join("\n")
}

pub fn render_groups(app: &App) -> String {
    app.reference
        .groups
        .iter()
        .map(|group| {
            format!(
                "{} | {} курс | {}",
                group.name,
                group.year,
                app.campus_name(group.campus_id)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_teachers(app: &App) -> String {
    app.reference
        .teachers
        .iter()
        .map(|teacher| {
            format!(
                "[{}] {}\n    {}\n    {}",
                teacher.id, teacher.full_name, teacher.email, teacher.phone
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_campuses(app: &App) -> String {
    app.reference
        .campuses
        .iter()
        .map(|campus| format!("{}\n    {}", campus.name, campus.address))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(app: &App) -> String {
    match app.active_tab {
        Tab::Schedule => render_week(app),
        Tab::Groups => render_groups(app),
        Tab::Teachers => render_teachers(app),
        Tab::Campuses => render_campuses(app),
    }
}
