//! The Add, Edit and Import dialogs as two-state machines.
//!
//! A dialog is either closed or open. Cancelling or a successful submit closes
//! it; a failed submit keeps it open with the form untouched so the input can be
//! corrected. Every submit yields an [`Outcome`] telling the caller what to show
//! and whether the schedule has to be reloaded.
use std::{fmt, fs, path::Path};

use log::{error, info};

use super::{
    gateway::ScheduleGateway,
    helpers::{coerce_number, short_time},
    import::{check_excel_extension, encode_file, import_notice},
    models::{
        schedule_model::{NewScheduleEntry, ScheduleEntry},
        EditFields, EntryFields,
    },
};

/// What the user is told after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning { title: String, details: Vec<String> },
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(message) => write!(f, "{}", message),
            Notice::Warning { title, details } => {
                write!(f, "{}", title)?;
                for detail in details {
                    write!(f, "\n  {}", detail)?;
                }
                Ok(())
            }
            Notice::Error(message) => write!(f, "{}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    /// The remote schedule changed and the local copy must be reloaded.
    pub refresh: bool,
}

impl Outcome {
    fn changed(notice: Notice) -> Self {
        Self {
            notice,
            refresh: true,
        }
    }

    fn unchanged(notice: Notice) -> Self {
        Self {
            notice,
            refresh: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Form values exactly as typed; numbers are coerced only on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub group_id: String,
    pub teacher_id: String,
    pub campus_id: String,
    pub subject: String,
    pub room: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleForm {
    pub fn from_entry(entry: &ScheduleEntry) -> Self {
        Self {
            group_id: entry.group_id.to_string(),
            teacher_id: entry.teacher_id.to_string(),
            campus_id: entry.campus_id.to_string(),
            subject: entry.subject.clone(),
            room: entry.room.clone(),
            day_of_week: entry.day_of_week.to_string(),
            start_time: short_time(&entry.start_time).to_owned(),
            end_time: short_time(&entry.end_time).to_owned(),
        }
    }

    pub fn apply_edits(&mut self, edits: &EditFields) {
        let pairs = [
            (&mut self.group_id, &edits.group),
            (&mut self.teacher_id, &edits.teacher),
            (&mut self.campus_id, &edits.campus),
            (&mut self.subject, &edits.subject),
            (&mut self.room, &edits.room),
            (&mut self.day_of_week, &edits.day),
            (&mut self.start_time, &edits.start),
            (&mut self.end_time, &edits.end),
        ];
        for (field, edit) in pairs {
            if let Some(value) = edit {
                *field = value.clone();
            }
        }
    }

    pub fn to_new_entry(&self) -> NewScheduleEntry {
        NewScheduleEntry {
            group_id: coerce_number(&self.group_id),
            teacher_id: coerce_number(&self.teacher_id),
            campus_id: coerce_number(&self.campus_id),
            subject: self.subject.clone(),
            room: self.room.clone(),
            day_of_week: coerce_number(&self.day_of_week),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}

impl From<EntryFields> for ScheduleForm {
    fn from(fields: EntryFields) -> Self {
        Self {
            group_id: fields.group,
            teacher_id: fields.teacher,
            campus_id: fields.campus,
            subject: fields.subject,
            room: fields.room,
            day_of_week: fields.day,
            start_time: fields.start,
            end_time: fields.end,
        }
    }
}

#[derive(Debug, Default)]
pub struct AddDialog {
    pub state: DialogState,
    pub form: ScheduleForm,
}

impl AddDialog {
    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub async fn submit<G: ScheduleGateway>(&mut self, gateway: &G) -> Outcome {
        match gateway.create_schedule(&self.form.to_new_entry()).await {
            Ok(created) => {
                info!("Added {} as entry {}", created.subject, created.id);
                self.state = DialogState::Closed;
                self.form = ScheduleForm::default();
                Outcome::changed(Notice::Success("Занятие добавлено".to_owned()))
            }
            Err(e) => {
                error!("Could not add a class: {}", e);
                Outcome::unchanged(Notice::Error("Ошибка при добавлении занятия".to_owned()))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct EditDialog {
    pub state: DialogState,
    pub entry_id: Option<u32>,
    pub form: ScheduleForm,
}

impl EditDialog {
    /// Seeds the form from the chosen entry and opens the dialog.
    pub fn assign(&mut self, entry: &ScheduleEntry) {
        self.entry_id = Some(entry.id);
        self.form = ScheduleForm::from_entry(entry);
        self.state = DialogState::Open;
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub async fn submit<G: ScheduleGateway>(&mut self, gateway: &G) -> Outcome {
        let Some(id) = self.entry_id else {
            return Outcome::unchanged(Notice::Error(
                "Ошибка при обновлении занятия".to_owned(),
            ));
        };
        match gateway
            .update_schedule(&self.form.to_new_entry().with_id(id))
            .await
        {
            Ok(updated) => {
                info!("Updated entry {}", updated.id);
                self.state = DialogState::Closed;
                Outcome::changed(Notice::Success("Занятие обновлено".to_owned()))
            }
            Err(e) => {
                error!("Could not update entry {}: {}", id, e);
                Outcome::unchanged(Notice::Error(
                    "Ошибка при обновлении занятия".to_owned(),
                ))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ImportDialog {
    pub state: DialogState,
}

impl ImportDialog {
    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub async fn submit<G: ScheduleGateway>(&mut self, gateway: &G, path: &Path) -> Outcome {
        if !check_excel_extension(path) {
            return Outcome::unchanged(Notice::Error(
                "Пожалуйста, выберите файл Excel (.xlsx или .xls)".to_owned(),
            ));
        }
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Could not read {}: {}", path.display(), e);
                return Outcome::unchanged(Notice::Error("Ошибка при чтении файла".to_owned()));
            }
        };
        match gateway.import_excel_file(&encode_file(&bytes)).await {
            Ok(report) => {
                self.state = DialogState::Closed;
                Outcome::changed(import_notice(&report))
            }
            Err(e) => {
                error!("Import error: {}", e);
                Outcome::unchanged(Notice::Error("Ошибка при импорте файла".to_owned()))
            }
        }
    }
}
