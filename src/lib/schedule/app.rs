//! Session state of the schedule viewer.
//!
//! All collections live in [`App`]; views only borrow it and every change goes
//! through [`App::apply`]. Remote mutations are always followed by a reload so
//! the local copy never drifts from the server.
use futures::try_join;
use log::{error, info, warn};

use super::{
    dialogs::{Notice, Outcome},
    errors::GatewayError,
    gateway::ScheduleGateway,
    helpers::{self, schedule_by_day, DayBucket, ScheduleFilter},
    models::{reference_model::ReferenceData, schedule_model::ScheduleEntry},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Schedule,
    Groups,
    Teachers,
    Campuses,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectTab(Tab),
    SelectGroup(Option<u32>),
    SelectTeacher(Option<u32>),
    /// "Show schedule" on a teacher card: filter by that teacher only.
    ShowTeacherSchedule(u32),
    ToggleEditMode,
    Loaded(ReferenceData, Vec<ScheduleEntry>),
    ScheduleReloaded(Vec<ScheduleEntry>),
    Removed(u32),
}

#[derive(Debug, Default)]
pub struct App {
    pub reference: ReferenceData,
    pub schedule: Vec<ScheduleEntry>,
    pub filter: ScheduleFilter,
    pub active_tab: Tab,
    pub edit_mode: bool,
}

impl App {
    pub fn apply(&mut self, command: AppCommand) {
        match command {
            AppCommand::SelectTab(tab) => self.active_tab = tab,
            AppCommand::SelectGroup(group_id) => self.filter.group_id = group_id,
            AppCommand::SelectTeacher(teacher_id) => self.filter.teacher_id = teacher_id,
            AppCommand::ShowTeacherSchedule(teacher_id) => {
                self.filter = ScheduleFilter::new(None, Some(teacher_id));
                self.active_tab = Tab::Schedule;
            }
            AppCommand::ToggleEditMode => self.edit_mode = !self.edit_mode,
            AppCommand::Loaded(reference, schedule) => {
                self.reference = reference;
                self.schedule = schedule;
            }
            AppCommand::ScheduleReloaded(schedule) => self.schedule = schedule,
            AppCommand::Removed(id) => self.schedule.retain(|entry| entry.id != id),
        }
    }

    pub fn week(&self) -> [DayBucket<'_>; 6] {
        schedule_by_day(&self.schedule, self.filter)
    }

    pub fn entry(&self, id: u32) -> Option<&ScheduleEntry> {
        self.schedule.iter().find(|entry| entry.id == id)
    }

    pub fn teacher_name(&self, id: u32) -> &str {
        helpers::teacher_name(&self.reference.teachers, id)
    }

    pub fn group_name(&self, id: u32) -> &str {
        helpers::group_name(&self.reference.groups, id)
    }

    pub fn campus_name(&self, id: u32) -> &str {
        helpers::campus_name(&self.reference.campuses, id)
    }

    /// Loads reference data and the whole schedule in one go.
    pub async fn load<G: ScheduleGateway>(&mut self, gateway: &G) -> Result<(), GatewayError> {
        let (reference, schedule) =
            try_join!(gateway.fetch_all_data(), gateway.fetch_schedules(None, None))?;
        info!(
            "Loaded {} groups, {} teachers, {} campuses and {} classes",
            reference.groups.len(),
            reference.teachers.len(),
            reference.campuses.len(),
            schedule.len()
        );
        self.apply(AppCommand::Loaded(reference, schedule));
        Ok(())
    }

    pub async fn reload_schedule<G: ScheduleGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<(), GatewayError> {
        let schedule = gateway.fetch_schedules(None, None).await?;
        self.apply(AppCommand::ScheduleReloaded(schedule));
        Ok(())
    }

    /// Reloads after a dialog submit when it changed the remote schedule.
    /// The change is already committed, so a failed reload only leaves a stale view.
    pub async fn finish<G: ScheduleGateway>(&mut self, gateway: &G, outcome: &Outcome) {
        if !outcome.refresh {
            return;
        }
        if let Err(e) = self.reload_schedule(gateway).await {
            warn!("Change saved, but the schedule was not reloaded: {}", e);
        }
    }

    /// Deletes on the server first; the local copy changes only after that succeeded.
    pub async fn delete_entry<G: ScheduleGateway>(&mut self, gateway: &G, id: u32) -> Notice {
        if let Err(e) = gateway.delete_schedule(id).await {
            error!("Could not delete entry {}: {}", id, e);
            return Notice::Error("Ошибка при удалении занятия".to_owned());
        }
        self.apply(AppCommand::Removed(id));
        if let Err(e) = self.reload_schedule(gateway).await {
            warn!("Entry {} deleted, but the schedule was not reloaded: {}", id, e);
        }
        Notice::Success("Занятие удалено".to_owned())
    }
}
