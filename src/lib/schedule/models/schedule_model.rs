//! Schedule entries and the bodies exchanged with the schedule and import endpoints.
use std::fmt;

use serde::{Deserialize, Serialize};

/// One class session. Times come from the server as `HH:MM:SS`, the forms send `HH:MM`.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub id: u32,
    pub group_id: u32,
    pub teacher_id: u32,
    pub campus_id: u32,
    pub subject: String,
    pub room: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

/// Body of `POST <schedule-endpoint>`: an entry before the server assigns its id.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NewScheduleEntry {
    pub group_id: u32,
    pub teacher_id: u32,
    pub campus_id: u32,
    pub subject: String,
    pub room: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

impl NewScheduleEntry {
    pub fn with_id(self, id: u32) -> ScheduleEntry {
        ScheduleEntry {
            id,
            group_id: self.group_id,
            teacher_id: self.teacher_id,
            campus_id: self.campus_id,
            subject: self.subject,
            room: self.room,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Body of `DELETE <schedule-endpoint>?id=`. The server echoes the id back as it got it.
#[derive(Deserialize, Debug, Serialize, Clone, Default, PartialEq)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// Body of `POST <import-endpoint>`.
#[derive(Serialize, Debug)]
pub struct ImportRequest<'a> {
    pub file: &'a str,
}

/// Result of a spreadsheet import. Rejected rows do not abort the batch.
#[derive(Deserialize, Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: u32,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The six teaching days, numbered 1..=6 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn from_number(day: u8) -> Option<Weekday> {
        match day {
            1..=6 => Some(Self::ALL[usize::from(day) - 1]),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        usize::from(self.number()) - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Понедельник",
            Weekday::Tuesday => "Вторник",
            Weekday::Wednesday => "Среда",
            Weekday::Thursday => "Четверг",
            Weekday::Friday => "Пятница",
            Weekday::Saturday => "Суббота",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
