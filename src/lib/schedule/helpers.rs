use log::debug;

use super::models::{
    reference_model::{Campus, Group, Teacher},
    schedule_model::{ScheduleEntry, Weekday},
};

pub const UNKNOWN_TEACHER: &str = "Неизвестен";
pub const UNKNOWN_GROUP: &str = "Неизвестна";
pub const UNKNOWN_CAMPUS: &str = "Неизвестен";

/// Current selection of the schedule view. An unset side matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub group_id: Option<u32>,
    pub teacher_id: Option<u32>,
}

impl ScheduleFilter {
    pub fn new(group_id: Option<u32>, teacher_id: Option<u32>) -> Self {
        Self {
            group_id,
            teacher_id,
        }
    }

    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        self.group_id.map_or(true, |id| entry.group_id == id)
            && self.teacher_id.map_or(true, |id| entry.teacher_id == id)
    }
}

/// Classes of one weekday, in the order they came in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<'a> {
    pub day: Weekday,
    pub entries: Vec<&'a ScheduleEntry>,
}

impl DayBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn filter_schedule(entries: &[ScheduleEntry], filter: ScheduleFilter) -> Vec<&ScheduleEntry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}

/* every entry lands in the bucket of its day; a day outside 1..=6 lands nowhere */
pub fn group_by_day<'a, I>(entries: I) -> [DayBucket<'a>; 6]
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    let mut buckets = Weekday::ALL.map(|day| DayBucket {
        day,
        entries: Vec::new(),
    });
    for entry in entries {
        match Weekday::from_number(entry.day_of_week) {
            Some(day) => buckets[day.index()].entries.push(entry),
            None => debug!(
                "Entry {} has day {} outside of the week, skipping",
                entry.id, entry.day_of_week
            ),
        }
    }
    buckets
}

pub fn schedule_by_day(entries: &[ScheduleEntry], filter: ScheduleFilter) -> [DayBucket<'_>; 6] {
    group_by_day(filter_schedule(entries, filter))
}

pub fn teacher_name(teachers: &[Teacher], id: u32) -> &str {
    teachers
        .iter()
        .find(|t| t.id == id)
        .map_or(UNKNOWN_TEACHER, |t| t.full_name.as_str())
}

pub fn group_name(groups: &[Group], id: u32) -> &str {
    groups
        .iter()
        .find(|g| g.id == id)
        .map_or(UNKNOWN_GROUP, |g| g.name.as_str())
}

pub fn campus_name(campuses: &[Campus], id: u32) -> &str {
    campuses
        .iter()
        .find(|c| c.id == id)
        .map_or(UNKNOWN_CAMPUS, |c| c.name.as_str())
}

/// `HH:MM:SS` -> `HH:MM`; shorter strings are returned as is.
pub fn short_time(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

/// Form coercion for numeric fields: blank or garbage becomes 0.
pub fn coerce_number<T>(raw: &str) -> T
where
    T: std::str::FromStr + Default,
{
    raw.trim().parse().unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
