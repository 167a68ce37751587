//! Spreadsheet import: what the client checks before uploading and how the
//! result is reported.
//!
//! Column contract of the sheet, first row is a header and is ignored:
//! A group name, B subject, C teacher full name, D room, E day of week (1-6),
//! F start time, G end time, H campus name.
use std::{error::Error, io::Cursor, path::Path};

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use log::{debug, info};

use super::{
    dialogs::Notice,
    models::{
        reference_model::ReferenceData,
        schedule_model::{ImportReport, NewScheduleEntry},
    },
};

const SAMPLE_ERRORS: usize = 3;
const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn check_excel_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xls"))
}

pub fn encode_file(bytes: &[u8]) -> String {
    B64.encode(bytes)
}

/// One data row of the sheet, names not yet resolved to ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub row: u32,
    pub group_name: String,
    pub subject: String,
    pub teacher_name: String,
    pub room: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub campus_name: String,
}

/* Excel keeps times as a fraction of a day when the cell is formatted as time */
fn cell_time(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(fraction) if (0.0..1.0).contains(&fraction) => {
            /* 23:59:59.9 rounds up to a whole day and wraps to midnight */
            let minutes = (fraction * MINUTES_PER_DAY as f64).round() as u32 % MINUTES_PER_DAY;
            format!("{:02}:{:02}", minutes / 60, minutes % 60)
        }
        _ => raw.to_owned(),
    }
}

fn cell_day(raw: &str) -> Option<u8> {
    raw.parse::<u8>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|day| day.fract() == 0.0 && (0.0..=255.0).contains(day))
            .map(|day| day as u8)
    })
}

/// Reads the active sheet. Rows with an empty group cell are skipped, a row that
/// cannot be read becomes an error message naming it.
pub fn read_import_rows(bytes: &[u8]) -> Result<Vec<Result<ImportRow, String>>, Box<dyn Error>> {
    let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)?;
    if book.get_sheet_count() == 0 {
        return Err("workbook has no sheets".into());
    }
    /* the import endpoint reads the active sheet, not the first one */
    let sheet = book.get_active_sheet();
    let highest_row = sheet.get_highest_row();
    info!("Reading {} rows of the sheet", highest_row.saturating_sub(1));

    let mut rows = Vec::new();
    for row in 2..=highest_row {
        let cell = |col: u32| sheet.get_value((col, row)).trim().to_owned();
        let group_name = cell(1);
        if group_name.is_empty() {
            continue;
        }
        let day_raw = cell(5);
        let Some(day_of_week) = cell_day(&day_raw) else {
            rows.push(Err(format!(
                "Строка {}: некорректный день недели \"{}\"",
                row, day_raw
            )));
            continue;
        };
        rows.push(Ok(ImportRow {
            row,
            group_name,
            subject: cell(2),
            teacher_name: cell(3),
            room: cell(4),
            day_of_week,
            start_time: cell_time(&cell(6)),
            end_time: cell_time(&cell(7)),
            campus_name: cell(8),
        }));
    }
    Ok(rows)
}

/// Resolves names the way the import endpoint does: group, then teacher, then campus.
pub fn resolve_row(row: &ImportRow, data: &ReferenceData) -> Result<NewScheduleEntry, String> {
    let group = data
        .groups
        .iter()
        .find(|g| g.name == row.group_name)
        .ok_or_else(|| format!("Строка {}: группа \"{}\" не найдена", row.row, row.group_name))?;
    let teacher = data
        .teachers
        .iter()
        .find(|t| t.full_name == row.teacher_name)
        .ok_or_else(|| {
            format!(
                "Строка {}: преподаватель \"{}\" не найден",
                row.row, row.teacher_name
            )
        })?;
    let campus = data
        .campuses
        .iter()
        .find(|c| c.name == row.campus_name)
        .ok_or_else(|| format!("Строка {}: кампус \"{}\" не найден", row.row, row.campus_name))?;

    Ok(NewScheduleEntry {
        group_id: group.id,
        teacher_id: teacher.id,
        campus_id: campus.id,
        subject: row.subject.clone(),
        room: row.room.clone(),
        day_of_week: row.day_of_week,
        start_time: row.start_time.clone(),
        end_time: row.end_time.clone(),
    })
}

/// Entries that would be created and the messages for rows that would be rejected.
pub fn preview_import(
    rows: Vec<Result<ImportRow, String>>,
    data: &ReferenceData,
) -> (Vec<NewScheduleEntry>, Vec<String>) {
    let mut entries = Vec::new();
    let mut errors = Vec::new();
    for row in rows {
        match row.and_then(|row| resolve_row(&row, data)) {
            Ok(entry) => entries.push(entry),
            Err(message) => {
                debug!("{}", message);
                errors.push(message);
            }
        }
    }
    (entries, errors)
}

fn sample_errors(errors: &[String]) -> Vec<String> {
    errors.iter().take(SAMPLE_ERRORS).cloned().collect()
}

pub fn import_notice(report: &ImportReport) -> Notice {
    if report.errors.is_empty() {
        Notice::Success(format!("Успешно импортировано {} занятий", report.imported))
    } else {
        Notice::Warning {
            title: format!(
                "Импортировано: {}. Ошибок: {}",
                report.imported,
                report.errors.len()
            ),
            details: sample_errors(&report.errors),
        }
    }
}

pub fn preview_notice(ready: usize, errors: &[String]) -> Notice {
    if errors.is_empty() {
        Notice::Success(format!("Готово к импорту: {} занятий", ready))
    } else {
        Notice::Warning {
            title: format!("Готово к импорту: {}. Ошибок: {}", ready, errors.len()),
            details: sample_errors(errors),
        }
    }
}
