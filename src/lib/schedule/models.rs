use std::path::PathBuf;

use clap::{command, Args as ClapArgs, Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub mod reference_model;
pub mod schedule_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the endpoint URLs of the schedule API.
/// 2. The action to perform, one per tab or dialog of the schedule viewer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the week, optionally narrowed to a group and/or a teacher
    Schedule {
        #[arg(long)]
        group: Option<u32>,
        #[arg(long)]
        teacher: Option<u32>,
    },
    /// List groups with their campus
    Groups,
    /// List teachers with contacts
    Teachers,
    /// List campuses with addresses
    Campuses,
    /// Add a class to the schedule
    Add(EntryFields),
    /// Edit an existing class; omitted fields keep their current value
    Edit {
        id: u32,
        #[command(flatten)]
        fields: EditFields,
    },
    /// Delete a class from the schedule
    Delete { id: u32 },
    /// Import classes from an Excel file
    Import {
        file: PathBuf,
        /// Only check the rows against the loaded groups, teachers and campuses
        #[arg(long)]
        dry_run: bool,
    },
}

/// Raw form input for a new class. Numbers are coerced the way the form does it.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    #[arg(long, default_value = "")]
    pub group: String,
    #[arg(long, default_value = "")]
    pub teacher: String,
    #[arg(long, default_value = "")]
    pub campus: String,
    #[arg(long, default_value = "")]
    pub subject: String,
    #[arg(long, default_value = "")]
    pub room: String,
    #[arg(long, default_value = "")]
    pub day: String,
    #[arg(long, default_value = "")]
    pub start: String,
    #[arg(long, default_value = "")]
    pub end: String,
}

#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFields {
    #[arg(long)]
    pub group: Option<String>,
    #[arg(long)]
    pub teacher: Option<String>,
    #[arg(long)]
    pub campus: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub room: Option<String>,
    #[arg(long)]
    pub day: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. URL of the reference data endpoint (campuses, teachers, groups)
/// 2. URL of the schedule endpoint (list, create, update, delete)
/// 3. URL of the Excel import endpoint
/// 4. Optional per-request timeout in seconds, no timeout when absent
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_url: String,
    pub schedule_url: String,
    pub import_url: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}
