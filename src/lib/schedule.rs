//! Client for the college schedule API: typed gateway, schedule view-model,
//! dialog state machines and the plain-text views used by the CLI.
pub mod app;
pub mod dialogs;
pub mod errors;
pub mod gateway;
pub mod helpers;
pub mod import;
pub mod models;
pub mod render;
pub mod run_tool;
