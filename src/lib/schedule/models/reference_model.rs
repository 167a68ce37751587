//! Reference data as served by the data endpoint. The client never mutates it.
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Campus {
    pub id: u32,
    pub name: String,
    pub address: String,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: u32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub campus_id: u32,
    pub year: u32,
}

/// Body of `GET <data-endpoint>`.
#[derive(Deserialize, Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    #[serde(default)]
    pub campuses: Vec<Campus>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub groups: Vec<Group>,
}
