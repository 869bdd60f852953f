use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Grid rows: 09:00 through 16:00.
pub const HOURS: RangeInclusive<u8> = 9..=16;
/// Grid columns: 1 = Monday through 5 = Friday.
pub const DAYS: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub title: String,
    pub room: String,
    pub day: u8,
    pub hour: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    pub title: String,
    pub room: String,
    pub day: u8,
    pub hour: u8,
}

/// A drag gesture: `active` was dropped over `over`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub active: String,
    pub over: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub day: u8,
    pub hour: u8,
    pub sessions: Vec<ClassSession>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub hour: u8,
    pub cells: Vec<GridCell>,
}
