use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::Hours;

/// Opaque record identifier, assigned once at normalization time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical flight-log entry.
///
/// Built once per accepted source row and never modified afterwards. The
/// total duration is not a field: [`FlightRecord::total`] always derives it
/// from day and night time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub aircraft: String,
    pub crew: String,
    /// CANAC number pulled out of `crew`; empty when none was found
    pub crew_id: String,
    pub departure: String,
    pub arrival: String,
    pub day: Hours,
    pub night: Hours,
    pub navigation: Hours,
    pub instrument: Hours,
    pub captain: Hours,
    pub landings: u32,
    pub distance: f64,
    pub function: String,
    pub observation: String,
    pub status: String,
    pub registration: String,
    pub exclusion_date: String,
    pub excluded_by: String,
}

impl FlightRecord {
    pub fn total(&self) -> Hours {
        self.day + self.night
    }
}
