use serde::{Deserialize, Serialize};

/// Position of every source column in a SACI export row.
///
/// The positions are a fixed contract of the export, not something derived
/// from the header row. The defaults describe the SACI layout; a config file
/// may override individual entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub date: usize,
    pub aircraft: usize,
    pub departure: usize,
    pub arrival: usize,
    pub observation: usize,
    pub crew: usize,
    pub day: usize,
    pub night: usize,
    pub navigation: usize,
    pub instrument: usize,
    pub captain: usize,
    pub landings: usize,
    pub distance: usize,
    pub function: usize,
    pub status: usize,
    pub registration: usize,
    pub exclusion_date: usize,
    pub excluded_by: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: 0,
            aircraft: 1,
            departure: 2,
            arrival: 3,
            observation: 4,
            crew: 5,
            day: 6,
            night: 7,
            navigation: 8,
            instrument: 9,
            captain: 10,
            landings: 11,
            distance: 12,
            function: 13,
            status: 14,
            registration: 15,
            exclusion_date: 16,
            excluded_by: 17,
        }
    }
}

impl ColumnMap {
    /// Column names paired with their positions, in declaration order
    pub fn entries(&self) -> [(&'static str, usize); 18] {
        [
            ("date", self.date),
            ("aircraft", self.aircraft),
            ("departure", self.departure),
            ("arrival", self.arrival),
            ("observation", self.observation),
            ("crew", self.crew),
            ("day", self.day),
            ("night", self.night),
            ("navigation", self.navigation),
            ("instrument", self.instrument),
            ("captain", self.captain),
            ("landings", self.landings),
            ("distance", self.distance),
            ("function", self.function),
            ("status", self.status),
            ("registration", self.registration),
            ("exclusion_date", self.exclusion_date),
            ("excluded_by", self.excluded_by),
        ]
    }

    /// Minimum row width needed to address every column
    pub fn width(&self) -> usize {
        self.entries()
            .iter()
            .map(|(_, index)| index + 1)
            .max()
            .unwrap_or(0)
    }
}
