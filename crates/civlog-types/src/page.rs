use serde::{Deserialize, Serialize};

use crate::FlightRecord;

/// 1-based page number, assigned when the page is closed
pub type PageNumber = u32;

/// A closed logbook page: records in the order they were committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub number: PageNumber,
    pub records: Vec<FlightRecord>,
}

impl Page {
    pub fn new(number: PageNumber, records: Vec<FlightRecord>) -> Self {
        Self { number, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
