//! Typed flight record.

use serde::{Deserialize, Serialize};

/// One row of the source table: passengers flown in a given year and month.
///
/// `year` and `month` are kept as the text tokens found in the file so that
/// labels render exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightRecord {
    pub year: String,
    pub month: String,
    pub passengers: u64,
}

impl FlightRecord {
    pub fn new(year: impl Into<String>, month: impl Into<String>, passengers: u64) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            passengers,
        }
    }
}
