//! In-memory record store and its aggregation queries.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{FlightRecord, Loader, LoaderConfig, SourceMetadata};

/// Month → year → passengers cross-tabulation.
pub type MonthYearTable = IndexMap<String, IndexMap<String, u64>>;

/// Record field a total can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Matched as an exact string.
    Year,
    /// Matched ignoring case.
    Month,
}

impl Field {
    fn matches(self, record: &FlightRecord, value: &str) -> bool {
        match self {
            Field::Year => record.year == value,
            Field::Month => record.month.to_lowercase() == value.to_lowercase(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Year => write!(f, "year"),
            Field::Month => write!(f, "month"),
        }
    }
}

/// Read-only store of flight records in file order.
#[derive(Debug, Clone)]
pub struct FlightData {
    records: Vec<FlightRecord>,
    source: SourceMetadata,
}

impl FlightData {
    /// Load a flights file with the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(path, LoaderConfig::default())
    }

    /// Load a flights file with a custom loader configuration.
    pub fn load_with_config(path: impl AsRef<Path>, config: LoaderConfig) -> Result<Self> {
        let (records, source) = Loader::with_config(config).load_file(path)?;
        Ok(Self { records, source })
    }

    /// Build a store from records already in memory.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let source = SourceMetadata::in_memory(records.len());
        Self { records, source }
    }

    /// All records in file order.
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    /// Metadata about the file the records came from.
    pub fn source(&self) -> &SourceMetadata {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years in first-occurrence order.
    pub fn unique_years(&self) -> Vec<&str> {
        unique_in_order(self.records.iter().map(|r| r.year.as_str()))
    }

    /// Distinct months in first-occurrence order.
    pub fn unique_months(&self) -> Vec<&str> {
        unique_in_order(self.records.iter().map(|r| r.month.as_str()))
    }

    /// Passenger counts keyed by month, then year.
    ///
    /// When the file repeats a (month, year) pair the last row wins.
    pub fn by_month_and_year(&self) -> MonthYearTable {
        let mut table = MonthYearTable::new();
        for record in &self.records {
            table
                .entry(record.month.clone())
                .or_default()
                .insert(record.year.clone(), record.passengers);
        }
        table
    }

    /// Sum of passengers over records whose `field` equals `value`.
    ///
    /// Years compare exactly, months ignore case. Unknown values total 0.
    /// The sum saturates at `u64::MAX`.
    pub fn total_for(&self, field: Field, value: &str) -> u64 {
        self.records
            .iter()
            .filter(|r| field.matches(r, value))
            .fold(0u64, |total, r| total.saturating_add(r.passengers))
    }

    /// Records of one year in file order.
    pub fn records_for_year<'a>(&'a self, year: &'a str) -> impl Iterator<Item = &'a FlightRecord> + 'a {
        self.records.iter().filter(move |r| r.year == year)
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
