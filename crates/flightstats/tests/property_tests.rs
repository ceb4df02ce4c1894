//! Property-based tests for the record store.
//!
//! These tests use proptest to generate random record sequences and verify
//! that the aggregate queries keep their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p flightstats --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p flightstats --test property_tests
//! ```

use std::collections::HashSet;
use std::io::Write;

use proptest::prelude::*;
use tempfile::NamedTempFile;

use flightstats::{Field, FlightData, FlightRecord};

// =============================================================================
// Test Strategies
// =============================================================================

fn year() -> impl Strategy<Value = String> {
    (1949u32..1961).prop_map(|y| y.to_string())
}

fn month() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ])
    .prop_map(String::from)
}

fn record() -> impl Strategy<Value = FlightRecord> {
    (year(), month(), 0u64..10_000).prop_map(|(y, m, p)| FlightRecord::new(y, m, p))
}

fn records() -> impl Strategy<Value = Vec<FlightRecord>> {
    prop::collection::vec(record(), 0..60)
}

fn first_occurrences<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn unique_years_match_first_occurrence(records in records()) {
        let data = FlightData::from_records(records.clone());
        let expected = first_occurrences(records.iter().map(|r| r.year.as_str()));
        let years = data.unique_years();

        prop_assert_eq!(&years, &expected);
        let distinct: HashSet<_> = years.iter().collect();
        prop_assert_eq!(distinct.len(), years.len());
    }

    #[test]
    fn unique_months_match_first_occurrence(records in records()) {
        let data = FlightData::from_records(records.clone());
        let expected = first_occurrences(records.iter().map(|r| r.month.as_str()));
        prop_assert_eq!(data.unique_months(), expected);
    }

    #[test]
    fn table_holds_last_record_per_pair(records in records()) {
        let data = FlightData::from_records(records.clone());
        let table = data.by_month_and_year();

        for (month, by_year) in &table {
            for (year, passengers) in by_year {
                let last = records
                    .iter()
                    .rev()
                    .find(|r| &r.month == month && &r.year == year)
                    .map(|r| r.passengers);
                prop_assert_eq!(last, Some(*passengers));
            }
        }

        let pairs: HashSet<_> = records.iter().map(|r| (&r.month, &r.year)).collect();
        let cells: usize = table.values().map(|row| row.len()).sum();
        prop_assert_eq!(cells, pairs.len());
    }

    #[test]
    fn year_totals_sum_matching_records(records in records(), probe in year()) {
        let data = FlightData::from_records(records.clone());
        let expected: u64 = records
            .iter()
            .filter(|r| r.year == probe)
            .map(|r| r.passengers)
            .sum();
        prop_assert_eq!(data.total_for(Field::Year, &probe), expected);
    }

    #[test]
    fn year_totals_partition_all_passengers(records in records()) {
        let data = FlightData::from_records(records.clone());
        let by_year: u64 = data
            .unique_years()
            .iter()
            .map(|y| data.total_for(Field::Year, y))
            .sum();
        let all: u64 = records.iter().map(|r| r.passengers).sum();
        prop_assert_eq!(by_year, all);
    }

    #[test]
    fn month_totals_ignore_case(records in records(), probe in month()) {
        let data = FlightData::from_records(records);
        let exact = data.total_for(Field::Month, &probe);
        prop_assert_eq!(data.total_for(Field::Month, &probe.to_lowercase()), exact);
        prop_assert_eq!(data.total_for(Field::Month, &probe.to_uppercase()), exact);
    }

    #[test]
    fn loading_a_written_table_keeps_file_order(records in records()) {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "year,month,passengers").unwrap();
        for r in &records {
            writeln!(file, "{},{},{}", r.year, r.month, r.passengers).unwrap();
        }
        file.flush().unwrap();

        let data = FlightData::load(file.path()).unwrap();
        prop_assert_eq!(data.records(), records.as_slice());
    }

    #[test]
    fn non_integer_passengers_never_load(bad in "[a-zA-Z][a-zA-Z0-9]{0,8}") {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "year,month,passengers\n2010,Jan,415\n2010,Feb,{}\n", bad).unwrap();
        file.flush().unwrap();

        prop_assert!(FlightData::load(file.path()).is_err());
    }
}
