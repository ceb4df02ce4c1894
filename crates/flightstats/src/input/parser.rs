//! Delimited-file loader with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::record::FlightRecord;
use super::source::SourceMetadata;
use crate::error::{FlightError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Header naming the year column.
    pub year_column: String,
    /// Header naming the month column.
    pub month_column: String,
    /// Header naming the passengers column.
    pub passengers_column: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            year_column: "year".to_string(),
            month_column: "month".to_string(),
            passengers_column: "passengers".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Force a delimiter instead of detecting one.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Override the header names of the three required columns.
    pub fn with_columns(
        mut self,
        year: impl Into<String>,
        month: impl Into<String>,
        passengers: impl Into<String>,
    ) -> Self {
        self.year_column = year.into();
        self.month_column = month.into();
        self.passengers_column = passengers.into();
        self
    }
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    year: usize,
    month: usize,
    passengers: usize,
}

/// Loads flight records from delimited files.
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a new loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return its records (in file order) and metadata.
    ///
    /// The whole load fails on the first row whose passengers value is not a
    /// non-negative integer; no partial result is returned.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(Vec<FlightRecord>, SourceMetadata)> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading flight records");

        let mut file = File::open(path).map_err(|e| FlightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| FlightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        drop(file);

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let records = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            records.len(),
        );

        debug!(
            rows = metadata.row_count,
            format = %metadata.format,
            hash = %metadata.hash,
            "loaded flight records"
        );

        Ok((records, metadata))
    }

    /// Parse bytes directly with a known delimiter.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Vec<FlightRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(FlightError::EmptyData("No columns found".to_string()));
        }
        let index = self.resolve_columns(&headers)?;

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row = result?;
            // Header is line 1, so the first data row is line 2 when the
            // reader cannot report a position.
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(row_idx as u64 + 2);
            records.push(self.parse_row(&row, index, line)?);
        }

        Ok(records)
    }

    fn resolve_columns(&self, headers: &StringRecord) -> Result<ColumnIndex> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| FlightError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(ColumnIndex {
            year: find(&self.config.year_column)?,
            month: find(&self.config.month_column)?,
            passengers: find(&self.config.passengers_column)?,
        })
    }

    fn parse_row(&self, row: &StringRecord, index: ColumnIndex, line: u64) -> Result<FlightRecord> {
        let field = |i: usize, column: &str| {
            row.get(i).ok_or_else(|| FlightError::Parse {
                line,
                column: column.to_string(),
                value: String::new(),
                message: "field missing from row".to_string(),
            })
        };

        let year = field(index.year, &self.config.year_column)?;
        let month = field(index.month, &self.config.month_column)?;
        let raw = field(index.passengers, &self.config.passengers_column)?;
        let passengers = raw.trim().parse::<u64>().map_err(|e| FlightError::Parse {
            line,
            column: self.config.passengers_column.clone(),
            value: raw.to_string(),
            message: e.to_string(),
        })?;

        Ok(FlightRecord::new(year, month, passengers))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(FlightError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat a higher but ragged count.
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"year,month,passengers\n2010,Jan,415\n2010,Feb,390";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"year\tmonth\tpassengers\n2010\tJan\t415";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted() {
        let data = b"year;month;passengers\n2010;\"Jan,Feb\";415";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_detect_delimiter_empty() {
        assert!(matches!(
            detect_delimiter(b"\n  \n"),
            Err(FlightError::EmptyData(_))
        ));
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let loader = Loader::new();
        let data = b"year,month,passengers\n2011,Jan,470\n2010,Feb,390\n2010,Jan,415";
        let records = loader.parse_bytes(data, b',').unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], FlightRecord::new("2011", "Jan", 470));
        assert_eq!(records[2], FlightRecord::new("2010", "Jan", 415));
    }

    #[test]
    fn test_parse_extra_columns_and_header_case() {
        let loader = Loader::new();
        let data = b"Month, Year ,airline,Passengers\nJan,2010,XY, 415 \n";
        let records = loader.parse_bytes(data, b',').unwrap();

        assert_eq!(records, vec![FlightRecord::new("2010", "Jan", 415)]);
    }

    #[test]
    fn test_parse_missing_column() {
        let loader = Loader::new();
        let err = loader
            .parse_bytes(b"year,month,count\n2010,Jan,415", b',')
            .unwrap_err();

        match err {
            FlightError::MissingColumn { column } => assert_eq!(column, "passengers"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_reports_offending_line() {
        let loader = Loader::new();
        let data = b"year,month,passengers\n2010,Jan,415\n2010,Feb,abc\n";
        let err = loader.parse_bytes(data, b',').unwrap_err();

        match err {
            FlightError::Parse { line, value, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
                assert_eq!(column, "passengers");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_passengers() {
        let loader = Loader::new();
        let data = b"year,month,passengers\n2010,Jan,-4\n";
        assert!(matches!(
            loader.parse_bytes(data, b','),
            Err(FlightError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_short_row_is_parse_error() {
        let loader = Loader::new();
        let data = b"year,month,passengers\n2010,Jan\n";
        assert!(matches!(
            loader.parse_bytes(data, b','),
            Err(FlightError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_short_row_missing_month_is_parse_error() {
        let loader = Loader::new();
        let data = b"passengers,year,month\n415,2010,Jan\n390,2010\n";
        let err = loader.parse_bytes(data, b',').unwrap_err();

        match err {
            FlightError::Parse { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, "month");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_short_row_missing_year_is_parse_error() {
        let loader = Loader::new();
        let data = b"passengers,month,year\n415\n";
        assert!(matches!(
            loader.parse_bytes(data, b','),
            Err(FlightError::Parse { ref column, .. }) if column == "year"
        ));
    }

    #[test]
    fn test_parse_custom_column_names() {
        let config = LoaderConfig::default().with_columns("yr", "mon", "pax");
        let loader = Loader::with_config(config);
        let records = loader
            .parse_bytes(b"yr|mon|pax\n1949|Mar|132\n", b'|')
            .unwrap();

        assert_eq!(records, vec![FlightRecord::new("1949", "Mar", 132)]);
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        let loader = Loader::new();
        let records = loader.parse_bytes(b"year,month,passengers\n", b',').unwrap();
        assert!(records.is_empty());
    }
}
