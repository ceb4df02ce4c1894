//! Menu actions as pure functions from the store to render requests.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::debug;

use crate::render::{RenderRequest, Series};
use crate::store::{Field, FlightData};

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TimeSeries,
    MonthlyData,
    Compare,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::TimeSeries,
        MenuChoice::MonthlyData,
        MenuChoice::Compare,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::TimeSeries => 1,
            MenuChoice::MonthlyData => 2,
            MenuChoice::Compare => 3,
            MenuChoice::Exit => 4,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::TimeSeries),
            "2" => Ok(MenuChoice::MonthlyData),
            "3" => Ok(MenuChoice::Compare),
            "4" => Ok(MenuChoice::Exit),
            other => Err(format!("Unknown menu choice: '{}'", other)),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::TimeSeries => write!(f, "Show Time Series"),
            MenuChoice::MonthlyData => write!(f, "Show Monthly Data"),
            MenuChoice::Compare => write!(f, "Compare Years/Months"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}

/// Entries of the compare sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareChoice {
    Years,
    Months,
}

impl FromStr for CompareChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(CompareChoice::Years),
            "2" => Ok(CompareChoice::Months),
            other => Err(format!("Unknown compare choice: '{}'", other)),
        }
    }
}

impl fmt::Display for CompareChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareChoice::Years => write!(f, "Compare years"),
            CompareChoice::Months => write!(f, "Compare months"),
        }
    }
}

/// Turns analysis actions into render requests over a loaded store.
#[derive(Debug, Clone, Copy)]
pub struct FlightAnalysis<'a> {
    data: &'a FlightData,
}

impl<'a> FlightAnalysis<'a> {
    pub fn new(data: &'a FlightData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &'a FlightData {
        self.data
    }

    /// One line per year, with that year's months in file order.
    pub fn time_series(&self) -> RenderRequest {
        let series: Vec<Series> = self
            .data
            .unique_years()
            .into_iter()
            .map(|year| {
                let mut line = Series::new(year);
                for record in self.data.records_for_year(year) {
                    line.push(record.month.as_str(), record.passengers);
                }
                line
            })
            .collect();

        debug!(series = series.len(), "built time series request");

        RenderRequest::TimeSeries {
            title: "Passengers by Month (All Years)".to_string(),
            x_label: "Month".to_string(),
            y_label: "Passengers".to_string(),
            series,
        }
    }

    /// Months down, years across.
    pub fn monthly_heatmap(&self) -> RenderRequest {
        let table = self.data.by_month_and_year();
        let months = self.data.unique_months();
        let years = self.data.unique_years();

        let cells: Vec<Vec<Option<u64>>> = months
            .iter()
            .map(|month| {
                let by_year = table.get(*month);
                years
                    .iter()
                    .map(|year| by_year.and_then(|row| row.get(*year)).copied())
                    .collect()
            })
            .collect();

        debug!(
            rows = months.len(),
            columns = years.len(),
            "built heatmap request"
        );

        RenderRequest::Heatmap {
            title: "Monthly Passengers Heatmap".to_string(),
            value_label: "Passengers".to_string(),
            rows: months.into_iter().map(String::from).collect(),
            columns: years.into_iter().map(String::from).collect(),
            cells,
        }
    }

    /// Total passengers for each year in a comma-separated list.
    ///
    /// Years match literally after trimming surrounding whitespace. Empty
    /// entries (as in `"2010,"`) are skipped rather than charted as a zero bar.
    pub fn compare_years(&self, input: &str) -> RenderRequest {
        let bars = self.totals(input, Field::Year, |token| token.to_string());

        RenderRequest::Bar {
            title: "Yearly Comparison of Passengers".to_string(),
            x_label: "Years".to_string(),
            y_label: "Total Passengers".to_string(),
            bars,
        }
    }

    /// Total passengers for each month in a comma-separated list.
    ///
    /// Months match regardless of case and are labelled capitalized. Empty
    /// entries are skipped.
    pub fn compare_months(&self, input: &str) -> RenderRequest {
        let bars = self.totals(input, Field::Month, capitalize);

        RenderRequest::Bar {
            title: "Monthly Comparison of Passengers".to_string(),
            x_label: "Months".to_string(),
            y_label: "Total Passengers".to_string(),
            bars,
        }
    }

    /// Dispatch a compare sub-choice with its raw list input.
    pub fn compare(&self, choice: CompareChoice, input: &str) -> RenderRequest {
        match choice {
            CompareChoice::Years => self.compare_years(input),
            CompareChoice::Months => self.compare_months(input),
        }
    }

    fn totals(
        &self,
        input: &str,
        field: Field,
        label: impl Fn(&str) -> String,
    ) -> IndexMap<String, u64> {
        let mut bars = IndexMap::new();
        for token in split_list(input) {
            let name = label(token);
            let total = self.data.total_for(field, &name);
            bars.insert(name, total);
        }
        debug!(%field, bars = bars.len(), "built comparison request");
        bars
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
