//! flightstats: aggregate and chart monthly flight passenger counts.
//!
//! A [`FlightData`] store loads `year`/`month`/`passengers` rows from a
//! delimited file and answers aggregate queries over them. [`FlightAnalysis`]
//! turns those aggregates into [`RenderRequest`]s for whatever [`Renderer`]
//! the caller supplies.
//!
//! # Example
//!
//! ```no_run
//! use flightstats::{Field, FlightData};
//!
//! let data = FlightData::load("flights.csv").unwrap();
//!
//! println!("Years: {:?}", data.unique_years());
//! println!("January total: {}", data.total_for(Field::Month, "jan"));
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod render;
pub mod store;

pub use analysis::{CompareChoice, FlightAnalysis, MenuChoice, Session, SessionEnd};
pub use error::{FlightError, Result};
pub use input::{FlightRecord, Loader, LoaderConfig, SourceMetadata};
pub use render::{Point, RecordingRenderer, RenderRequest, Renderer, Series};
pub use store::{Field, FlightData, MonthYearTable};
