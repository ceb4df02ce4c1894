//! Input loading and data source handling.

mod parser;
mod record;
mod source;

pub use parser::{Loader, LoaderConfig};
pub use record::FlightRecord;
pub use source::SourceMetadata;
