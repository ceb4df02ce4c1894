//! Series command - passengers by month, one line per year.

use std::path::PathBuf;

use flightstats::FlightAnalysis;

use super::Options;

pub fn run(file: PathBuf, options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let data = super::load_data(&file, options)?;
    let request = FlightAnalysis::new(&data).time_series();

    let mut renderer = super::make_renderer(options.renderer);
    renderer.render(&request)?;

    Ok(())
}
