//! Heatmap command - month × year passengers grid.

use std::path::PathBuf;

use flightstats::FlightAnalysis;

use super::Options;

pub fn run(file: PathBuf, options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let data = super::load_data(&file, options)?;
    let request = FlightAnalysis::new(&data).monthly_heatmap();

    let mut renderer = super::make_renderer(options.renderer);
    renderer.render(&request)?;

    Ok(())
}
