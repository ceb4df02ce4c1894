//! Summary command - source details, unique values and yearly totals.

use std::path::PathBuf;

use colored::Colorize;
use flightstats::Field;

use super::Options;

pub fn run(
    file: PathBuf,
    json_output: bool,
    options: &Options,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = super::load_data(&file, options)?;

    let years = data.unique_years();
    let months = data.unique_months();
    let totals: Vec<(&str, u64)> = years
        .iter()
        .map(|y| (*y, data.total_for(Field::Year, y)))
        .collect();
    let grand_total = totals
        .iter()
        .fold(0u64, |sum, (_, t)| sum.saturating_add(*t));

    if json_output {
        let yearly: serde_json::Map<String, serde_json::Value> = totals
            .iter()
            .map(|(year, total)| (year.to_string(), serde_json::json!(total)))
            .collect();

        let summary = serde_json::json!({
            "source": data.source(),
            "records": data.len(),
            "years": years,
            "months": months,
            "totals_by_year": yearly,
            "total_passengers": grand_total,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let source = data.source();
    println!(
        "{} {}",
        "Summary for".cyan().bold(),
        source.file.white()
    );
    println!();
    println!("  Format:  {}", source.format);
    println!("  Size:    {} bytes", source.size_bytes);
    println!("  Hash:    {}", source.hash.dimmed());
    println!("  Records: {}", data.len().to_string().white().bold());
    println!();

    println!("{}", "Years:".yellow().bold());
    println!("  {}", years.join(", "));
    println!();
    println!("{}", "Months:".yellow().bold());
    println!("  {}", months.join(", "));
    println!();

    println!("{}", "Passengers by year:".yellow().bold());
    let width = years.iter().map(|y| y.len()).max().unwrap_or(0);
    for (year, total) in &totals {
        println!("  {:width$}  {}", year, total.to_string().white(), width = width);
    }
    println!();
    println!(
        "Total passengers: {}",
        grand_total.to_string().green().bold()
    );

    if data.is_empty() {
        println!("{}", "The file has a header but no data rows.".yellow());
    }

    Ok(())
}
