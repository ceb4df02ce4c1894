//! Coloured text charts for the terminal.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use flightstats::{FlightError, RenderRequest, Renderer, Series};
use indexmap::IndexMap;

/// Block characters from lowest to highest.
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Default length of the longest bar, in characters.
const DEFAULT_BAR_WIDTH: usize = 40;

/// Light-to-dark blues for heatmap cells.
const BLUES: [(u8, u8, u8); 5] = [
    (222, 235, 247),
    (158, 202, 225),
    (107, 174, 214),
    (49, 130, 189),
    (8, 81, 156),
];

pub struct TerminalRenderer<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    #[cfg(test)]
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self, title: &str, caption: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", title.cyan().bold())?;
        writeln!(self.out, "{}", caption.dimmed())?;
        writeln!(self.out)
    }

    fn draw_time_series(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        series: &[Series],
    ) -> io::Result<()> {
        self.header(title, &format!("{} by {}", y_label, x_label))?;

        let low = series.iter().filter_map(Series::min).min();
        let high = series.iter().filter_map(Series::max).max();
        let (Some(low), Some(high)) = (low, high) else {
            return writeln!(self.out, "{}", "(no data)".dimmed());
        };

        let label_width = series.iter().map(|s| s.label.len()).max().unwrap_or(0);
        for line in series {
            let spark: String = line.points.iter().map(|p| spark(p.y, low, high)).collect();
            writeln!(
                self.out,
                "  {:>width$}  {}  {} {} {} {}",
                line.label.white().bold(),
                spark.blue(),
                "min".dimmed(),
                line.min().unwrap_or(0),
                "max".dimmed(),
                line.max().unwrap_or(0),
                width = label_width
            )?;
        }

        if let Some(longest) = series.iter().max_by_key(|s| s.points.len()) {
            let ticks: Vec<&str> = longest.points.iter().map(|p| p.x.as_str()).collect();
            writeln!(self.out)?;
            writeln!(
                self.out,
                "  {:>width$}  {}",
                x_label.dimmed(),
                ticks.join(" "),
                width = label_width
            )?;
        }

        Ok(())
    }

    fn draw_heatmap(
        &mut self,
        title: &str,
        value_label: &str,
        rows: &[String],
        columns: &[String],
        cells: &[Vec<Option<u64>>],
    ) -> io::Result<()> {
        self.header(title, &format!("{} per cell", value_label))?;

        let values = cells.iter().flatten().flatten().copied();
        let (Some(low), Some(high)) = (values.clone().min(), values.max()) else {
            return writeln!(self.out, "{}", "(no data)".dimmed());
        };

        let row_width = rows.iter().map(String::len).max().unwrap_or(0);
        let cell_width = columns
            .iter()
            .map(String::len)
            .chain(std::iter::once(high.to_string().len()))
            .max()
            .unwrap_or(1);

        write!(self.out, "  {:row_width$}", "", row_width = row_width)?;
        for column in columns {
            write!(self.out, " {:>cell_width$}", column.bold(), cell_width = cell_width)?;
        }
        writeln!(self.out)?;

        for (row, row_cells) in rows.iter().zip(cells) {
            write!(self.out, "  {:<row_width$}", row.bold(), row_width = row_width)?;
            for cell in row_cells {
                let text = match cell {
                    Some(value) => shade(
                        format!("{:>cell_width$}", value, cell_width = cell_width),
                        *value,
                        low,
                        high,
                    ),
                    None => format!("{:>cell_width$}", "-", cell_width = cell_width).dimmed(),
                };
                write!(self.out, " {}", text)?;
            }
            writeln!(self.out)?;
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "  {}: {} (light) .. {} (dark)",
            value_label, low, high
        )
    }

    fn draw_bars(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        bars: &IndexMap<String, u64>,
    ) -> io::Result<()> {
        self.header(title, &format!("{} by {}", y_label, x_label))?;

        if bars.is_empty() {
            return writeln!(self.out, "{}", "(no data)".dimmed());
        }

        let label_width = bars.keys().map(String::len).max().unwrap_or(0);
        let high = bars.values().copied().max().unwrap_or(0);
        for (label, value) in bars {
            let length = if high == 0 {
                0
            } else {
                (*value as u128 * self.bar_width as u128 / high as u128) as usize
            };
            writeln!(
                self.out,
                "  {:>width$} {} {}",
                label.white().bold(),
                "█".repeat(length).green(),
                value,
                width = label_width
            )?;
        }

        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, request: &RenderRequest) -> flightstats::Result<()> {
        let drawn = match request {
            RenderRequest::TimeSeries {
                title,
                x_label,
                y_label,
                series,
            } => self.draw_time_series(title, x_label, y_label, series),
            RenderRequest::Heatmap {
                title,
                value_label,
                rows,
                columns,
                cells,
            } => self.draw_heatmap(title, value_label, rows, columns, cells),
            RenderRequest::Bar {
                title,
                x_label,
                y_label,
                bars,
            } => self.draw_bars(title, x_label, y_label, bars),
        };

        drawn
            .and_then(|_| self.out.flush())
            .map_err(|e| FlightError::Render(e.to_string()))
    }
}

/// Position of `value` within `low..=high` as an index into `0..steps`.
fn bucket(value: u64, low: u64, high: u64, steps: usize) -> usize {
    if high <= low {
        return steps - 1;
    }
    let scaled = (value - low) as u128 * (steps as u128 - 1) / (high - low) as u128;
    scaled as usize
}

fn spark(value: u64, low: u64, high: u64) -> char {
    SPARKS[bucket(value, low, high, SPARKS.len())]
}

fn shade(text: String, value: u64, low: u64, high: u64) -> ColoredString {
    let level = bucket(value, low, high, BLUES.len());
    let (r, g, b) = BLUES[level];
    let cell = text.on_truecolor(r, g, b);
    if level >= BLUES.len() / 2 {
        cell.white()
    } else {
        cell.black()
    }
}
