//! JSON renderer - one pretty-printed document per chart.

use std::io::Write;

use flightstats::{FlightError, RenderRequest, Renderer};

pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, request: &RenderRequest) -> flightstats::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, request)?;
        writeln!(self.out)
            .and_then(|_| self.out.flush())
            .map_err(|e| FlightError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightstats::{FlightAnalysis, FlightData, FlightRecord};

    #[test]
    fn test_heatmap_json_document() {
        let data = FlightData::from_records(vec![
            FlightRecord::new("2010", "Jan", 415),
            FlightRecord::new("2011", "Feb", 445),
        ]);
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer
            .render(&FlightAnalysis::new(&data).monthly_heatmap())
            .unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "heatmap");
        assert_eq!(value["rows"], serde_json::json!(["Jan", "Feb"]));
        assert_eq!(value["cells"][0], serde_json::json!([415, null]));
        assert_eq!(value["cells"][1], serde_json::json!([null, 445]));
    }

    #[test]
    fn test_round_trips_through_serde() {
        let data = FlightData::from_records(vec![FlightRecord::new("2010", "Jan", 415)]);
        let request = FlightAnalysis::new(&data).compare_months("jan, mar");

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&request).unwrap();

        let parsed: RenderRequest = serde_json::from_slice(&renderer.into_inner()).unwrap();
        assert_eq!(parsed, request);
    }
}
