//! Render requests and the renderer seam.
//!
//! The library never draws anything itself. Analysis actions build a
//! [`RenderRequest`] describing what to show, and hand it to whichever
//! [`Renderer`] the caller injected.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One (x, y) observation of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: String,
    pub y: u64,
}

/// A labelled line of points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, x: impl Into<String>, y: u64) {
        self.points.push(Point { x: x.into(), y });
    }

    /// Largest y value, if the series has any points.
    pub fn max(&self) -> Option<u64> {
        self.points.iter().map(|p| p.y).max()
    }

    /// Smallest y value, if the series has any points.
    pub fn min(&self) -> Option<u64> {
        self.points.iter().map(|p| p.y).min()
    }
}

/// Something a renderer is asked to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderRequest {
    /// Line chart with one series per label.
    TimeSeries {
        title: String,
        x_label: String,
        y_label: String,
        series: Vec<Series>,
    },
    /// Labelled grid; `cells[row][column]` is `None` where no data exists.
    Heatmap {
        title: String,
        value_label: String,
        rows: Vec<String>,
        columns: Vec<String>,
        cells: Vec<Vec<Option<u64>>>,
    },
    /// Bar chart of label → value in display order.
    Bar {
        title: String,
        x_label: String,
        y_label: String,
        bars: IndexMap<String, u64>,
    },
}

impl RenderRequest {
    pub fn title(&self) -> &str {
        match self {
            RenderRequest::TimeSeries { title, .. }
            | RenderRequest::Heatmap { title, .. }
            | RenderRequest::Bar { title, .. } => title,
        }
    }

    /// Short name of the chart kind, as used in the JSON `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderRequest::TimeSeries { .. } => "time_series",
            RenderRequest::Heatmap { .. } => "heatmap",
            RenderRequest::Bar { .. } => "bar",
        }
    }
}

/// Displays render requests.
pub trait Renderer {
    fn render(&mut self, request: &RenderRequest) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, request: &RenderRequest) -> Result<()> {
        (**self).render(request)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, request: &RenderRequest) -> Result<()> {
        (**self).render(request)
    }
}

/// Renderer that keeps every request it receives, for testing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    requests: Vec<RenderRequest>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> &[RenderRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<RenderRequest> {
        self.requests
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, request: &RenderRequest) -> Result<()> {
        self.requests.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_min_max() {
        let mut series = Series::new("2010");
        assert_eq!(series.max(), None);
        series.push("Jan", 415);
        series.push("Feb", 390);
        assert_eq!(series.min(), Some(390));
        assert_eq!(series.max(), Some(415));
    }

    #[test]
    fn test_request_serializes_with_kind_tag() {
        let mut bars = IndexMap::new();
        bars.insert("2010".to_string(), 805);
        let request = RenderRequest::Bar {
            title: "Totals".to_string(),
            x_label: "Years".to_string(),
            y_label: "Total Passengers".to_string(),
            bars,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["bars"]["2010"], 805);
        assert_eq!(request.kind(), "bar");
    }

    #[test]
    fn test_recording_renderer_through_mut_ref() {
        let mut recorder = RecordingRenderer::new();
        let request = RenderRequest::TimeSeries {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            series: vec![],
        };

        fn render_with<R: Renderer>(mut renderer: R, request: &RenderRequest) {
            renderer.render(request).unwrap();
        }
        render_with(&mut recorder, &request);

        assert_eq!(recorder.requests(), &[request]);
    }
}
