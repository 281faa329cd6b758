// Renderable chart descriptors - data+style bundles, charting-library agnostic
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint {
    pub time: f64,
    pub value: f64,
}

/// Horizontal overlay line, used for commanded TCP speeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub points: Vec<TimePoint>,
    pub reference_lines: Vec<ReferenceLine>,
}

/// Vertically stacked time-indexed line panels sharing one x axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelChart {
    pub title: String,
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelBar {
    pub axis: String,
    pub value: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelBarChart {
    pub title: String,
    pub bars: Vec<TravelBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// One polyline trace of a segmented path. `show_legend` is set on the
/// first trace per distinct label only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentTrace {
    pub name: String,
    pub color: String,
    pub show_legend: bool,
    pub points: Vec<PathVertex>,
}

/// 3D path split into one trace per dominant-joint run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentedPath {
    pub traces: Vec<SegmentTrace>,
}

/// 3D path as a single polyline with one color per vertex, plus the five
/// fixed bucket legend entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedColoredPath {
    pub points: Vec<PathVertex>,
    pub colors: Vec<String>,
    pub legend: Vec<LegendEntry>,
}

/// A path descriptor degrades to an explanatory placeholder when the
/// dataset carries no TCP positions; it never fails the whole bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathChart<T> {
    Ready(T),
    Placeholder(String),
}

impl<T> PathChart<T> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PathChart::Placeholder(_))
    }
}

/// Everything one rendering request needs, produced in a single pass over
/// the telemetry model. Torque panels appear only when torque data was
/// recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    pub dataset_id: String,
    pub speed_panels: PanelChart,
    pub torque_panels: Option<PanelChart>,
    pub travel_chart: TravelBarChart,
    pub joint_path: PathChart<SegmentedPath>,
    pub speed_path: PathChart<SpeedColoredPath>,
}
