// Chart assembly - turns a telemetry model into renderable descriptors
use crate::domain::charts::{
    ChartBundle, LegendEntry, Panel, PanelChart, PathChart, PathVertex, ReferenceLine,
    SegmentTrace, SegmentedPath, SpeedColoredPath, TimePoint, TravelBar, TravelBarChart,
};
use crate::domain::segments::segment_runs;
use crate::domain::speed::SpeedBucket;
use crate::domain::telemetry::{PathPoint, TelemetryModel};
use std::collections::HashSet;

const AXIS_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const UNLABELED_PATH_COLOR: &str = "#636efa";

const NO_PATH_MESSAGE: &str = "No TCP position data recorded for this dataset";

/// Assemble all chart descriptors for one dataset. Absent optional inputs
/// degrade the affected descriptor only; the rest of the bundle is always
/// produced.
pub fn build_chart_bundle(dataset_id: &str, model: &TelemetryModel) -> ChartBundle {
    ChartBundle {
        dataset_id: dataset_id.to_string(),
        speed_panels: build_speed_panels(model),
        torque_panels: build_torque_panels(model),
        travel_chart: build_travel_chart(model),
        joint_path: build_joint_path(model),
        speed_path: build_speed_path(model),
    }
}

/// One TCP panel plus one panel per axis. Commanded speeds become
/// horizontal reference lines on the TCP panel only.
fn build_speed_panels(model: &TelemetryModel) -> PanelChart {
    let mut panels = Vec::with_capacity(model.num_axes() + 1);

    let reference_lines = model
        .commanded_speeds
        .iter()
        .map(|&value| ReferenceLine {
            name: format!("Commanded {value}"),
            value,
        })
        .collect();

    panels.push(Panel {
        title: "TCP Speed".to_string(),
        points: model
            .samples
            .iter()
            .map(|s| TimePoint {
                time: s.time,
                value: s.tcp_speed,
            })
            .collect(),
        reference_lines,
    });

    for axis in 0..model.num_axes() {
        panels.push(Panel {
            title: format!("Axis {} Speed", axis + 1),
            points: model
                .samples
                .iter()
                .map(|s| TimePoint {
                    time: s.time,
                    value: s.joint_speeds[axis],
                })
                .collect(),
            reference_lines: Vec::new(),
        });
    }

    PanelChart {
        title: "Speed Analysis".to_string(),
        panels,
    }
}

fn build_torque_panels(model: &TelemetryModel) -> Option<PanelChart> {
    let samples = model.torque_samples.as_ref()?;

    let panels = (0..model.num_axes())
        .map(|axis| Panel {
            title: format!("Axis {} Torque (Nm)", axis + 1),
            points: samples
                .iter()
                .map(|s| TimePoint {
                    time: s.time,
                    value: s.joint_torques[axis],
                })
                .collect(),
            reference_lines: Vec::new(),
        })
        .collect();

    Some(PanelChart {
        title: "Torque Analysis".to_string(),
        panels,
    })
}

fn build_travel_chart(model: &TelemetryModel) -> TravelBarChart {
    let bars = model
        .total_travel
        .iter()
        .enumerate()
        .map(|(axis, &value)| TravelBar {
            axis: format!("Axis {}", axis + 1),
            value,
            text: format!("{value:.1}°"),
        })
        .collect();

    TravelBarChart {
        title: "Total Angular Travel".to_string(),
        bars,
    }
}

/// Path split into one trace per dominant-joint run. Without labels the
/// whole path becomes a single unlabeled trace in a default color with no
/// per-axis legend.
fn build_joint_path(model: &TelemetryModel) -> PathChart<SegmentedPath> {
    let Some(path) = usable_path(model) else {
        return PathChart::Placeholder(NO_PATH_MESSAGE.to_string());
    };

    let traces = match &model.dominant_joint {
        Some(labels) => {
            let mut seen = HashSet::new();
            segment_runs(labels)
                .into_iter()
                .map(|segment| SegmentTrace {
                    name: format!("Axis {}", segment.label + 1),
                    color: AXIS_COLORS[segment.label % AXIS_COLORS.len()].to_string(),
                    show_legend: seen.insert(segment.label),
                    points: vertices(model, path, segment.start, segment.end),
                })
                .collect()
        }
        None => vec![SegmentTrace {
            name: "Trajectory".to_string(),
            color: UNLABELED_PATH_COLOR.to_string(),
            show_legend: false,
            points: vertices(model, path, 0, path.len() - 1),
        }],
    };

    PathChart::Ready(SegmentedPath { traces })
}

/// Whole path as one polyline with per-vertex bucket colors. All five
/// bucket legend entries are attached whether or not each bucket occurs.
fn build_speed_path(model: &TelemetryModel) -> PathChart<SpeedColoredPath> {
    let Some(path) = usable_path(model) else {
        return PathChart::Placeholder(NO_PATH_MESSAGE.to_string());
    };

    let points = vertices(model, path, 0, path.len() - 1);
    let colors = model
        .samples
        .iter()
        .take(path.len())
        .map(|s| SpeedBucket::classify(s.tcp_speed).color().to_string())
        .collect();
    let legend = SpeedBucket::ALL
        .iter()
        .map(|bucket| LegendEntry {
            name: bucket.legend_label().to_string(),
            color: bucket.color().to_string(),
        })
        .collect();

    PathChart::Ready(SpeedColoredPath {
        points,
        colors,
        legend,
    })
}

fn usable_path(model: &TelemetryModel) -> Option<&[PathPoint]> {
    model
        .path
        .as_deref()
        .filter(|path| !path.is_empty())
}

fn vertices(model: &TelemetryModel, path: &[PathPoint], start: usize, end: usize) -> Vec<PathVertex> {
    (start..=end)
        .map(|i| {
            let point = &path[i];
            let speed = model.samples.get(i).map_or(0.0, |s| s.tcp_speed);
            PathVertex {
                x: point.x,
                y: point.y,
                z: point.z,
                hover: format!(
                    "x={:.2} y={:.2} z={:.2}<br>TCP speed: {:.3}",
                    point.x, point.y, point.z, speed
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::TelemetrySample;

    fn sample(time: f64, tcp_speed: f64) -> TelemetrySample {
        TelemetrySample {
            time,
            tcp_speed,
            joint_speeds: vec![tcp_speed / 2.0, tcp_speed / 4.0],
        }
    }

    fn model_with_path(labels: Option<Vec<usize>>) -> TelemetryModel {
        let count = labels.as_ref().map_or(5, Vec::len);
        TelemetryModel {
            samples: (0..count).map(|i| sample(i as f64 * 0.1, i as f64)).collect(),
            total_travel: vec![10.0, 25.5],
            torque_samples: None,
            path: Some(
                (0..count)
                    .map(|i| PathPoint {
                        x: i as f64,
                        y: 0.0,
                        z: 1.0,
                    })
                    .collect(),
            ),
            dominant_joint: labels,
            commanded_speeds: Vec::new(),
        }
    }

    #[test]
    fn one_speed_panel_per_axis_plus_tcp() {
        let model = model_with_path(None);
        let bundle = build_chart_bundle("demo", &model);

        assert_eq!(bundle.speed_panels.panels.len(), model.num_axes() + 1);
        assert_eq!(bundle.speed_panels.panels[0].title, "TCP Speed");
        assert_eq!(bundle.speed_panels.panels[1].title, "Axis 1 Speed");
        assert_eq!(
            bundle.speed_panels.panels[2].points[3].value,
            model.samples[3].joint_speeds[1]
        );
    }

    #[test]
    fn commanded_speeds_overlay_the_tcp_panel_only() {
        let mut model = model_with_path(None);
        model.commanded_speeds = vec![5.0, 12.0];
        let chart = build_speed_panels(&model);

        assert_eq!(chart.panels[0].reference_lines.len(), 2);
        assert_eq!(chart.panels[0].reference_lines[1].value, 12.0);
        assert!(chart.panels[1].reference_lines.is_empty());
        assert!(chart.panels[2].reference_lines.is_empty());
    }

    #[test]
    fn torque_panels_only_with_torque_data() {
        let mut model = model_with_path(None);
        assert!(build_torque_panels(&model).is_none());

        model.torque_samples = Some(vec![crate::domain::telemetry::TorqueSample {
            time: 0.0,
            joint_torques: vec![12.0, -3.0],
        }]);
        let chart = build_torque_panels(&model).unwrap();
        assert_eq!(chart.panels.len(), 2);
        assert_eq!(chart.panels[1].points[0].value, -3.0);
    }

    #[test]
    fn travel_bars_carry_one_decimal_degree_text() {
        let model = model_with_path(None);
        let chart = build_travel_chart(&model);

        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].axis, "Axis 1");
        assert_eq!(chart.bars[0].text, "10.0°");
        assert_eq!(chart.bars[1].text, "25.5°");
    }

    #[test]
    fn joint_path_deduplicates_legend_entries() {
        let model = model_with_path(Some(vec![0, 0, 1, 1, 1, 0]));
        let PathChart::Ready(path) = build_joint_path(&model) else {
            panic!("expected a segmented path");
        };

        assert_eq!(path.traces.len(), 3);
        assert_eq!(path.traces[0].name, "Axis 1");
        assert_eq!(path.traces[1].name, "Axis 2");
        assert_eq!(path.traces[2].name, "Axis 1");
        assert!(path.traces[0].show_legend);
        assert!(path.traces[1].show_legend);
        assert!(!path.traces[2].show_legend);

        // Shared boundary index duplicated between adjacent traces.
        assert_eq!(path.traces[0].points.len(), 2);
        assert_eq!(path.traces[1].points.len(), 4);
        assert_eq!(path.traces[2].points.len(), 2);
        assert_eq!(path.traces[0].points[1], path.traces[1].points[0]);
    }

    #[test]
    fn missing_labels_fall_back_to_one_unlabeled_trace() {
        let model = model_with_path(None);
        let PathChart::Ready(path) = build_joint_path(&model) else {
            panic!("expected a segmented path");
        };

        assert_eq!(path.traces.len(), 1);
        assert_eq!(path.traces[0].points.len(), 5);
        assert!(!path.traces[0].show_legend);
        assert_eq!(path.traces[0].name, "Trajectory");
    }

    #[test]
    fn missing_path_degrades_to_placeholders_only() {
        let mut model = model_with_path(None);
        model.path = None;
        let bundle = build_chart_bundle("demo", &model);

        assert!(bundle.joint_path.is_placeholder());
        assert!(bundle.speed_path.is_placeholder());
        // The rest of the bundle is still produced.
        assert_eq!(bundle.speed_panels.panels.len(), 3);
        assert_eq!(bundle.travel_chart.bars.len(), 2);
    }

    #[test]
    fn speed_path_always_lists_all_five_buckets() {
        let model = model_with_path(None);
        let PathChart::Ready(path) = build_speed_path(&model) else {
            panic!("expected a speed-colored path");
        };

        assert_eq!(path.legend.len(), 5);
        assert_eq!(path.colors.len(), path.points.len());
        // tcp speeds 0..=4 span the first three buckets
        assert_eq!(path.colors[0], SpeedBucket::Stationary.color());
        assert_eq!(path.colors[1], SpeedBucket::Slow.color());
        assert_eq!(path.colors[4], SpeedBucket::Moderate.color());
    }

    #[test]
    fn hover_text_carries_position_and_tcp_speed() {
        let model = model_with_path(None);
        let PathChart::Ready(path) = build_speed_path(&model) else {
            panic!("expected a speed-colored path");
        };

        assert_eq!(path.points[2].hover, "x=2.00 y=0.00 z=1.00<br>TCP speed: 2.000");
    }
}
