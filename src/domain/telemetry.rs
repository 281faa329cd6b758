// Telemetry data domain models and document validation
use serde_json::Value;
use thiserror::Error;

/// Required field missing or wrong shape in a telemetry document.
/// Terminal for the current request; callers render a placeholder
/// instead of partial charts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed telemetry document: missing or invalid field `{field}`")]
pub struct MalformedTelemetry {
    pub field: String,
}

impl MalformedTelemetry {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub time: f64,
    pub tcp_speed: f64,
    pub joint_speeds: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TorqueSample {
    pub time: f64,
    pub joint_torques: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Typed in-memory form of one recorded motion dataset.
///
/// `total_travel` defines the axis count used everywhere else. Optional
/// inputs that are absent, empty or unusable end up as `None`; they never
/// fail the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryModel {
    pub samples: Vec<TelemetrySample>,
    pub total_travel: Vec<f64>,
    pub torque_samples: Option<Vec<TorqueSample>>,
    pub path: Option<Vec<PathPoint>>,
    pub dominant_joint: Option<Vec<usize>>,
    pub commanded_speeds: Vec<f64>,
}

impl TelemetryModel {
    pub fn num_axes(&self) -> usize {
        self.total_travel.len()
    }

    /// Normalize a raw parsed document into typed samples.
    ///
    /// `timeseries` and `total_travel` are required; everything else is
    /// independently absent-tolerant. A present-but-empty optional field is
    /// treated as absent.
    pub fn from_document(document: &Value) -> Result<Self, MalformedTelemetry> {
        let records = document
            .get("timeseries")
            .and_then(Value::as_array)
            .ok_or_else(|| MalformedTelemetry::new("timeseries"))?;

        let total_travel = document
            .get("total_travel")
            .and_then(Value::as_array)
            .and_then(|values| values.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
            .filter(|travel| !travel.is_empty())
            .ok_or_else(|| MalformedTelemetry::new("total_travel"))?;

        let num_axes = total_travel.len();

        let samples = records
            .iter()
            .enumerate()
            .map(|(index, record)| parse_sample(record, index, num_axes))
            .collect::<Result<Vec<_>, _>>()?;

        let torque_samples = parse_torque_series(document.get("torqueseries"), num_axes);
        let path = parse_path(document.get("tcp_positions"), samples.len());
        let dominant_joint = match &path {
            Some(path) => {
                parse_dominant_joints(document.get("most_solicited_joint"), path.len(), num_axes)
            }
            None => None,
        };
        let commanded_speeds = document
            .get("commanded_tcp_speeds")
            .and_then(Value::as_array)
            .and_then(|values| values.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
            .unwrap_or_default();

        Ok(Self {
            samples,
            total_travel,
            torque_samples,
            path,
            dominant_joint,
            commanded_speeds,
        })
    }
}

fn parse_sample(
    record: &Value,
    index: usize,
    num_axes: usize,
) -> Result<TelemetrySample, MalformedTelemetry> {
    let time = record_field(record, index, "Time")?;
    let tcp_speed = record_field(record, index, "TCP_Speed")?;
    let joint_speeds = (1..=num_axes)
        .map(|axis| record_field(record, index, &format!("J{axis}_Speed")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TelemetrySample {
        time,
        tcp_speed,
        joint_speeds,
    })
}

fn record_field(record: &Value, index: usize, key: &str) -> Result<f64, MalformedTelemetry> {
    record
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| MalformedTelemetry::new(format!("timeseries[{index}].{key}")))
}

fn parse_torque_series(value: Option<&Value>, num_axes: usize) -> Option<Vec<TorqueSample>> {
    let records = value?.as_array()?;
    if records.is_empty() {
        return None;
    }

    let mut samples = Vec::with_capacity(records.len());
    for record in records {
        let time = record.get("Time").and_then(Value::as_f64)?;
        let joint_torques = (1..=num_axes)
            .map(|axis| record.get(&format!("J{axis}_Torque")).and_then(Value::as_f64))
            .collect::<Option<Vec<_>>>()?;
        samples.push(TorqueSample {
            time,
            joint_torques,
        });
    }

    Some(samples)
}

fn parse_path(value: Option<&Value>, sample_count: usize) -> Option<Vec<PathPoint>> {
    let entries = value?.as_array()?;
    if entries.is_empty() {
        return None;
    }

    let mut points = Vec::with_capacity(entries.len());
    for entry in entries {
        let coords = entry
            .as_array()
            .filter(|coords| coords.len() >= 3)?
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<_>>>()?;
        points.push(PathPoint {
            x: coords[0],
            y: coords[1],
            z: coords[2],
        });
    }

    if points.len() != sample_count {
        tracing::warn!(
            points = points.len(),
            samples = sample_count,
            "ignoring tcp_positions: length does not match timeseries"
        );
        return None;
    }

    Some(points)
}

fn parse_dominant_joints(
    value: Option<&Value>,
    path_len: usize,
    num_axes: usize,
) -> Option<Vec<usize>> {
    let entries = value?.as_array()?;
    if entries.is_empty() {
        return None;
    }

    let mut labels = Vec::with_capacity(entries.len());
    for entry in entries {
        let label = entry.as_u64()? as usize;
        if label >= num_axes {
            tracing::warn!(
                label,
                num_axes,
                "ignoring most_solicited_joint: axis index out of range"
            );
            return None;
        }
        labels.push(label);
    }

    if labels.len() != path_len {
        tracing::warn!(
            labels = labels.len(),
            points = path_len,
            "ignoring most_solicited_joint: length does not match tcp_positions"
        );
        return None;
    }

    Some(labels)
}
