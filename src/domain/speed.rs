// Fixed-threshold classification of TCP speeds into color buckets
use serde::Serialize;

/// One of five fixed speed ranges with a display color. Classification is a
/// pure function of a single speed value; adjacent points are colored
/// individually, never merged into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedBucket {
    Stationary,
    Slow,
    Moderate,
    Fast,
    VeryFast,
}

impl SpeedBucket {
    pub const ALL: [SpeedBucket; 5] = [
        SpeedBucket::Stationary,
        SpeedBucket::Slow,
        SpeedBucket::Moderate,
        SpeedBucket::Fast,
        SpeedBucket::VeryFast,
    ];

    /// Inclusive upper thresholds; anything at or below 0.1 (including
    /// negative readings) counts as stationary.
    pub fn classify(speed: f64) -> Self {
        if speed <= 0.1 {
            SpeedBucket::Stationary
        } else if speed <= 3.0 {
            SpeedBucket::Slow
        } else if speed <= 8.0 {
            SpeedBucket::Moderate
        } else if speed <= 20.0 {
            SpeedBucket::Fast
        } else {
            SpeedBucket::VeryFast
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SpeedBucket::Stationary => "#2c7bb6",
            SpeedBucket::Slow => "#abd9e9",
            SpeedBucket::Moderate => "#ffffbf",
            SpeedBucket::Fast => "#fdae61",
            SpeedBucket::VeryFast => "#d7191c",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            SpeedBucket::Stationary => "<= 0.1",
            SpeedBucket::Slow => "0.1 - 3",
            SpeedBucket::Moderate => "3 - 8",
            SpeedBucket::Fast => "8 - 20",
            SpeedBucket::VeryFast => "> 20",
        }
    }
}
