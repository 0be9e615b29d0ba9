// src/engine/trend.rs

use crate::models::stats::{Direction, Trend};

/// Size of the "recent" window compared against the lifetime average.
pub const RECENT_WINDOW: usize = 5;

/// Arithmetic mean, `0.0` for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().fold(0.0, |acc, v| acc + v) / values.len() as f64
}

/// Rounds to one decimal place.
///
/// Matches fixed-point formatting of the exact binary value: the only exact
/// ties are multiples of 0.25, and those round away from zero.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 10.0;
    if (value * 4.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return scaled.round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

pub fn trend(values: &[f64]) -> Trend {
    if values.is_empty() {
        return Trend {
            label: "Add data to see stats".to_string(),
            direction: Direction::Neutral,
        };
    }
    if values.len() < RECENT_WINDOW {
        return Trend {
            label: "Add more data".to_string(),
            direction: Direction::Neutral,
        };
    }

    let recent = average(&values[values.len() - RECENT_WINDOW..]);
    let overall = average(values);
    let delta = round1(recent - overall);

    if delta > 0.0 {
        Trend {
            label: format!("+{} as of last {} scores", delta, RECENT_WINDOW),
            direction: Direction::Up,
        }
    } else if delta < 0.0 {
        Trend {
            label: format!("{} as of last {} scores", delta, RECENT_WINDOW),
            direction: Direction::Down,
        }
    } else {
        Trend {
            label: format!("No change in last {} scores", RECENT_WINDOW),
            direction: Direction::Neutral,
        }
    }
}
