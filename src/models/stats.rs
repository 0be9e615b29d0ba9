// src/models/stats.rs

use serde::{Deserialize, Serialize};

use crate::models::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

/// Momentum of the last five scores against the all-time average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub label: String,
    pub direction: Direction,
}

/// Average and trend over the mock overall scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub average: f64,
    pub count: usize,
    #[serde(flatten)]
    pub trend: Trend,
}

/// Average and trend over one section's pooled scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionStats {
    pub section: Section,
    pub average: f64,
    pub count: usize,
    #[serde(flatten)]
    pub trend: Trend,
}

/// A summary tile on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: f64,
    pub subtitle: String,
    pub trend: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub overall: OverallStats,
    pub predicted_percentile: f64,
    pub sections: Vec<SectionStats>,
    pub cards: Vec<StatCard>,
}

/// Fixed mapping of an overall score to the percentile it earned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileReferencePoint {
    pub score: f64,
    pub percentile: f64,
}

/// One bar pair (score, percentile) of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub score: f64,
    pub percentile: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub description: String,
    pub points: Vec<ChartPoint>,
    /// Absent while there is no usable baseline.
    pub improvement: Option<String>,
    pub footer: String,
}
