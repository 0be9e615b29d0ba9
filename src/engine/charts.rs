// src/engine/charts.rs

use crate::{
    engine::trend::round1,
    models::{
        mock_test::MockRecord,
        section::Section,
        sectional_test::SectionalRecord,
        stats::{ChartPoint, ChartSeries},
    },
};

/// Relative change from the first percentile to the last.
///
/// The first point is the denominator, so a zero baseline has no answer and
/// yields `None`, as does an empty series.
pub fn improvement_text(percentiles: &[f64]) -> Option<String> {
    let (first, last) = (percentiles.first()?, percentiles.last()?);
    let change = round1((last - first) / first * 100.0);
    if !change.is_finite() {
        return None;
    }
    if change.is_sign_negative() {
        Some(format!("Percentile decreased by {:.1}% since start", change.abs()))
    } else {
        Some(format!("Percentile improved by {:.1}% since start", change))
    }
}

/// Overall score and percentile of every full mock, in insertion order.
pub fn total_series(mocks: &[MockRecord]) -> ChartSeries {
    let points: Vec<ChartPoint> = mocks
        .iter()
        .map(|m| ChartPoint {
            label: m.name.clone(),
            score: m.overall_score,
            percentile: m.overall_percentile,
        })
        .collect();
    let percentiles: Vec<f64> = points.iter().map(|p| p.percentile).collect();

    ChartSeries {
        title: "CAT Mock Test Performance".to_string(),
        description: "Overall score and percentile per full mock".to_string(),
        improvement: improvement_text(&percentiles),
        footer: format!(
            "Showing CAT mock test scores and percentiles across {} mock tests",
            points.len()
        ),
        points,
    }
}

/// One section's results, pooled the same way as the section averages:
/// matching sectionals first, then every full mock.
pub fn section_series(section: Section, mocks: &[MockRecord], sectionals: &[SectionalRecord]) -> ChartSeries {
    let points: Vec<ChartPoint> = sectionals
        .iter()
        .filter(|s| s.section == section)
        .map(|s| ChartPoint {
            label: s.name.clone(),
            score: s.score,
            percentile: s.percentile,
        })
        .chain(mocks.iter().map(|m| ChartPoint {
            label: m.name.clone(),
            score: m.section_score(section),
            percentile: m.section_percentile(section),
        }))
        .collect();
    let percentiles: Vec<f64> = points.iter().map(|p| p.percentile).collect();

    ChartSeries {
        title: format!("CAT Sectional Performance - {}", section),
        description: section.title().to_string(),
        improvement: improvement_text(&percentiles),
        footer: format!(
            "Showing {} scores and percentiles across {} mock tests",
            section,
            points.len()
        ),
        points,
    }
}
