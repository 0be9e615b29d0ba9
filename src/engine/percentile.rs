// src/engine/percentile.rs

use crate::models::stats::PercentileReferencePoint;

/// CAT 2024 overall score to percentile, highest score first.
pub const PERCENTILE_TABLE: [PercentileReferencePoint; 9] = [
    PercentileReferencePoint { score: 127.0, percentile: 99.9 },
    PercentileReferencePoint { score: 103.97, percentile: 99.5 },
    PercentileReferencePoint { score: 95.13, percentile: 99.0 },
    PercentileReferencePoint { score: 78.9, percentile: 97.0 },
    PercentileReferencePoint { score: 70.0, percentile: 95.0 },
    PercentileReferencePoint { score: 58.0, percentile: 90.0 },
    PercentileReferencePoint { score: 44.0, percentile: 80.0 },
    PercentileReferencePoint { score: 25.3, percentile: 70.0 },
    PercentileReferencePoint { score: 19.5, percentile: 60.0 },
];

/// Percentile of the reference point nearest to `score`.
///
/// Nearest neighbour only, no interpolation. On a tie the earlier (higher
/// scoring) entry wins. A score of exactly zero means "no data" and maps to 0.
pub fn predicted_percentile(score: f64) -> f64 {
    if score == 0.0 {
        return 0.0;
    }
    let mut closest = &PERCENTILE_TABLE[0];
    for entry in &PERCENTILE_TABLE {
        if (entry.score - score).abs() < (closest.score - score).abs() {
            closest = entry;
        }
    }
    closest.percentile
}
