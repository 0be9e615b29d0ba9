// src/engine/sections.rs

use crate::{
    engine::trend::{average, trend},
    models::{
        mock_test::MockRecord,
        section::Section,
        sectional_test::SectionalRecord,
        stats::{OverallStats, SectionStats},
    },
};

/// Scores for one section: matching sectionals first, then every mock's
/// share of that section. Each source keeps its insertion order.
pub fn section_pool(section: Section, mocks: &[MockRecord], sectionals: &[SectionalRecord]) -> Vec<f64> {
    sectionals
        .iter()
        .filter(|s| s.section == section)
        .map(|s| s.score)
        .chain(mocks.iter().map(|m| m.section_score(section)))
        .collect()
}

pub fn section_stats(section: Section, mocks: &[MockRecord], sectionals: &[SectionalRecord]) -> SectionStats {
    let pool = section_pool(section, mocks, sectionals);
    SectionStats {
        section,
        average: average(&pool),
        count: pool.len(),
        trend: trend(&pool),
    }
}

/// Overall figures come from full mocks only.
pub fn overall_stats(mocks: &[MockRecord]) -> OverallStats {
    let scores: Vec<f64> = mocks.iter().map(|m| m.overall_score).collect();
    OverallStats {
        average: average(&scores),
        count: scores.len(),
        trend: trend(&scores),
    }
}
