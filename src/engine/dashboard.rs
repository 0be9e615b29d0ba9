// src/engine/dashboard.rs

use crate::{
    engine::{
        percentile::predicted_percentile,
        sections::{overall_stats, section_stats},
        trend::round1,
    },
    models::{
        mock_test::MockRecord,
        section::Section,
        sectional_test::SectionalRecord,
        stats::{Dashboard, Direction, StatCard},
    },
};

const NO_DATA: &str = "Add data to see stats";

/// Everything the summary row of the dashboard shows.
pub fn dashboard(mocks: &[MockRecord], sectionals: &[SectionalRecord]) -> Dashboard {
    let overall = overall_stats(mocks);
    let predicted = predicted_percentile(overall.average);
    let sections: Vec<_> = Section::ALL
        .iter()
        .map(|&section| section_stats(section, mocks, sectionals))
        .collect();

    let has_mocks = overall.count > 0;
    let mut cards = Vec::with_capacity(2 + sections.len());
    cards.push(StatCard {
        title: "Current Average".to_string(),
        value: round1(overall.average),
        subtitle: if has_mocks { overall.trend.label.clone() } else { NO_DATA.to_string() },
        trend: overall.trend.direction,
    });
    cards.push(StatCard {
        title: "Predicted Percentile".to_string(),
        value: predicted,
        subtitle: if has_mocks { "Using CAT 2024 data".to_string() } else { NO_DATA.to_string() },
        trend: Direction::Neutral,
    });
    for stats in &sections {
        cards.push(StatCard {
            title: format!("{} Average", stats.section),
            value: round1(stats.average),
            subtitle: stats.trend.label.clone(),
            trend: stats.trend.direction,
        });
    }

    Dashboard {
        overall,
        predicted_percentile: predicted,
        sections,
        cards,
    }
}
