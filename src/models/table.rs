// src/models/table.rs

use std::cmp::Ordering;

use serde::Deserialize;

use crate::models::{mock_test::MockRecord, sectional_test::SectionalRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Sortable columns of the full-mock table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MockSortField {
    Name,
    Institute,
    #[default]
    DateTaken,
    OverallScore,
    VarcScore,
    DilrScore,
    QaScore,
}

/// Sortable columns of the sectional table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionalSortField {
    Name,
    Section,
    #[default]
    DateTaken,
    Score,
    Percentile,
}

/// Query string for table listings, e.g. `?sort=overallScore&direction=asc`.
/// Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TableParams<F> {
    #[serde(default)]
    pub sort: F,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Case-insensitive first, exact text second.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_num(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable sort: rows that compare equal keep their insertion order.
pub fn sort_mocks(rows: &mut [MockRecord], params: TableParams<MockSortField>) {
    rows.sort_by(|a, b| {
        let ordering = match params.sort {
            MockSortField::Name => compare_text(&a.name, &b.name),
            MockSortField::Institute => {
                compare_text(a.institute.as_str(), b.institute.as_str())
            }
            MockSortField::DateTaken => a.date_taken.cmp(&b.date_taken),
            MockSortField::OverallScore => compare_num(a.overall_score, b.overall_score),
            MockSortField::VarcScore => compare_num(a.varc_score, b.varc_score),
            MockSortField::DilrScore => compare_num(a.dilr_score, b.dilr_score),
            MockSortField::QaScore => compare_num(a.qa_score, b.qa_score),
        };
        apply_direction(ordering, params.direction)
    });
}

pub fn sort_sectionals(rows: &mut [SectionalRecord], params: TableParams<SectionalSortField>) {
    rows.sort_by(|a, b| {
        let ordering = match params.sort {
            SectionalSortField::Name => compare_text(&a.name, &b.name),
            SectionalSortField::Section => compare_text(a.section.as_str(), b.section.as_str()),
            SectionalSortField::DateTaken => a.date_taken.cmp(&b.date_taken),
            SectionalSortField::Score => compare_num(a.score, b.score),
            SectionalSortField::Percentile => compare_num(a.percentile, b.percentile),
        };
        apply_direction(ordering, params.direction)
    });
}
