// src/models/section.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the three CAT sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "VARC")]
    Varc,
    #[serde(rename = "DILR")]
    Dilr,
    #[serde(rename = "QA")]
    Qa,
}

impl Section {
    /// Dashboard display order.
    pub const ALL: [Section; 3] = [Section::Varc, Section::Dilr, Section::Qa];

    /// Highest score obtainable in this section.
    pub fn max_score(self) -> f64 {
        match self {
            Section::Varc => 72.0,
            Section::Dilr => 60.0,
            Section::Qa => 66.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Varc => "VARC",
            Section::Dilr => "DILR",
            Section::Qa => "QA",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Varc => "Verbal Ability & Reading Comprehension",
            Section::Dilr => "Data Interpretation & Logical Reasoning",
            Section::Qa => "Quantitative Aptitude",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VARC" => Ok(Section::Varc),
            "DILR" => Ok(Section::Dilr),
            "QA" => Ok(Section::Qa),
            other => Err(format!("Unknown section '{}'", other)),
        }
    }
}
