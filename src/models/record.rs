// src/models/record.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{mock_test::MockRecord, sectional_test::SectionalRecord};

/// Either kind of stored test result.
///
/// Serialized without an extra wrapper: a sectional is recognised by its own
/// `"type": "sectional"` field, a full mock has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Mock(MockRecord),
    Sectional(SectionalRecord),
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Mock(m) => &m.id,
            Record::Sectional(s) => &s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Mock(m) => &m.name,
            Record::Sectional(s) => &s.name,
        }
    }

    pub fn date_taken(&self) -> NaiveDate {
        match self {
            Record::Mock(m) => m.date_taken,
            Record::Sectional(s) => s.date_taken,
        }
    }
}

/// Both collections as loaded from the store, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Records {
    pub mocks: Vec<MockRecord>,
    pub sectionals: Vec<SectionalRecord>,
}

impl Records {
    /// Mocks first, then sectionals.
    pub fn into_combined(self) -> Vec<Record> {
        self.mocks
            .into_iter()
            .map(Record::Mock)
            .chain(self.sectionals.into_iter().map(Record::Sectional))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        mock_test::Institute, section::Section, sectional_test::SectionalTag,
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()
    }

    #[test]
    fn test_untagged_decode_picks_the_right_kind() {
        let mock = Record::Mock(MockRecord {
            id: "m1".to_string(),
            name: "AIMCAT 2512".to_string(),
            institute: Institute::Ims,
            date_taken: date(),
            overall_score: 80.0,
            overall_percentile: 97.0,
            varc_score: 30.0,
            varc_percentile: 95.0,
            dilr_score: 25.0,
            dilr_percentile: 96.0,
            qa_score: 25.0,
            qa_percentile: 94.0,
        });
        let sectional = Record::Sectional(SectionalRecord {
            id: "s1".to_string(),
            kind: SectionalTag::Sectional,
            name: "QA Sectional".to_string(),
            section: Section::Qa,
            score: 33.0,
            percentile: 91.0,
            date_taken: date(),
        });

        for record in [mock, sectional] {
            let json = serde_json::to_string(&record).unwrap();
            let back: Record = serde_json::from_str(&json).unwrap();
            assert_eq!(back, record);
        }
    }

    #[test]
    fn test_combined_order() {
        let records = Records {
            mocks: vec![],
            sectionals: vec![SectionalRecord {
                id: "s1".to_string(),
                kind: SectionalTag::Sectional,
                name: "VARC 1".to_string(),
                section: Section::Varc,
                score: 20.0,
                percentile: 70.0,
                date_taken: date(),
            }],
        };
        let combined = records.into_combined();
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id(), "s1");
        assert_eq!(combined[0].name(), "VARC 1");
        assert_eq!(combined[0].date_taken(), date());
    }
}
