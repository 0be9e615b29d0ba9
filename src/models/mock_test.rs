// src/models/mock_test.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::section::Section;

/// Coaching institute that published a full-length mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Institute {
    #[serde(rename = "TIME")]
    Time,
    #[serde(rename = "IMS")]
    Ims,
    #[serde(rename = "CatKing")]
    CatKing,
    #[serde(rename = "CL")]
    Cl,
}

impl Institute {
    pub fn as_str(self) -> &'static str {
        match self {
            Institute::Time => "TIME",
            Institute::Ims => "IMS",
            Institute::CatKing => "CatKing",
            Institute::Cl => "CL",
        }
    }
}

/// One completed full-length mock, stored under the `cat-mock-tests` key.
/// Covers all three sections, so it carries a score and percentile for each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockRecord {
    pub id: String,
    pub name: String,
    pub institute: Institute,
    pub date_taken: NaiveDate,
    pub overall_score: f64,
    pub overall_percentile: f64,
    pub varc_score: f64,
    pub varc_percentile: f64,
    pub dilr_score: f64,
    pub dilr_percentile: f64,
    pub qa_score: f64,
    pub qa_percentile: f64,
}

impl MockRecord {
    pub fn section_score(&self, section: Section) -> f64 {
        match section {
            Section::Varc => self.varc_score,
            Section::Dilr => self.dilr_score,
            Section::Qa => self.qa_score,
        }
    }

    pub fn section_percentile(&self, section: Section) -> f64 {
        match section {
            Section::Varc => self.varc_percentile,
            Section::Dilr => self.dilr_percentile,
            Section::Qa => self.qa_percentile,
        }
    }
}

/// DTO for recording a full mock.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMockRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required."))]
    pub name: String,
    pub institute: Institute,
    /// Defaults to today when omitted.
    pub date_taken: Option<NaiveDate>,
    #[validate(range(min = 0.0, max = 204.0, message = "Overall score must be between 0 and 204."))]
    pub overall_score: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Percentile must be between 0 and 100."))]
    pub overall_percentile: f64,
    #[validate(range(min = 0.0, max = 72.0, message = "VARC score must be between 0 and 72."))]
    pub varc_score: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Percentile must be between 0 and 100."))]
    pub varc_percentile: f64,
    #[validate(range(min = 0.0, max = 60.0, message = "DILR score must be between 0 and 60."))]
    pub dilr_score: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Percentile must be between 0 and 100."))]
    pub dilr_percentile: f64,
    #[validate(range(min = 0.0, max = 66.0, message = "QA score must be between 0 and 66."))]
    pub qa_score: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Percentile must be between 0 and 100."))]
    pub qa_percentile: f64,
}

impl CreateMockRequest {
    /// Builds the stored record. Call only after `validate()` succeeded.
    pub fn into_record(self, id: String, today: NaiveDate) -> MockRecord {
        MockRecord {
            id,
            name: self.name,
            institute: self.institute,
            date_taken: self.date_taken.unwrap_or(today),
            overall_score: self.overall_score,
            overall_percentile: self.overall_percentile,
            varc_score: self.varc_score,
            varc_percentile: self.varc_percentile,
            dilr_score: self.dilr_score,
            dilr_percentile: self.dilr_percentile,
            qa_score: self.qa_score,
            qa_percentile: self.qa_percentile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateMockRequest {
        CreateMockRequest {
            name: "SimCAT 1".to_string(),
            institute: Institute::Time,
            date_taken: None,
            overall_score: 98.0,
            overall_percentile: 99.1,
            varc_score: 40.0,
            varc_percentile: 98.0,
            dilr_score: 28.0,
            dilr_percentile: 97.5,
            qa_score: 30.0,
            qa_percentile: 96.0,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_section_maxima_enforced() {
        let mut req = request();
        req.varc_score = 73.0;
        let errors = req.validate().unwrap_err().to_string();
        assert!(errors.contains("VARC score must be between 0 and 72."));

        let mut req = request();
        req.dilr_score = 60.5;
        assert!(req.validate().is_err());

        let mut req = request();
        req.qa_score = -1.0;
        assert!(req.validate().is_err());

        let mut req = request();
        req.overall_score = 205.0;
        let errors = req.validate().unwrap_err().to_string();
        assert!(errors.contains("Overall score must be between 0 and 204."));
    }

    #[test]
    fn test_percentile_bounds_and_name_required() {
        let mut req = request();
        req.qa_percentile = 100.5;
        let errors = req.validate().unwrap_err().to_string();
        assert!(errors.contains("Percentile must be between 0 and 100."));

        let mut req = request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_into_record_defaults_date() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
        let record = request().into_record("abc".to_string(), today);
        assert_eq!(record.date_taken, today);
        assert_eq!(record.section_score(Section::Dilr), 28.0);
        assert_eq!(record.section_percentile(Section::Qa), 96.0);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
        let record = request().into_record("abc".to_string(), today);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dateTaken"], "2025-09-14");
        assert_eq!(json["institute"], "TIME");
        assert_eq!(json["varcScore"], 40.0);
        assert!(json.get("type").is_none());
    }
}
