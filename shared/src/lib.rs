use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking a baby's current weight against the growth curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightStatus {
    /// The age in days is outside 1..=365, so the weight could not be evaluated
    InvalidAge,
    /// Current weight is below the minimum healthy weight for the age
    Underweight,
    /// Current weight is at or above the minimum healthy weight for the age
    Healthy,
}

impl WeightStatus {
    /// Numeric code used by older report consumers (1 = invalid age, 2 = underweight, 3 = healthy)
    pub fn code(&self) -> u8 {
        match self {
            WeightStatus::InvalidAge => 1,
            WeightStatus::Underweight => 2,
            WeightStatus::Healthy => 3,
        }
    }

    /// Parse a legacy numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(WeightStatus::InvalidAge),
            2 => Some(WeightStatus::Underweight),
            3 => Some(WeightStatus::Healthy),
            _ => None,
        }
    }

    /// Whether the weight was actually compared against the curve
    pub fn is_evaluated(&self) -> bool {
        !matches!(self, WeightStatus::InvalidAge)
    }
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightStatus::InvalidAge => write!(f, "invalid age"),
            WeightStatus::Underweight => write!(f, "underweight"),
            WeightStatus::Healthy => write!(f, "healthy"),
        }
    }
}

/// Flat view of a baby for rendering and serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyRecord {
    pub first_name: String,
    pub last_name: String,
    /// Nine character id, "000000000" when the supplied id was rejected
    pub id: String,
    /// DD/MM/YYYY
    pub date_of_birth: String,
    pub birth_weight_grams: i64,
    pub current_weight_grams: i64,
    /// Decimal kilograms, e.g. "3.2"
    pub birth_weight_display: String,
    pub current_weight_display: String,
}

/// Raw input for registering a baby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBabyRequest {
    pub first_name: String,
    pub last_name: String,
    pub id: String,
    /// DD/MM/YYYY
    pub date_of_birth: String,
    pub birth_weight_grams: i32,
}

/// Result of a growth-curve check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightCheckResponse {
    pub status: WeightStatus,
    pub age_in_days: i32,
    pub current_weight_grams: i64,
    /// Minimum healthy weight in grams, None when the age is out of range
    pub minimum_healthy_grams: Option<f64>,
    pub message: String,
}

/// Pairwise comparison of two babies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyComparisonResponse {
    pub same_baby: bool,
    pub twins: bool,
    pub heavier: bool,
    pub older: bool,
    /// Days between the two dates of birth
    pub days_apart: i32,
}

/// Everything the CLI reports about one baby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyReport {
    pub baby: BabyRecord,
    pub weight_check: WeightCheckResponse,
    /// Present when a sibling was given for comparison
    pub comparison: Option<BabyComparisonResponse>,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_status_codes() {
        assert_eq!(WeightStatus::InvalidAge.code(), 1);
        assert_eq!(WeightStatus::Underweight.code(), 2);
        assert_eq!(WeightStatus::Healthy.code(), 3);

        for status in [WeightStatus::InvalidAge, WeightStatus::Underweight, WeightStatus::Healthy] {
            assert_eq!(WeightStatus::from_code(status.code()), Some(status));
        }

        // Test unknown codes
        assert_eq!(WeightStatus::from_code(0), None);
        assert_eq!(WeightStatus::from_code(4), None);
    }

    #[test]
    fn test_weight_status_is_evaluated() {
        assert!(!WeightStatus::InvalidAge.is_evaluated());
        assert!(WeightStatus::Underweight.is_evaluated());
        assert!(WeightStatus::Healthy.is_evaluated());
    }

    #[test]
    fn test_weight_status_display() {
        assert_eq!(WeightStatus::InvalidAge.to_string(), "invalid age");
        assert_eq!(WeightStatus::Underweight.to_string(), "underweight");
        assert_eq!(WeightStatus::Healthy.to_string(), "healthy");
    }

    #[test]
    fn test_weight_check_response_json() {
        let response = WeightCheckResponse {
            status: WeightStatus::Healthy,
            age_in_days: 3,
            current_weight_grams: 3100,
            minimum_healthy_grams: Some(3062.5),
            message: "Healthy weight".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "Healthy");
        assert_eq!(json["age_in_days"], 3);
        assert_eq!(json["minimum_healthy_grams"], 3062.5);

        let back: WeightCheckResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_invalid_age_response_has_no_minimum() {
        let response = WeightCheckResponse {
            status: WeightStatus::InvalidAge,
            age_in_days: 400,
            current_weight_grams: 9000,
            minimum_healthy_grams: None,
            message: "Invalid age".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["minimum_healthy_grams"].is_null());
    }

    #[test]
    fn test_report_format() {
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_json_flag(true), ReportFormat::Json);
        assert_eq!(ReportFormat::from_json_flag(false), ReportFormat::Text);
    }
}
