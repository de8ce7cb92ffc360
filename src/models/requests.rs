use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::SortKey;

/// Request to search specialists near a point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchSpecialistsRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 0.0))]
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(alias = "sort_by", rename = "sortBy", default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(alias = "search_term", rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(alias = "min_experience", rename = "minExperience", default)]
    pub min_experience: Option<u32>,
    #[serde(alias = "recommended_specialty", rename = "recommendedSpecialty", default)]
    pub recommended_specialty: Option<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to analyze free-text symptoms
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeSymptomsRequest {
    #[validate(length(min = 1, max = 4000))]
    pub symptoms: String,
    #[serde(alias = "user_type", rename = "userType", default = "default_user_type")]
    pub user_type: String,
}

fn default_user_type() -> String {
    "patient".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_defaults() {
        let req: SearchSpecialistsRequest =
            serde_json::from_str(r#"{"latitude": 40.7, "longitude": -74.0}"#).unwrap();

        assert_eq!(req.sort_by, SortKey::Distance);
        assert!(req.radius_km.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_search_request_rejects_bad_latitude() {
        let req: SearchSpecialistsRequest =
            serde_json::from_str(r#"{"latitude": 123.0, "longitude": 0.0}"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_request_rejects_negative_radius() {
        let req: SearchSpecialistsRequest =
            serde_json::from_str(r#"{"latitude": 0.0, "longitude": 0.0, "radiusKm": -5.0}"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_analyze_request_requires_symptoms() {
        let req: AnalyzeSymptomsRequest = serde_json::from_str(r#"{"symptoms": ""}"#).unwrap();

        assert_eq!(req.user_type, "patient");
        assert!(req.validate().is_err());
    }
}
