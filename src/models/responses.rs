use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedCandidate, SortKey, Specialist, SymptomAnalysis};

/// A ranked specialist with display helpers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistResult {
    #[serde(flatten)]
    pub ranked: RankedCandidate<Specialist>,
    #[serde(rename = "distanceLabel")]
    pub distance_label: String,
    pub recommended: bool,
}

/// Response for the specialist search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSpecialistsResponse {
    pub specialists: Vec<SpecialistResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// The backend candidate limit was hit, so some in-radius specialists may be missing
    #[serde(rename = "candidatesTruncated")]
    pub candidates_truncated: bool,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    #[serde(rename = "sortBy")]
    pub sort_by: SortKey,
}

/// Response for the symptom analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeSymptomsResponse {
    #[serde(flatten)]
    pub analysis: SymptomAnalysis,
    pub strategy: String,
    pub attempts: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
