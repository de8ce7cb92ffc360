use crate::models::{BoundingBox, DoctorRecord, Specialist};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Columns requested for each doctor, with the embedded profile and specialty
const DOCTOR_SELECT: &str = "id,name,latitude,longitude,years_of_experience,rating,is_available,bio,\
profile:profiles(first_name,last_name),specialty:specialties(name)";

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Specialists from one backend fetch
#[derive(Debug, Clone)]
pub struct FetchedSpecialists {
    pub specialists: Vec<Specialist>,
    /// The backend returned as many rows as the limit allowed, so rows past
    /// the limit (ordered by experience) were never seen
    pub truncated: bool,
}

/// Supabase REST (PostgREST) client
///
/// Only reads doctor rows; everything else about the backend (auth, RLS,
/// schema) is owned by Supabase.
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    doctors_table: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        anon_key: String,
        doctors_table: String,
        timeout: Duration,
    ) -> Result<Self, SupabaseError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            anon_key,
            doctors_table,
            client,
        })
    }

    /// Fetch specialists, optionally narrowed to a bounding box
    ///
    /// Rows are resolved into [`Specialist`] here; rows without coordinates
    /// are skipped since they cannot be ranked by distance.
    pub async fn fetch_specialists(
        &self,
        bbox: Option<&BoundingBox>,
        limit: usize,
    ) -> Result<FetchedSpecialists, SupabaseError> {
        let url = self.doctors_url(bbox, limit);

        tracing::debug!("Fetching specialists from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch specialists: {} - {}", status, body);
            return Err(SupabaseError::ApiError(format!(
                "Failed to fetch specialists: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected an array of rows".into()))?;

        let total = rows.len();
        let truncated = total >= limit;
        if truncated {
            tracing::warn!(
                "Backend returned {} rows, the candidate limit; less experienced specialists may be missing",
                total
            );
        }

        let specialists: Vec<Specialist> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value::<DoctorRecord>(row.clone()) {
                Ok(record) => record.into_specialist(),
                Err(e) => {
                    tracing::debug!("Skipping malformed doctor row: {}", e);
                    None
                }
            })
            .collect();

        if specialists.len() < total {
            tracing::debug!(
                "Skipped {} doctor rows without usable coordinates",
                total - specialists.len()
            );
        }

        tracing::debug!("Fetched {} specialists", specialists.len());

        Ok(FetchedSpecialists {
            specialists,
            truncated,
        })
    }

    fn doctors_url(&self, bbox: Option<&BoundingBox>, limit: usize) -> String {
        let mut url = format!(
            "{}/rest/v1/{}?select={}",
            self.base_url.trim_end_matches('/'),
            self.doctors_table,
            urlencoding::encode(DOCTOR_SELECT)
        );

        if let Some(bbox) = bbox {
            url.push_str(&format!(
                "&latitude=gte.{}&latitude=lte.{}",
                bbox.min_lat, bbox.max_lat
            ));

            if bbox.crosses_antimeridian() {
                url.push_str(&format!(
                    "&or=(longitude.gte.{},longitude.lte.{})",
                    bbox.min_lon, bbox.max_lon
                ));
            } else if bbox.max_lon - bbox.min_lon < 360.0 {
                url.push_str(&format!(
                    "&longitude=gte.{}&longitude=lte.{}",
                    bbox.min_lon, bbox.max_lon
                ));
            }
        }

        url.push_str(&format!("&order=years_of_experience.desc&limit={}", limit));
        url
    }
}
