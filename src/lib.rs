//! SasaDoc Search - proximity-ranked specialist search for the SasaDoc patient app
//!
//! The core is a pure, synchronous search: haversine distance from an origin,
//! a radius cut-off and a stable sort by distance, experience or name. Around
//! it sit attribute filters, a symptom-to-specialty recommender and a thin
//! HTTP service that reads doctors from Supabase.
//!
//! All distances are in kilometers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_distance, search, SearchParameters, SpecialistFilter};
pub use crate::models::{Candidate, Point, RankedCandidate, SortKey, Specialist, SymptomAnalysis};
