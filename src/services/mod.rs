// Service exports
pub mod analysis;
pub mod supabase;

pub use analysis::{AnalysisError, AnalysisOutcome, AnalysisStrategy, AnalyzerOptions, SymptomAnalyzer};
pub use supabase::{FetchedSpecialists, SupabaseClient, SupabaseError};
