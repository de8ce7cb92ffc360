// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, Candidate, DoctorRecord, Point, PossibleCondition, ProfileRecord,
    RankedCandidate, SortKey, Specialist, SpecialtyRecord, SymptomAnalysis, UrgencyLevel,
};
pub use requests::{AnalyzeSymptomsRequest, SearchSpecialistsRequest};
pub use responses::{
    AnalyzeSymptomsResponse, ErrorResponse, HealthResponse, SearchSpecialistsResponse,
    SpecialistResult,
};
