// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod search;
pub mod specialty;

pub use distance::{compute_distance, calculate_bounding_box, is_within_bounding_box, format_distance};
pub use filters::{specialty_matches, is_recommended, SpecialistFilter};
pub use search::{search, SearchParameters};
pub use specialty::{recommend_specialty, parse_analysis, fallback_analysis, DEFAULT_SPECIALTY};
