use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Anything that can be ranked by the proximity search
pub trait Candidate {
    fn id(&self) -> &str;
    fn point(&self) -> Point;
    fn years_of_experience(&self) -> u32;
    fn display_name(&self) -> &str;
}

/// Specialist resolved from a backend row
///
/// Every field is required here; defaults for missing data are applied once
/// when converting from [`DoctorRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub location: Point,
    #[serde(rename = "yearsOfExperience")]
    pub years_of_experience: u32,
    pub rating: f32,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Candidate for Specialist {
    fn id(&self) -> &str {
        &self.id
    }

    fn point(&self) -> Point {
        self.location
    }

    fn years_of_experience(&self) -> u32 {
        self.years_of_experience
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Raw doctor row as returned by the backend
///
/// Columns are nullable in the backend, so everything except the id is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile: Option<ProfileRecord>,
    #[serde(default)]
    pub specialty: Option<SpecialtyRecord>,
}

/// Embedded `profiles` relation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Embedded `specialties` relation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecialtyRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl DoctorRecord {
    /// Resolve the row into a [`Specialist`]
    ///
    /// Returns `None` when the row has no coordinates.
    pub fn into_specialist(self) -> Option<Specialist> {
        let location = Point::new(self.latitude?, self.longitude?);

        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.profile.as_ref().and_then(ProfileRecord::display_name))
            .unwrap_or_else(|| "Unknown".to_string());

        Some(Specialist {
            id: self.id,
            name,
            specialty: self.specialty.and_then(|s| s.name).unwrap_or_default(),
            location,
            years_of_experience: self.years_of_experience.unwrap_or(0),
            rating: self.rating.unwrap_or(0.0),
            is_available: self.is_available.unwrap_or(true),
            bio: self.bio,
        })
    }
}

impl ProfileRecord {
    fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(format!("Dr. {}", parts.join(" ")))
        }
    }
}

/// Sort order for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Distance,
    Experience,
    Name,
}

/// Candidate annotated with its distance from the search origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate<T> {
    #[serde(flatten)]
    pub candidate: T,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Geospatial bounding box
///
/// Longitudes stay within [-180, 180]; a box crossing the antimeridian has
/// `min_lon > max_lon` and covers `[min_lon, 180] ∪ [-180, max_lon]`.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }
}

/// A condition suggested by symptom analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossibleCondition {
    pub condition: String,
    #[serde(default = "default_likelihood")]
    pub likelihood: String,
    #[serde(default)]
    pub description: String,
}

fn default_likelihood() -> String {
    "unknown".to_string()
}

/// How soon the patient should see someone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Immediate,
    #[serde(rename = "within_24_hours")]
    Within24Hours,
    WithinWeek,
    #[default]
    Routine,
}

/// Structured symptom analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    #[serde(default)]
    pub possible_conditions: Vec<PossibleCondition>,
    #[serde(default)]
    pub self_care_recommendations: Vec<String>,
    #[serde(default)]
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub recommended_specialty: String,
    #[serde(default)]
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_applied_once() {
        let record: DoctorRecord = serde_json::from_value(serde_json::json!({
            "id": "doc-1",
            "latitude": -1.2921,
            "longitude": 36.8219,
            "profile": { "first_name": "Amina", "last_name": "Otieno" },
            "specialty": { "name": "Cardiology" }
        }))
        .unwrap();

        let specialist = record.into_specialist().unwrap();

        assert_eq!(specialist.name, "Dr. Amina Otieno");
        assert_eq!(specialist.specialty, "Cardiology");
        assert_eq!(specialist.years_of_experience, 0);
        assert!(specialist.is_available);
        assert_eq!(specialist.location, Point::new(-1.2921, 36.8219));
    }

    #[test]
    fn test_record_without_coordinates_is_skipped() {
        let record = DoctorRecord {
            id: "doc-2".to_string(),
            latitude: Some(10.0),
            ..Default::default()
        };

        assert!(record.into_specialist().is_none());
    }

    #[test]
    fn test_record_without_any_name() {
        let record = DoctorRecord {
            id: "doc-3".to_string(),
            latitude: Some(0.0),
            longitude: Some(0.0),
            profile: Some(ProfileRecord::default()),
            ..Default::default()
        };

        assert_eq!(record.into_specialist().unwrap().name, "Unknown");
    }

    #[test]
    fn test_sort_key_wire_names() {
        let key: SortKey = serde_json::from_str("\"experience\"").unwrap();
        assert_eq!(key, SortKey::Experience);
        assert_eq!(SortKey::default(), SortKey::Distance);
    }

    #[test]
    fn test_urgency_wire_names() {
        let level: UrgencyLevel = serde_json::from_str("\"within_24_hours\"").unwrap();
        assert_eq!(level, UrgencyLevel::Within24Hours);
        let level: UrgencyLevel = serde_json::from_str("\"within_week\"").unwrap();
        assert_eq!(level, UrgencyLevel::WithinWeek);
    }
}
