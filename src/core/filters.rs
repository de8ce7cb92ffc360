use crate::models::Specialist;

/// Check whether a specialty name fits a wanted specialty
///
/// Case-insensitive and bidirectional, so "Cardio" fits "Cardiology" and
/// "Pediatric Cardiology" fits "Cardiology". An empty `wanted` matches all.
pub fn specialty_matches(specialty: &str, wanted: &str) -> bool {
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() {
        return true;
    }

    let specialty = specialty.trim().to_lowercase();
    if specialty.is_empty() {
        return false;
    }

    specialty.contains(&wanted) || wanted.contains(&specialty)
}

/// Whether a specialist fits the specialty recommended by symptom analysis
#[inline]
pub fn is_recommended(specialist: &Specialist, recommended_specialty: &str) -> bool {
    !recommended_specialty.trim().is_empty()
        && specialty_matches(&specialist.specialty, recommended_specialty)
}

/// Attribute filters applied before the proximity search
#[derive(Debug, Clone, Default)]
pub struct SpecialistFilter {
    pub specialty: Option<String>,
    pub search_term: Option<String>,
    pub min_experience: Option<u32>,
}

impl SpecialistFilter {
    pub fn matches(&self, specialist: &Specialist) -> bool {
        if let Some(wanted) = &self.specialty {
            if !specialty_matches(&specialist.specialty, wanted) {
                return false;
            }
        }

        if let Some(term) = &self.search_term {
            let term = term.trim().to_lowercase();
            if !term.is_empty()
                && !specialist.name.to_lowercase().contains(&term)
                && !specialist.specialty.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if let Some(min) = self.min_experience {
            if specialist.years_of_experience < min {
                return false;
            }
        }

        true
    }

    /// Keep the specialists that pass every filter, in input order
    pub fn apply(&self, specialists: Vec<Specialist>) -> Vec<Specialist> {
        specialists.into_iter().filter(|s| self.matches(s)).collect()
    }
}
