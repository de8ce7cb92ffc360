use crate::models::{PossibleCondition, SymptomAnalysis, UrgencyLevel};

/// Specialty used when nothing more specific can be inferred
pub const DEFAULT_SPECIALTY: &str = "General Medicine";

pub const DISCLAIMER: &str = "This analysis is for informational purposes only and should not \
replace professional medical advice.";

/// Keyword table, earlier entries win ties
const SPECIALTY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Cardiology", &["chest pain", "palpitation", "heart", "blood pressure", "hypertension", "irregular heartbeat"]),
    ("Neurology", &["headache", "migraine", "seizure", "numbness", "dizziness", "tingling", "memory loss"]),
    ("Pulmonology", &["cough", "shortness of breath", "wheez", "asthma", "breathing"]),
    ("Gastroenterology", &["stomach", "abdominal", "nausea", "vomit", "diarrhea", "constipation", "heartburn"]),
    ("Dermatology", &["rash", "itch", "skin", "acne", "eczema", "mole"]),
    ("Orthopedics", &["joint", "back pain", "fracture", "knee", "shoulder", "sprain", "bone"]),
    ("Ophthalmology", &["eye", "vision", "blurred", "blurry"]),
    ("Otolaryngology", &["earache", "ear pain", "sore throat", "sinus", "hearing", "tonsil"]),
    ("Psychiatry", &["anxiety", "depress", "panic", "insomnia", "mood"]),
    ("Endocrinology", &["diabetes", "thyroid", "excessive thirst", "blood sugar"]),
    ("Urology", &["urine", "urinat", "kidney", "bladder"]),
    ("Gynecology", &["pregnan", "menstrua", "period", "pelvic"]),
    ("Pediatrics", &["child", "infant", "baby", "toddler"]),
];

/// Infer a specialty from free-text symptoms by keyword hits
///
/// Returns the specialty with the most keyword hits, `None` if none hit.
pub fn recommend_specialty(symptoms: &str) -> Option<&'static str> {
    let text = symptoms.to_lowercase();

    let mut best: Option<(&'static str, usize)> = None;
    for (specialty, keywords) in SPECIALTY_KEYWORDS {
        let hits = keywords.iter().filter(|k| text.contains(*k)).count();
        if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
            best = Some((*specialty, hits));
        }
    }

    best.map(|(specialty, _)| specialty)
}

/// Parse a language-model completion into a [`SymptomAnalysis`]
///
/// Accepts bare JSON or JSON inside a markdown code fence. Only analyses
/// with a non-blank recommended specialty are accepted.
pub fn parse_analysis(raw: &str) -> Option<SymptomAnalysis> {
    let body = strip_code_fence(raw.trim());

    let analysis: SymptomAnalysis = serde_json::from_str(body).ok()?;
    if analysis.recommended_specialty.trim().is_empty() {
        return None;
    }

    Some(analysis)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the info string ("json") up to the first newline
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Structured analysis used when no language model produced one
///
/// `raw` is the unparsed model output if there was any; it is kept as the
/// condition description so the patient still sees it.
pub fn fallback_analysis(symptoms: &str, raw: Option<&str>) -> SymptomAnalysis {
    let specialty = recommend_specialty(symptoms).unwrap_or(DEFAULT_SPECIALTY);

    SymptomAnalysis {
        possible_conditions: vec![PossibleCondition {
            condition: "Analysis needed".to_string(),
            likelihood: "unknown".to_string(),
            description: raw.unwrap_or_default().to_string(),
        }],
        self_care_recommendations: vec![
            "Consult with a healthcare professional for proper diagnosis".to_string(),
        ],
        urgency_level: UrgencyLevel::Routine,
        recommended_specialty: specialty.to_string(),
        disclaimer: DISCLAIMER.to_string(),
    }
}
