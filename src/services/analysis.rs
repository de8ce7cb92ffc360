use crate::core::specialty::{fallback_analysis, parse_analysis, recommend_specialty};
use crate::models::SymptomAnalysis;
use reqwest::Client;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const SYSTEM_PROMPT: &str = "You are a medical AI assistant helping {user_type}s analyze symptoms. Provide:
1. Possible conditions (with likelihood: high/medium/low)
2. Self-care recommendations
3. When to seek medical attention
4. Recommended medical specialty to consult

Format your response as JSON with these keys:
- possibleConditions: array of {condition, likelihood, description}
- selfCareRecommendations: array of practical advice
- urgencyLevel: \"immediate\", \"within_24_hours\", \"within_week\", or \"routine\"
- recommendedSpecialty: string (matching our specialties)
- disclaimer: medical disclaimer text

Be thorough but not alarming. Always recommend consulting healthcare professionals.";

/// Errors from a single language-model attempt
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Completion had no message content")]
    MissingContent,

    #[error("Completion was not a usable analysis")]
    Unparseable(String),

    #[error("No API key configured")]
    MissingApiKey,
}

/// One step of the analysis chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisStrategy {
    LanguageModel { model: String },
    KeywordMatch,
    Default,
}

impl fmt::Display for AnalysisStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisStrategy::LanguageModel { model } => write!(f, "model:{}", model),
            AnalysisStrategy::KeywordMatch => write!(f, "keyword"),
            AnalysisStrategy::Default => write!(f, "default"),
        }
    }
}

/// Analysis together with the strategy that produced it
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: SymptomAnalysis,
    pub strategy: AnalysisStrategy,
    /// Strategies that were tried and failed, in order, with the reason
    pub failed_attempts: Vec<String>,
}

/// Settings for the chat completion endpoint
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub models: Vec<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

/// Symptom analyzer
///
/// Tries each configured model in order, then keyword matching, then a
/// fixed default. The first strategy whose result passes its success check
/// wins, so `analyze` always returns an analysis.
pub struct SymptomAnalyzer {
    client: Client,
    options: AnalyzerOptions,
}

impl SymptomAnalyzer {
    pub fn new(options: AnalyzerOptions) -> Result<Self, AnalysisError> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self { client, options })
    }

    /// The ordered strategy chain
    pub fn strategies(&self) -> Vec<AnalysisStrategy> {
        let mut chain: Vec<AnalysisStrategy> = self
            .options
            .models
            .iter()
            .map(|model| AnalysisStrategy::LanguageModel { model: model.clone() })
            .collect();
        chain.push(AnalysisStrategy::KeywordMatch);
        chain.push(AnalysisStrategy::Default);
        chain
    }

    pub async fn analyze(&self, symptoms: &str, user_type: &str) -> AnalysisOutcome {
        let mut failed_attempts = Vec::new();
        // Last unparseable completion, shown to the patient in the fallback
        let mut last_raw: Option<String> = None;

        for strategy in self.strategies() {
            let attempt = match &strategy {
                AnalysisStrategy::LanguageModel { model } => {
                    match self.complete(model, symptoms, user_type).await {
                        Ok(analysis) => Some(analysis),
                        Err(e) => {
                            tracing::warn!("Symptom analysis with {} failed: {}", model, e);
                            if let AnalysisError::Unparseable(raw) = &e {
                                last_raw = Some(raw.clone());
                            }
                            failed_attempts.push(format!("{}: {}", strategy, e));
                            None
                        }
                    }
                }
                AnalysisStrategy::KeywordMatch => {
                    if recommend_specialty(symptoms).is_some() {
                        Some(fallback_analysis(symptoms, last_raw.as_deref()))
                    } else {
                        failed_attempts.push(format!("{}: no keyword matched", strategy));
                        None
                    }
                }
                // Keyword matching already failed, so this carries the default specialty
                AnalysisStrategy::Default => Some(fallback_analysis(symptoms, last_raw.as_deref())),
            };

            if let Some(analysis) = attempt {
                tracing::info!(
                    "Symptom analysis produced by {} (specialty: {})",
                    strategy,
                    analysis.recommended_specialty
                );
                return AnalysisOutcome {
                    analysis,
                    strategy,
                    failed_attempts,
                };
            }
        }

        // The chain always ends with Default, which never fails
        AnalysisOutcome {
            analysis: fallback_analysis(symptoms, last_raw.as_deref()),
            strategy: AnalysisStrategy::Default,
            failed_attempts,
        }
    }

    /// Ask one model for an analysis
    async fn complete(
        &self,
        model: &str,
        symptoms: &str,
        user_type: &str,
    ) -> Result<SymptomAnalysis, AnalysisError> {
        let api_key = self
            .options
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(AnalysisError::MissingApiKey)?;

        let url = format!("{}/chat/completions", self.options.endpoint.trim_end_matches('/'));

        let body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT.replace("{user_type}", user_type) },
                { "role": "user", "content": format!("Analyze these symptoms: {}", symptoms) },
            ],
            "temperature": self.options.temperature,
            "max_tokens": self.options.max_tokens,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AnalysisError::ApiError(format!(
                "Completion request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let content = json
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or(AnalysisError::MissingContent)?;

        parse_analysis(content).ok_or_else(|| AnalysisError::Unparseable(content.to_string()))
    }
}
