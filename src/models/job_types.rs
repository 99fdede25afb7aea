use serde::{Deserialize, Serialize};

/// Raw form control values as the webview reads them.
///
/// Checkboxes arrive as booleans; `payload::build` is the only place that
/// turns them into the 0/1 integers the backend expects.
#[derive(Debug, Clone, Deserialize)]
pub struct FormSnapshot {
    pub text: String,
    pub employment_type: String,
    pub required_experience: String,
    pub required_education: String,
    pub telecommuting: bool,
    pub has_company_logo: bool,
    pub has_questions: bool,
}

/// Canonical request payload for both `/predict` and `/explain`.
///
/// Boolean-like fields are always exactly 0 or 1 on the wire, never
/// true/false and never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingInput {
    pub text: String,
    pub employment_type: String,
    pub required_experience: String,
    pub required_education: String,
    pub telecommuting: u8,
    pub has_company_logo: u8,
    pub has_questions: u8,
}

/// Response body of `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    pub proba_fake: f64,
    /// Decision threshold the backend applied. Older backends omit it.
    #[serde(default)]
    pub threshold_used: Option<f64>,
}

/// One ranked feature attribution from `/explain`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub contrib: f64,
}

/// Response body of `POST /explain`.
///
/// Both lists come back ranked by contribution magnitude; the client keeps
/// server order and never re-sorts.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplanationResult {
    #[serde(default)]
    pub bias: Option<f64>,
    pub positive: Vec<FeatureContribution>,
    pub negative: Vec<FeatureContribution>,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
}
