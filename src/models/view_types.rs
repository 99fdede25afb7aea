use serde::Serialize;

/// Enabled/label pair for an interactive control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
}

/// Idle and pending states for both controls, fetched once by the webview
/// so button labels have a single source of truth.
#[derive(Debug, Clone, Serialize)]
pub struct ControlStates {
    pub predict_idle: ControlState,
    pub predict_pending: ControlState,
    pub explain_idle: ControlState,
    pub explain_pending: ControlState,
}

/// Everything the webview needs to paint after a predict attempt settles.
#[derive(Debug, Clone, Serialize)]
pub struct PredictView {
    pub panel_visible: bool,
    pub verdict_text: String,
    pub verdict_color: String,
    pub probability_line: String,
    pub threshold_line: String,
    pub icon: String,
    pub submit: ControlState,
}

/// View state after a successful explain call. Failures never mutate the
/// panel; they surface as a blocking notice instead.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainView {
    pub panel_visible: bool,
    pub explanation_html: String,
    pub explain: ControlState,
}

/// Documented defaults for every form control plus the reset result panel.
#[derive(Debug, Clone, Serialize)]
pub struct ClearedForm {
    pub text: String,
    pub employment_type: String,
    pub required_experience: String,
    pub required_education: String,
    pub telecommuting: bool,
    pub has_company_logo: bool,
    pub has_questions: bool,
    pub panel_visible: bool,
    pub verdict_text: String,
    pub verdict_color: String,
    pub probability_line: String,
    pub threshold_line: String,
    pub icon: String,
    pub explanation_html: String,
}
