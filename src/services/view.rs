//! Pure view-state computation.
//!
//! Every user-visible transition of the result panel and the two buttons is
//! computed here as plain data; the webview script only applies the
//! returned structs to widgets. Keeping this side-effect free lets the
//! whole state machine run under plain unit tests.

use crate::models::job_types::{ExplanationResult, FeatureContribution, PredictionResult};
use crate::models::view_types::{ClearedForm, ControlState, ControlStates, ExplainView, PredictView};
use crate::services::escape::escape_html;

const SUBMIT_LABEL: &str = "Predict";
const SUBMIT_PENDING_LABEL: &str = "Predicting…";
const EXPLAIN_LABEL: &str = "Explain prediction";
const EXPLAIN_PENDING_LABEL: &str = "Explaining…";

const FAKE_VERDICT: &str = "⚠️ Fake Job Posting Detected";
const REAL_VERDICT: &str = "✅ Legitimate Job Posting";
const ERROR_VERDICT: &str = "❌ Error: Unable to predict";

const FAKE_COLOR: &str = "#dc2626";
const REAL_COLOR: &str = "#16a34a";

const RESULT_ICON: &str = "🔎";
const PLACEHOLDER_DASH: &str = "—";

/// Sentinel default for the three enum selects.
pub const UNKNOWN_OPTION: &str = "Unknown";

fn submit_idle() -> ControlState {
    ControlState {
        enabled: true,
        label: SUBMIT_LABEL.to_string(),
    }
}

fn explain_idle() -> ControlState {
    ControlState {
        enabled: true,
        label: EXPLAIN_LABEL.to_string(),
    }
}

/// Idle and pending control states for both flows. The pending halves are
/// applied by the webview when it enters a flow; the idle halves are what
/// every terminal view restores unconditionally.
pub fn control_states() -> ControlStates {
    ControlStates {
        predict_idle: submit_idle(),
        predict_pending: ControlState {
            enabled: false,
            label: SUBMIT_PENDING_LABEL.to_string(),
        },
        explain_idle: explain_idle(),
        explain_pending: ControlState {
            enabled: false,
            label: EXPLAIN_PENDING_LABEL.to_string(),
        },
    }
}

/// Pending → Success for the predict flow.
pub fn predict_success(result: &PredictionResult) -> PredictView {
    let is_fake = result.label == "Fake";
    PredictView {
        panel_visible: true,
        verdict_text: if is_fake { FAKE_VERDICT } else { REAL_VERDICT }.to_string(),
        verdict_color: if is_fake { FAKE_COLOR } else { REAL_COLOR }.to_string(),
        probability_line: format!("Probability (Fake): {:.2}%", result.proba_fake * 100.0),
        threshold_line: match result.threshold_used {
            Some(t) => format!("Decision threshold: {:.2}", t),
            None => String::new(),
        },
        icon: RESULT_ICON.to_string(),
        submit: submit_idle(),
    }
}

/// Pending → Failure for the predict flow. Fixed generic message; the
/// submit control is restored exactly as on success.
pub fn predict_failure() -> PredictView {
    PredictView {
        panel_visible: true,
        verdict_text: ERROR_VERDICT.to_string(),
        verdict_color: FAKE_COLOR.to_string(),
        probability_line: String::new(),
        threshold_line: String::new(),
        icon: RESULT_ICON.to_string(),
        submit: submit_idle(),
    }
}

/// Pending → Success for the explain flow.
pub fn explain_success(result: &ExplanationResult) -> ExplainView {
    ExplainView {
        panel_visible: true,
        explanation_html: render_explanation(result),
        explain: explain_idle(),
    }
}

/// Render the attribution breakdown as markup for the explanation
/// sub-panel. Feature names are untrusted server text and go through the
/// escaper; contributions are typed floats formatted to four decimals.
pub fn render_explanation(result: &ExplanationResult) -> String {
    let mut html = String::new();
    if let Some(bias) = result.bias {
        html.push_str(&format!("<p class=\"bias\">Model bias: {:.4}</p>", bias));
    }
    html.push_str("<div class=\"contrib-columns\">");
    html.push_str(&render_column("Pushes toward Fake", &result.positive));
    html.push_str(&render_column("Pushes toward Legitimate", &result.negative));
    html.push_str("</div>");
    html
}

fn render_column(heading: &str, contributions: &[FeatureContribution]) -> String {
    let mut html = format!("<div class=\"contrib-column\"><h4>{}</h4>", heading);
    if contributions.is_empty() {
        html.push_str("<p class=\"no-features\">No contributing features</p>");
    } else {
        // Server order is significant (ranked by magnitude); keep it.
        html.push_str("<ol>");
        for item in contributions {
            html.push_str(&format!(
                "<li><span class=\"feature\">{}</span><span class=\"contrib\">{:.4}</span></li>",
                escape_html(&item.feature),
                item.contrib
            ));
        }
        html.push_str("</ol>");
    }
    html.push_str("</div>");
    html
}

/// The clear action: every control back to its documented default, panel
/// hidden, placeholders restored. Session state is deliberately untouched.
pub fn cleared_form() -> ClearedForm {
    ClearedForm {
        text: String::new(),
        employment_type: UNKNOWN_OPTION.to_string(),
        required_experience: UNKNOWN_OPTION.to_string(),
        required_education: UNKNOWN_OPTION.to_string(),
        telecommuting: false,
        has_company_logo: false,
        has_questions: false,
        panel_visible: false,
        verdict_text: PLACEHOLDER_DASH.to_string(),
        verdict_color: String::new(),
        probability_line: PLACEHOLDER_DASH.to_string(),
        threshold_line: String::new(),
        icon: String::new(),
        explanation_html: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: &str, proba: f64) -> PredictionResult {
        PredictionResult {
            label: label.to_string(),
            proba_fake: proba,
            threshold_used: None,
        }
    }

    #[test]
    fn test_probability_line_formats_to_two_decimals() {
        let view = predict_success(&prediction("Fake", 0.8734));
        assert_eq!(view.probability_line, "Probability (Fake): 87.34%");
    }

    #[test]
    fn test_fake_and_real_verdicts_use_fixed_pairs() {
        let fake = predict_success(&prediction("Fake", 0.9));
        assert_eq!(fake.verdict_text, FAKE_VERDICT);
        assert_eq!(fake.verdict_color, FAKE_COLOR);
        assert!(fake.panel_visible);

        let real = predict_success(&prediction("Real", 0.1));
        assert_eq!(real.verdict_text, REAL_VERDICT);
        assert_eq!(real.verdict_color, REAL_COLOR);

        // Anything other than the exact "Fake" label renders legitimate,
        // matching the backend's "Real" wording.
        let other = predict_success(&prediction("Legitimate", 0.1));
        assert_eq!(other.verdict_text, REAL_VERDICT);
    }

    #[test]
    fn test_failure_restores_submit_and_clears_probability() {
        let view = predict_failure();
        assert!(view.panel_visible);
        assert_eq!(view.verdict_text, ERROR_VERDICT);
        assert_eq!(view.probability_line, "");
        assert!(view.submit.enabled);
        assert_eq!(view.submit.label, SUBMIT_LABEL);
        // Same unconditional restore as the success path.
        let success = predict_success(&prediction("Fake", 0.5));
        assert_eq!(view.submit, success.submit);
        assert_eq!(view.icon, success.icon);
    }

    #[test]
    fn test_threshold_line_renders_only_when_present() {
        let mut result = prediction("Fake", 0.8);
        assert_eq!(predict_success(&result).threshold_line, "");
        result.threshold_used = Some(0.5);
        assert_eq!(
            predict_success(&result).threshold_line,
            "Decision threshold: 0.50"
        );
    }

    #[test]
    fn test_empty_polarity_renders_placeholder_not_empty_list() {
        let result = ExplanationResult {
            bias: None,
            positive: vec![],
            negative: vec![FeatureContribution {
                feature: "has_company_logo".to_string(),
                contrib: -0.4219,
            }],
        };
        let html = render_explanation(&result);
        assert!(html.contains("No contributing features"));
        assert!(html.contains("-0.4219"));
        // Exactly one list: the empty positive column must not emit <ol>.
        assert_eq!(html.matches("<ol>").count(), 1);
    }

    #[test]
    fn test_feature_names_are_escaped_and_order_preserved() {
        let result = ExplanationResult {
            bias: Some(-1.2345678),
            positive: vec![
                FeatureContribution {
                    feature: "<img src=x onerror=alert(1)>".to_string(),
                    contrib: 0.91,
                },
                FeatureContribution {
                    feature: "salary".to_string(),
                    contrib: 0.05,
                },
            ],
            negative: vec![],
        };
        let html = render_explanation(&result);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src&#x3D;x onerror&#x3D;alert(1)&gt;"));
        assert!(html.contains("Model bias: -1.2346"));
        // Server ranking is kept: the big contributor comes first.
        let first = html.find("0.9100").unwrap();
        let second = html.find("0.0500").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_cleared_form_documented_defaults() {
        let cleared = cleared_form();
        assert_eq!(cleared.text, "");
        assert_eq!(cleared.employment_type, UNKNOWN_OPTION);
        assert_eq!(cleared.required_experience, UNKNOWN_OPTION);
        assert_eq!(cleared.required_education, UNKNOWN_OPTION);
        assert!(!cleared.telecommuting);
        assert!(!cleared.has_company_logo);
        assert!(!cleared.has_questions);
        assert!(!cleared.panel_visible);
        assert_eq!(cleared.verdict_text, "—");
        assert_eq!(cleared.probability_line, "—");
        assert_eq!(cleared.icon, "");
        assert_eq!(cleared.explanation_html, "");
    }

    #[test]
    fn test_pending_states_disable_and_relabel() {
        let states = control_states();
        assert!(!states.predict_pending.enabled);
        assert_eq!(states.predict_pending.label, SUBMIT_PENDING_LABEL);
        assert!(!states.explain_pending.enabled);
        assert_eq!(states.explain_pending.label, EXPLAIN_PENDING_LABEL);
        assert!(states.predict_idle.enabled);
        assert!(states.explain_idle.enabled);
    }
}
