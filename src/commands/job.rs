use tauri::State;

use crate::constants;
use crate::error::AppError;
use crate::models::job_types::FormSnapshot;
use crate::models::view_types::{ClearedForm, ControlStates, ExplainView, PredictView};
use crate::services::api_client::ApiClient;
use crate::services::session::SessionStore;
use crate::services::{payload, view};

const NO_PAYLOAD_NOTICE: &str =
    "Submit a job posting before requesting an explanation.";

/// Submit the form for classification.
///
/// The payload lands in the session store before the request goes out, so
/// an explanation of this submission is possible even if the prediction
/// itself fails. Both outcomes come back as `Ok` views: every failure is
/// recovered here into the fixed error panel, logged for developers but
/// shown generically.
#[tauri::command]
pub async fn predict_job(
    form: FormSnapshot,
    client: State<'_, ApiClient>,
    session: State<'_, SessionStore>,
) -> Result<PredictView, AppError> {
    let input = payload::build(&form);
    session.store(input.clone());

    match client.predict(&input).await {
        Ok(result) => {
            log::info!(
                "Prediction: {} (proba_fake={:.4})",
                result.label,
                result.proba_fake
            );
            Ok(view::predict_success(&result))
        }
        Err(e) => {
            log::error!("Prediction request failed: {}", e);
            Ok(view::predict_failure())
        }
    }
}

/// Request the feature-attribution breakdown for the last submission.
///
/// Errors here are surfaced to the caller with full diagnostic detail (a
/// blocking notice in the webview), unlike predict failures. An empty
/// session is rejected before any network call.
#[tauri::command]
pub async fn explain_job(
    top_n: Option<u32>,
    client: State<'_, ApiClient>,
    session: State<'_, SessionStore>,
) -> Result<ExplainView, AppError> {
    let input = require_last_payload(&session)?;
    let top_n = effective_top_n(top_n);

    match client.explain(&input, top_n).await {
        Ok(result) => Ok(view::explain_success(&result)),
        Err(e) => {
            log::error!("Explain request failed: {}", e);
            Err(e.into())
        }
    }
}

/// Reset view for the clear action. Pure: the session store keeps the last
/// submitted payload so explain stays available.
#[tauri::command]
pub fn clear_form() -> ClearedForm {
    view::cleared_form()
}

/// Idle/pending button states, fetched once by the webview at startup.
#[tauri::command]
pub fn control_states() -> ControlStates {
    view::control_states()
}

/// Backend health probe for the footer status line.
#[tauri::command]
pub async fn backend_health(client: State<'_, ApiClient>) -> Result<bool, AppError> {
    Ok(client
        .health()
        .await
        .map(|h| h.healthy)
        .unwrap_or(false))
}

fn require_last_payload(
    session: &SessionStore,
) -> Result<crate::models::job_types::JobPostingInput, AppError> {
    session.last_payload().ok_or_else(|| NO_PAYLOAD_NOTICE.into())
}

fn effective_top_n(requested: Option<u32>) -> u32 {
    requested
        .filter(|n| *n >= 1)
        .unwrap_or_else(constants::get_top_n)
}
