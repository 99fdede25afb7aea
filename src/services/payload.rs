//! Assembles the request payload from a form snapshot.

use crate::models::job_types::{FormSnapshot, JobPostingInput};

/// Build the canonical payload from the current form state.
///
/// Always succeeds: this is a literal snapshot of the control values with
/// checkboxes mapped to 0/1. Anything the browser's native constraints let
/// through is sent as-is; the backend owns validation.
pub fn build(form: &FormSnapshot) -> JobPostingInput {
    JobPostingInput {
        text: form.text.clone(),
        employment_type: form.employment_type.clone(),
        required_experience: form.required_experience.clone(),
        required_education: form.required_education.clone(),
        telecommuting: if form.telecommuting { 1 } else { 0 },
        has_company_logo: if form.has_company_logo { 1 } else { 0 },
        has_questions: if form.has_questions { 1 } else { 0 },
    }
}
