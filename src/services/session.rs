//! Page-lifetime holder of the last submitted payload.

use parking_lot::Mutex;

use crate::models::job_types::JobPostingInput;

/// Single mutable slot for the most recent submission.
///
/// Overwritten on every submit before the response arrives; the clear
/// action deliberately leaves it alone so an explanation of the last real
/// submission stays available until a new one is made. Injected into the
/// submit and explain handlers as Tauri managed state so each flow can be
/// tested with its own store.
pub struct SessionStore {
    last_payload: Mutex<Option<JobPostingInput>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            last_payload: Mutex::new(None),
        }
    }

    /// Record a freshly built payload, replacing any previous one.
    pub fn store(&self, payload: JobPostingInput) {
        *self.last_payload.lock() = Some(payload);
    }

    /// Snapshot of the last submitted payload, if any.
    pub fn last_payload(&self) -> Option<JobPostingInput> {
        self.last_payload.lock().clone()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(text: &str) -> JobPostingInput {
        JobPostingInput {
            text: text.to_string(),
            employment_type: "Unknown".to_string(),
            required_experience: "Unknown".to_string(),
            required_education: "Unknown".to_string(),
            telecommuting: 0,
            has_company_logo: 1,
            has_questions: 0,
        }
    }

    #[test]
    fn test_empty_before_first_submission() {
        let store = SessionStore::new();
        assert!(store.last_payload().is_none());
    }

    #[test]
    fn test_store_overwrites_previous_payload() {
        let store = SessionStore::new();
        store.store(payload("first"));
        store.store(payload("second"));
        assert_eq!(store.last_payload().unwrap().text, "second");
    }

    #[test]
    fn test_round_trip_serializes_identically() {
        // The explain call must send byte-identical JSON for the fields
        // shared with the predict call.
        let store = SessionStore::new();
        let submitted = payload("Earn $5000/week from home");
        let sent = serde_json::to_string(&submitted).unwrap();
        store.store(submitted);
        let replayed = serde_json::to_string(&store.last_payload().unwrap()).unwrap();
        assert_eq!(sent, replayed);
    }
}
