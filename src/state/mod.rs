pub(crate) mod clipboard;
pub(crate) mod dashboard;
pub(crate) mod session;
pub(crate) mod shorten;

use crate::api::{ApiClient, EnvConfig};
use leptos::prelude::*;
use session::Session;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: StoredValue<ApiClient>,

    /// Only the shell writes this, through the `Session` transitions.
    pub session: RwSignal<Session>,

    /// Header-level error (failed logout).
    pub shell_error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            api_client: StoredValue::new(ApiClient::from_config(config)),
            session: RwSignal::new(Session::Loading),
            shell_error: RwSignal::new(None),
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Monotonic request tags for one flow.
///
/// Each new request takes the next number; a response is applied only if its
/// number is still the latest, so a slow older request can't overwrite a newer
/// result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        id == self.latest
    }

    /// Drop whatever is in flight without starting a new request.
    pub fn invalidate(&mut self) {
        self.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_seq_only_latest_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_request_seq_invalidate() {
        let mut seq = RequestSeq::default();
        let id = seq.next();
        seq.invalidate();
        assert!(!seq.is_current(id));
    }

    #[test]
    fn test_request_seq_starts_with_nothing_current() {
        let seq = RequestSeq::default();
        assert!(!seq.is_current(1));
    }
}
