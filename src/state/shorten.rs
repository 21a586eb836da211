use super::RequestSeq;
use crate::api::ApiResult;

/// A submission that passed local validation and should go to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingSubmit {
    pub id: u64,
    pub url: String,
}

/// Landing page form: one input, one result, one error banner.
#[derive(Clone, Debug, Default)]
pub(crate) struct ShortenForm {
    pub input: String,
    pub short_url: Option<String>,
    pub error: Option<String>,
    pub busy: bool,
    seq: RequestSeq,
}

impl ShortenForm {
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    /// Validate and start a submission.
    ///
    /// Blank input or an in-flight request yields `None` and leaves the
    /// form untouched.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if !self.can_submit() {
            return None;
        }
        self.busy = true;
        self.error = None;
        self.short_url = None;
        Some(PendingSubmit {
            id: self.seq.next(),
            url: self.input.trim().to_string(),
        })
    }

    /// Returns `false` if the form was reset while the request was in flight.
    pub fn finish_submit(&mut self, id: u64, result: ApiResult<String>) -> bool {
        if !self.seq.is_current(id) {
            return false;
        }
        match result {
            Ok(short) => self.short_url = Some(short),
            Err(e) => self.error = Some(e.message),
        }
        self.busy = false;
        true
    }

    pub fn reset(&mut self) {
        self.seq.invalidate();
        self.input.clear();
        self.short_url = None;
        self.error = None;
        self.busy = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn has_outcome(&self) -> bool {
        self.short_url.is_some() || self.error.is_some()
    }
}
