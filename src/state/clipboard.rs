use wasm_bindgen_futures::JsFuture;

/// How long a "Copied!" acknowledgment stays up.
pub(crate) const COPY_ACK_MS: i32 = 2000;

/// Tracks the most recently copied string until its acknowledgment expires.
///
/// Every copy bumps the generation; an expiry only clears the value it was
/// scheduled for, so an old timer firing late leaves a newer copy alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CopyEcho {
    last: Option<String>,
    generation: u64,
}

impl CopyEcho {
    pub fn record(&mut self, text: String) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.last = Some(text);
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.last = None;
        }
    }

    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.last = None;
    }

    pub fn last_copied(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.last_copied() == Some(text)
    }
}

/// Write `text` to the system clipboard.
pub(crate) async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write failed: {e:?}"))
}
