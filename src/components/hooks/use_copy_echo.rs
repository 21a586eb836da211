use crate::state::clipboard::{write_clipboard_text, CopyEcho, COPY_ACK_MS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Clipboard copy with a transient "Copied!" acknowledgment.
///
/// Returns `(copy, echo)`: run `copy` with the text to place on the
/// clipboard; `echo` holds the acknowledged value until it expires.
/// Clipboard failures are logged and otherwise ignored.
pub(crate) fn use_copy_echo() -> (Callback<String>, RwSignal<CopyEcho>) {
    let echo = RwSignal::new(CopyEcho::default());
    let timer: StoredValue<Option<i32>> = StoredValue::new(None);

    let copy = Callback::new(move |text: String| {
        spawn_local(async move {
            if let Err(e) = write_clipboard_text(&text).await {
                log::error!("Failed to copy text: {e}");
                return;
            }
            log::debug!("copied {text}");
            if let Some(generation) = echo.try_update(|e| e.record(text)) {
                schedule_expiry(echo, timer, generation);
            }
        });
    });

    (copy, echo)
}

fn schedule_expiry(echo: RwSignal<CopyEcho>, timer: StoredValue<Option<i32>>, generation: u64) {
    let window = window();

    // Restart the window: the previous copy's timer must not fire.
    if let Some(handle) = timer.get_value() {
        window.clear_timeout_with_handle(handle);
    }

    let expire = wasm_bindgen::closure::Closure::once_into_js(move || {
        echo.try_update(|e| e.expire(generation));
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        expire.as_ref().unchecked_ref(),
        COPY_ACK_MS,
    ) {
        Ok(handle) => timer.set_value(Some(handle)),
        Err(e) => log::warn!("could not schedule copy acknowledgment expiry: {e:?}"),
    }
}
