//! Clipboard access through the async Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy `text` to the system clipboard and invoke `on_done` on success.
/// Failures (denied permission, no window) are silent; the caller's UI
/// simply never shows its confirmation.
pub fn copy_text<F>(text: &str, on_done: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                on_done();
            }
        }
    });
}
