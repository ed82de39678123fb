//! localStorage adapter for the visualizer snapshot.
//!
//! A single key holds the whole document. Reads never fail the app: a
//! missing key means first launch, an unreadable value is logged and
//! treated the same way.

use model::PersistedState;
use web_sys::window;

const STATE_STORAGE_KEY: &str = "visualizerState";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the stored snapshot. `None` when nothing usable is stored.
pub fn load() -> Option<PersistedState> {
    let raw = local_storage()?.get_item(STATE_STORAGE_KEY).ok().flatten()?;
    match PersistedState::from_json(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            log::error!("Failed to parse saved state: {err}");
            None
        }
    }
}

/// Write the snapshot. Storage failures (quota, private mode) are logged
/// and otherwise ignored; the in-memory state stays authoritative.
pub fn save(state: &PersistedState) {
    let Some(storage) = local_storage() else {
        return;
    };
    match state.to_json() {
        Ok(json) => {
            if storage.set_item(STATE_STORAGE_KEY, &json).is_err() {
                log::warn!("Failed to write state to localStorage");
            }
        }
        Err(err) => log::error!("Failed to encode state: {err}"),
    }
}
