//! UniFFI export layer: type-safe Kotlin bindings for the Dokaben engine.
//!
//! Each public type here maps to a generated Kotlin type.

mod session;
mod types;


pub use session::DkSession;
pub use types::{
    DkDirection, DkEditorContext, DkEditorInfo, DkError, DkEvent, DkGesture, DkHardKey,
    DkHostKey, DkKeyResponse,
};

use std::path::Path;

use tracing::debug;

use dokaben_core::fling::{classify, GestureSample};
use dokaben_core::glyph::transliterate;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Classify a fling with the configured thresholds. `None` means no swipe.
#[uniffi::export]
fn classify_fling(gesture: DkGesture) -> Option<DkDirection> {
    let sample: GestureSample = gesture.into();
    let thresholds = dokaben_core::settings::settings().fling_thresholds();
    classify(&sample, &thresholds).map(DkDirection::from)
}

#[uniffi::export]
fn dokaben_convert(text: String) -> String {
    transliterate(&text)
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), DkError> {
    let content = std::fs::read_to_string(&path).map_err(|e| DkError::Io {
        msg: format!("{path}: {e}"),
    })?;
    dokaben_core::settings::init_custom(content)
        .map_err(|e| DkError::InvalidData { msg: e.to_string() })?;
    debug!(%path, "custom settings loaded");
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    dokaben_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
