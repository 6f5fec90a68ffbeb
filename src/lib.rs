//! Dokaben flick keyboard engine.
//!
//! The editing logic lives in `dokaben-session`; this crate exposes it to the
//! Android keyboard service through UniFFI-generated Kotlin bindings.

uniffi::setup_scaffolding!();

mod api;
mod trace_init;

pub use api::{
    DkDirection, DkEditorContext, DkEditorInfo, DkError, DkEvent, DkGesture, DkHardKey,
    DkHostKey, DkKeyResponse, DkSession,
};
