//! Stateful flick-keyboard session: fling tracking, composing text and
//! candidates.
//!
//! `InputSession` owns the per-field editing state and processes each host
//! event, returning the ordered list of host calls the Kotlin frontend should
//! make. It never talks to the host itself.

pub(crate) mod types;

mod candidate_gen;
mod commit;
mod composing;
mod key_handlers;
mod lifecycle;
mod shift;
mod tracker;

#[cfg(test)]
mod tests;

use std::time::{SystemTime, UNIX_EPOCH};

pub use types::{
    key, EditorContext, EditorInfo, Event, HardKeyCode, HostAction, HostKey, InputClass,
    KeyResponse, SessionConfig, TextVariation,
};

use shift::ShiftState;
use tracker::PendingGesture;
use types::FieldState;

/// Stateful flick-keyboard session encapsulating all input processing logic.
pub struct InputSession {
    config: SessionConfig,

    /// Text entered but not yet committed to the field.
    composing: String,
    /// Derived from `composing`; empty or `[plain, dokaben]`.
    candidates: Vec<String>,

    pending: PendingGesture,
    shift: ShiftState,
    field: FieldState,
}

impl InputSession {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            composing: String::new(),
            candidates: Vec::new(),
            pending: PendingGesture::default(),
            shift: ShiftState::default(),
            field: FieldState::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_composing(&self) -> bool {
        !self.composing.is_empty()
    }

    pub fn composing_text(&self) -> &str {
        &self.composing
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn caps_lock(&self) -> bool {
        self.shift.caps_lock
    }

    pub fn is_shifted(&self) -> bool {
        self.shift.shifted
    }

    pub fn prediction_on(&self) -> bool {
        self.field.prediction_on
    }

    pub fn completion_on(&self) -> bool {
        self.field.completion_on
    }

    /// Process an event at the current wall-clock time.
    pub fn handle_event(&mut self, event: Event, ctx: Option<&EditorContext>) -> KeyResponse {
        self.handle_event_at(event, ctx, now_epoch_ms())
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds since the Unix epoch. A clock before 1970 reads as 0.
pub fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
