use tracing::debug;

use dokaben_core::fling::{classify, Direction, GestureSample};
use dokaben_core::syllable::{is_syllable_key, resolve_key};

use super::types::{EditorContext, KeyResponse};
use super::InputSession;

/// Transient state of one key contact, from press to release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingGesture {
    pub(crate) key: Option<i32>,
    pub(crate) direction: Direction,
    pub(crate) pressing: bool,
}

impl Default for PendingGesture {
    fn default() -> Self {
        Self {
            key: None,
            direction: Direction::Center,
            pressing: false,
        }
    }
}

impl PendingGesture {
    fn press(&mut self, code: i32) {
        self.key = Some(code);
        self.direction = Direction::Center;
        self.pressing = true;
    }

    /// Take the pressed key and final direction, returning to idle.
    fn take(&mut self) -> Option<(i32, Direction)> {
        let taken = self.key.map(|k| (k, self.direction));
        *self = Self::default();
        taken
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl InputSession {
    pub(super) fn handle_press(&mut self, code: i32) -> KeyResponse {
        self.pending.press(code);
        KeyResponse::consumed()
    }

    /// The last successful classification before release wins.
    pub(super) fn handle_gesture(&mut self, sample: &GestureSample) -> KeyResponse {
        if !self.pending.pressing {
            debug!("gesture without a pressed key ignored");
            return KeyResponse::not_consumed();
        }
        if let Some(direction) = classify(sample, &self.config.thresholds) {
            debug!(?direction, "fling classified");
            self.pending.direction = direction;
        }
        KeyResponse::consumed()
    }

    /// Resolve the pressed key (not the released one) with the last fling
    /// direction and feed the result to the composing path.
    pub(super) fn handle_release(
        &mut self,
        code: i32,
        ctx: Option<&EditorContext>,
    ) -> KeyResponse {
        let Some((pressed, direction)) = self.pending.take() else {
            return KeyResponse::not_consumed();
        };
        if !is_syllable_key(pressed) {
            return KeyResponse::consumed();
        }

        let Some(c) = resolve_key(pressed, direction) else {
            debug!(pressed, released = code, ?direction, "no character for flick");
            return KeyResponse::consumed();
        };
        let Some(ctx) = ctx else {
            debug!(%c, "no text connection, flick dropped");
            return KeyResponse::consumed();
        };
        debug!(%c, ?direction, "flick resolved");
        self.handle_character(c, ctx)
    }
}
