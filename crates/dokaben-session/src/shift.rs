use tracing::debug;

use super::types::{EditorContext, HostAction, InputClass, KeyResponse};
use super::InputSession;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ShiftState {
    pub(crate) caps_lock: bool,
    /// What the keyboard currently shows.
    pub(crate) shifted: bool,
    /// Time of the last shift press that did not toggle caps lock.
    pub(crate) last_shift_ms: Option<u64>,
}

impl ShiftState {
    /// Two presses inside `window_ms` toggle caps lock and disarm the timer;
    /// otherwise the press only re-arms it.
    pub(crate) fn register_press(&mut self, now_ms: u64, window_ms: u64) {
        match self.last_shift_ms {
            Some(last) if last.saturating_add(window_ms) > now_ms => {
                self.caps_lock = !self.caps_lock;
                self.last_shift_ms = None;
            }
            _ => self.last_shift_ms = Some(now_ms),
        }
    }
}

impl InputSession {
    pub(super) fn handle_shift(&mut self, now_ms: u64) -> KeyResponse {
        self.shift.register_press(now_ms, self.config.double_tap_ms);
        self.shift.shifted = self.shift.caps_lock || !self.shift.shifted;
        debug!(caps_lock = self.shift.caps_lock, shifted = self.shift.shifted, "shift");

        let mut resp = KeyResponse::consumed();
        resp.push(HostAction::SetShifted(self.shift.shifted));
        resp
    }

    /// Re-derive the shift display from the cursor context. Nothing is
    /// emitted before the first start of input.
    pub(super) fn refresh_shift(&mut self, ctx: &EditorContext, resp: &mut KeyResponse) {
        let Some(info) = self.field.info else {
            return;
        };
        let caps = info.class != InputClass::Null && ctx.cursor_caps;
        self.shift.shifted = self.shift.caps_lock || caps;
        resp.push(HostAction::SetShifted(self.shift.shifted));
    }
}
