use tracing::{debug, debug_span};

use dokaben_core::syllable::is_syllable_key;
use dokaben_core::unicode::char_from_code;

use super::types::{key, EditorContext, Event, HardKeyCode, HostAction, KeyResponse};
use super::InputSession;

impl InputSession {
    /// Process an event. `now_ms` is only read by the shift key.
    /// Returns the host calls the caller should make, in order.
    pub fn handle_event_at(
        &mut self,
        event: Event,
        ctx: Option<&EditorContext>,
        now_ms: u64,
    ) -> KeyResponse {
        let _span = debug_span!("handle_event", ?event).entered();

        match event {
            Event::Press(code) => self.handle_press(code),
            Event::Gesture(sample) => self.handle_gesture(&sample),
            Event::Release(code) => self.handle_release(code, ctx),
            Event::Key(code) => self.handle_key(code, ctx, now_ms),
            Event::HardKey {
                key,
                unicode,
                composed_with_last,
            } => self.handle_hard_key(key, unicode, composed_with_last, ctx),
            Event::StartInput { info, restarting } => self.start_input(info, restarting, ctx),
            Event::FinishInput => self.finish_input(ctx),
            Event::SelectionChanged {
                new_start,
                new_end,
                candidates_end,
            } => self.selection_changed(new_start, new_end, candidates_end, ctx),
            Event::DisplayCompletions(completions) => self.handle_display_completions(completions),

            // Everything below edits the field and needs a live connection.
            Event::Text(text) => match ctx {
                Some(ctx) => self.handle_text(text, ctx),
                None => KeyResponse::not_consumed(),
            },
            Event::PickCandidate(index) => match ctx {
                Some(ctx) => self.handle_pick_candidate(index, ctx),
                None => KeyResponse::not_consumed(),
            },
        }
    }

    fn handle_key(&mut self, code: i32, ctx: Option<&EditorContext>, now_ms: u64) -> KeyResponse {
        // Keys that never touch the field.
        match code {
            key::SHIFT => return self.handle_shift(now_ms),
            key::LANGUAGE_SWITCH => {
                let mut resp = KeyResponse::consumed();
                resp.push(HostAction::SwitchToNextInputMethod);
                return resp;
            }
            key::OPTIONS => return KeyResponse::consumed(),
            // Syllable keys are resolved on release, with the fling direction.
            _ if is_syllable_key(code) => return KeyResponse::consumed(),
            _ => {}
        }

        let Some(ctx) = ctx else {
            debug!(code, "no text connection, key dropped");
            return KeyResponse::not_consumed();
        };

        match code {
            key::DELETE => self.handle_backspace(ctx),
            key::CANCEL => self.handle_close(ctx),
            key::CURSOR_LEFT => self.move_cursor(ctx, -1),
            key::CURSOR_RIGHT => self.move_cursor(ctx, 1),
            key::DAKUTEN => self.handle_dakuten(ctx),
            key::KIGOU => self.handle_kigou(ctx),
            key::DOKABEN => self.handle_dokaben(ctx),
            _ => match char_from_code(code) {
                Some(c) => self.handle_typed(c, ctx),
                None => {
                    debug!(code, "unknown key code");
                    KeyResponse::not_consumed()
                }
            },
        }
    }

    /// Physical keyboard input. Delete is taken only while composing and
    /// printable keys only in a field with prediction; the host handles
    /// everything else itself.
    fn handle_hard_key(
        &mut self,
        key: HardKeyCode,
        unicode: Option<char>,
        composed_with_last: Option<char>,
        ctx: Option<&EditorContext>,
    ) -> KeyResponse {
        let Some(ctx) = ctx else {
            debug!(?key, "no text connection, hard key left to host");
            return KeyResponse::not_consumed();
        };
        match key {
            HardKeyCode::Delete if self.is_composing() => self.handle_backspace(ctx),
            HardKeyCode::Delete | HardKeyCode::Enter => KeyResponse::not_consumed(),
            HardKeyCode::Other => {
                let Some(mut c) = unicode.filter(|&c| c != '\0' && self.field.prediction_on)
                else {
                    return KeyResponse::not_consumed();
                };
                // A dead accent folds into the last composing character.
                if let Some(composed) = composed_with_last {
                    if self.composing.pop().is_some() {
                        c = composed;
                    }
                }
                self.handle_typed(c, ctx)
            }
        }
    }

    /// A printable character from either keyboard.
    fn handle_typed(&mut self, c: char, ctx: &EditorContext) -> KeyResponse {
        if self.config.is_word_separator(c) {
            self.handle_separator(c, ctx)
        } else {
            self.handle_character(c, ctx)
        }
    }

    /// Move a collapsed selection one step, staying inside the field text.
    fn move_cursor(&mut self, ctx: &EditorContext, delta: i32) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        if ctx.selection_start != ctx.selection_end {
            return resp;
        }
        let Some(target) = ctx
            .selection_start
            .checked_add(delta)
            .filter(|t| (0..=ctx.text_len).contains(t))
        else {
            debug!(start = ctx.selection_start, len = ctx.text_len, "cursor at field edge");
            return resp;
        };
        resp.push(HostAction::SetSelection {
            start: target,
            end: target,
        });
        self.update_candidates(&mut resp);
        resp
    }
}
