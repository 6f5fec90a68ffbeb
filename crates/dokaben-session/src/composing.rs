use tracing::debug;

use dokaben_core::kana::{toggle_dakuten, toggle_kigou};
use dokaben_core::unicode::{is_letter, last_char, replace_last_char};

use super::types::{EditorContext, HostAction, HostKey, KeyResponse};
use super::InputSession;

impl InputSession {
    /// Letters are composed while prediction is on; anything else, or any
    /// character in a field without prediction, is committed directly.
    pub(super) fn handle_character(&mut self, c: char, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        if is_letter(c) && self.field.prediction_on {
            self.composing.push(c);
            resp.push(HostAction::SetComposingText(self.composing.clone()));
            self.refresh_shift(ctx, &mut resp);
            self.update_candidates(&mut resp);
        } else {
            // A direct commit would replace the host's composing span.
            self.commit_typed(&mut resp);
            resp.push(HostAction::CommitText(c.to_string()));
        }
        resp
    }

    pub(super) fn handle_backspace(&mut self, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        match self.composing.chars().count() {
            0 => resp.push(HostAction::SendKey(HostKey::Delete)),
            1 => {
                self.composing.clear();
                // Empty commit removes the composing span.
                resp.push(HostAction::CommitText(String::new()));
                self.update_candidates(&mut resp);
            }
            _ => {
                self.composing.pop();
                resp.push(HostAction::SetComposingText(self.composing.clone()));
                self.update_candidates(&mut resp);
            }
        }
        self.refresh_shift(ctx, &mut resp);
        resp
    }

    /// Dakuten key: cycle the character before the cursor through its
    /// voiced / semi-voiced / small forms. A miss leaves everything as is.
    pub(super) fn handle_dakuten(&mut self, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        let Some(replacement) = self.toggled_before_cursor(ctx, toggle_dakuten) else {
            debug!(before = %ctx.text_before_cursor, "dakuten: nothing to toggle");
            return resp;
        };
        replace_last_char(&mut self.composing, replacement);
        resp.push(HostAction::SetComposingText(self.composing.clone()));
        self.refresh_shift(ctx, &mut resp);
        self.update_candidates(&mut resp);
        resp
    }

    /// Kigou key: toggle ？→！→ー, or append the fallback mark when the
    /// preceding character is not punctuation.
    pub(super) fn handle_kigou(&mut self, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        match self.toggled_before_cursor(ctx, toggle_kigou) {
            Some(replacement) => replace_last_char(&mut self.composing, replacement),
            None => self.composing.push(self.config.kigou_fallback),
        }
        resp.push(HostAction::SetComposingText(self.composing.clone()));
        self.refresh_shift(ctx, &mut resp);
        self.update_candidates(&mut resp);
        resp
    }

    /// The host's view of the preceding character decides the lookup, not
    /// the composing buffer's own last character.
    fn toggled_before_cursor(
        &self,
        ctx: &EditorContext,
        table: fn(char) -> Option<char>,
    ) -> Option<char> {
        if self.composing.is_empty() {
            return None;
        }
        last_char(&ctx.text_before_cursor).and_then(table)
    }
}
