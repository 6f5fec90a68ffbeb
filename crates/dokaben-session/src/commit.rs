use tracing::debug;

use dokaben_core::glyph::transliterate;

use super::types::{EditorContext, HostAction, HostKey, KeyResponse};
use super::InputSession;

impl InputSession {
    /// Commit the composing text as typed, if any.
    pub(super) fn commit_typed(&mut self, resp: &mut KeyResponse) {
        if self.composing.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.composing);
        resp.push(HostAction::CommitText(text));
        self.update_candidates(resp);
    }

    pub(super) fn handle_separator(&mut self, c: char, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        self.commit_typed(&mut resp);
        resp.push(send_char(c));
        self.refresh_shift(ctx, &mut resp);
        resp
    }

    /// Commit the dokaben rendering of the composing text.
    pub(super) fn handle_dokaben(&mut self, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        if self.composing.is_empty() {
            return resp;
        }
        let converted = transliterate(&self.composing);
        self.composing.clear();
        resp.push(HostAction::CommitText(converted));
        self.update_candidates(&mut resp);
        self.refresh_shift(ctx, &mut resp);
        resp
    }

    pub(super) fn handle_close(&mut self, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        self.commit_typed(&mut resp);
        self.refresh_shift(ctx, &mut resp);
        resp.push(HostAction::RequestHideSelf);
        resp
    }

    pub(super) fn handle_text(&mut self, text: String, ctx: &EditorContext) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        self.commit_typed(&mut resp);
        resp.push(HostAction::CommitText(text));
        self.refresh_shift(ctx, &mut resp);
        resp
    }

    /// Candidate tap. Editor completions are committed by index; otherwise
    /// the chosen rendering (plain or dokaben) replaces the composing text.
    pub(super) fn handle_pick_candidate(
        &mut self,
        index: usize,
        ctx: &EditorContext,
    ) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        if self.field.completion_on {
            let in_range = self
                .field
                .completions
                .as_ref()
                .is_some_and(|c| index < c.len());
            if in_range {
                resp.push(HostAction::CommitCompletion(index));
                resp.push(HostAction::HideCandidates);
                self.field.completions = None;
                self.refresh_shift(ctx, &mut resp);
            }
            return resp;
        }

        let Some(chosen) = self.candidates.get(index).cloned() else {
            debug!(index, "candidate index out of range");
            return resp;
        };
        self.composing.clear();
        resp.push(HostAction::CommitText(chosen));
        self.update_candidates(&mut resp);
        self.refresh_shift(ctx, &mut resp);
        resp
    }
}

/// Separators go out as key events where the host has one, else as text.
fn send_char(c: char) -> HostAction {
    match c {
        '\n' => HostAction::SendKey(HostKey::Enter),
        '0'..='9' => HostAction::SendKey(HostKey::Digit(c as u8 - b'0')),
        _ => HostAction::CommitText(c.to_string()),
    }
}
