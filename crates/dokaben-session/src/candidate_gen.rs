use dokaben_core::glyph::transliterate;

use super::types::{HostAction, KeyResponse};
use super::InputSession;

impl InputSession {
    /// Rebuild the candidate list from the composing text. While the editor
    /// supplies its own completions the panel belongs to them.
    pub(super) fn update_candidates(&mut self, resp: &mut KeyResponse) {
        if self.field.completion_on {
            return;
        }
        if self.composing.is_empty() {
            self.candidates.clear();
            resp.push(HostAction::HideCandidates);
        } else {
            self.candidates = vec![self.composing.clone(), transliterate(&self.composing)];
            resp.push(HostAction::ShowCandidates(self.candidates.clone()));
        }
    }

    pub(super) fn handle_display_completions(&mut self, completions: Vec<String>) -> KeyResponse {
        if !self.field.completion_on {
            return KeyResponse::not_consumed();
        }
        let mut resp = KeyResponse::consumed();
        if completions.is_empty() {
            resp.push(HostAction::HideCandidates);
        } else {
            resp.push(HostAction::ShowCandidates(completions.clone()));
        }
        self.field.completions = Some(completions);
        resp
    }
}
