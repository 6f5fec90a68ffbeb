use tracing::debug;

use super::types::{EditorContext, EditorInfo, HostAction, InputClass, KeyResponse, TextVariation};
use super::InputSession;

impl InputSession {
    /// Reset for a new field. Done even when restarting, since the editor's
    /// text may have changed in any way.
    pub(super) fn start_input(
        &mut self,
        info: EditorInfo,
        restarting: bool,
        ctx: Option<&EditorContext>,
    ) -> KeyResponse {
        debug!(?info, restarting, "start input");
        let mut resp = KeyResponse::consumed();

        self.composing.clear();
        self.pending.reset();
        self.field.completion_on = false;
        self.field.completions = None;
        self.update_candidates(&mut resp);

        self.field.prediction_on = false;
        if info.class == InputClass::Text {
            self.field.prediction_on = !matches!(
                info.variation,
                TextVariation::Password
                    | TextVariation::VisiblePassword
                    | TextVariation::EmailAddress
                    | TextVariation::Uri
                    | TextVariation::Filter
            );
            // Auto-complete editors show their own suggestions; we only
            // display them when the editor itself is hidden.
            if info.auto_complete {
                self.field.prediction_on = false;
                self.field.completion_on = info.fullscreen;
            }
        }
        self.field.info = Some(info);

        if let Some(ctx) = ctx {
            self.refresh_shift(ctx, &mut resp);
        }
        resp
    }

    /// End of the field. Flushes the composing text and drops every transient
    /// flag; calling it twice is the same as calling it once.
    pub(super) fn finish_input(&mut self, ctx: Option<&EditorContext>) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        let text = std::mem::take(&mut self.composing);
        if !text.is_empty() && ctx.is_some() {
            resp.push(HostAction::CommitText(text));
        }
        self.candidates.clear();
        resp.push(HostAction::HideCandidates);

        self.pending.reset();
        self.shift = Default::default();
        self.field = Default::default();
        resp
    }

    /// The cursor moved away from the end of the composing region: drop the
    /// composing text without committing it again.
    pub(super) fn selection_changed(
        &mut self,
        new_start: i32,
        new_end: i32,
        candidates_end: i32,
        ctx: Option<&EditorContext>,
    ) -> KeyResponse {
        if self.composing.is_empty() || (new_start == candidates_end && new_end == candidates_end)
        {
            return KeyResponse::not_consumed();
        }
        debug!(new_start, new_end, candidates_end, "selection left composing region");
        let mut resp = KeyResponse::consumed();
        self.composing.clear();
        self.update_candidates(&mut resp);
        if let Some(ctx) = ctx {
            resp.push(HostAction::FinishComposingText);
            self.refresh_shift(ctx, &mut resp);
        }
        resp
    }
}
