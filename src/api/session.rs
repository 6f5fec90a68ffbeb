use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dokaben_session::{EditorContext, Event, InputSession};

use super::types::{
    code_point, convert_to_events, DkEditorContext, DkEditorInfo, DkGesture, DkHardKey,
};
use super::DkKeyResponse;

/// One keyboard session. The Kotlin service keeps a single instance and
/// forwards every view and editor callback to it.
#[derive(uniffi::Object)]
pub struct DkSession {
    session: Mutex<InputSession>,
}

impl DkSession {
    fn lock(&self) -> MutexGuard<'_, InputSession> {
        // A poisoned lock is recovered, not propagated.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, event: Event, ctx: Option<DkEditorContext>) -> DkKeyResponse {
        let ctx = ctx.map(EditorContext::from);
        let resp = self.lock().handle_event(event, ctx.as_ref());
        convert_to_events(resp)
    }
}

#[uniffi::export]
impl DkSession {
    #[uniffi::constructor]
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(InputSession::new()),
        })
    }

    pub fn press(&self, code: i32) -> DkKeyResponse {
        self.dispatch(Event::Press(code), None)
    }

    pub fn gesture(&self, gesture: DkGesture) -> DkKeyResponse {
        self.dispatch(Event::Gesture(gesture.into()), None)
    }

    pub fn release(&self, code: i32, ctx: Option<DkEditorContext>) -> DkKeyResponse {
        self.dispatch(Event::Release(code), ctx)
    }

    pub fn key(&self, code: i32, ctx: Option<DkEditorContext>) -> DkKeyResponse {
        self.dispatch(Event::Key(code), ctx)
    }

    /// Physical key down. `unicode_char` and `composed_with_last` are the
    /// platform's code points, 0 when there is none.
    pub fn hard_key(
        &self,
        key: DkHardKey,
        unicode_char: u32,
        composed_with_last: u32,
        ctx: Option<DkEditorContext>,
    ) -> DkKeyResponse {
        self.dispatch(
            Event::HardKey {
                key: key.into(),
                unicode: code_point(unicode_char),
                composed_with_last: code_point(composed_with_last),
            },
            ctx,
        )
    }

    pub fn text(&self, text: String, ctx: Option<DkEditorContext>) -> DkKeyResponse {
        self.dispatch(Event::Text(text), ctx)
    }

    pub fn selection_changed(
        &self,
        new_start: i32,
        new_end: i32,
        candidates_end: i32,
        ctx: Option<DkEditorContext>,
    ) -> DkKeyResponse {
        self.dispatch(
            Event::SelectionChanged {
                new_start,
                new_end,
                candidates_end,
            },
            ctx,
        )
    }

    pub fn start_input(
        &self,
        info: DkEditorInfo,
        restarting: bool,
        ctx: Option<DkEditorContext>,
    ) -> DkKeyResponse {
        self.dispatch(
            Event::StartInput {
                info: info.into(),
                restarting,
            },
            ctx,
        )
    }

    pub fn finish_input(&self, ctx: Option<DkEditorContext>) -> DkKeyResponse {
        self.dispatch(Event::FinishInput, ctx)
    }

    pub fn display_completions(&self, completions: Vec<String>) -> DkKeyResponse {
        self.dispatch(Event::DisplayCompletions(completions), None)
    }

    pub fn pick_candidate(&self, index: u32, ctx: Option<DkEditorContext>) -> DkKeyResponse {
        self.dispatch(Event::PickCandidate(index as usize), ctx)
    }

    pub fn is_composing(&self) -> bool {
        self.lock().is_composing()
    }

    pub fn composing_text(&self) -> String {
        self.lock().composing_text().to_string()
    }

    pub fn candidates(&self) -> Vec<String> {
        self.lock().candidates().to_vec()
    }

    pub fn caps_lock(&self) -> bool {
        self.lock().caps_lock()
    }
}
