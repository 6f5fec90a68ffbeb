use dokaben_core::fling::{Direction, GestureSample};
use dokaben_session::{EditorContext, EditorInfo, HardKeyCode, HostAction, HostKey, KeyResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DkError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// One fling as reported by the platform gesture detector.
#[derive(Clone, Copy, Debug, uniffi::Record)]
pub struct DkGesture {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl From<DkGesture> for GestureSample {
    fn from(g: DkGesture) -> Self {
        GestureSample {
            start_x: g.start_x,
            start_y: g.start_y,
            end_x: g.end_x,
            end_y: g.end_y,
            velocity_x: g.velocity_x,
            velocity_y: g.velocity_y,
        }
    }
}

/// The field being edited, as the raw `EditorInfo.inputType` bits.
#[derive(Clone, Copy, Debug, uniffi::Record)]
pub struct DkEditorInfo {
    pub input_type: u32,
    pub fullscreen: bool,
}

impl From<DkEditorInfo> for EditorInfo {
    fn from(info: DkEditorInfo) -> Self {
        EditorInfo::from_input_type(info.input_type, info.fullscreen)
    }
}

/// Snapshot of the current input connection. Pass `None` when there is none.
#[derive(Clone, Debug, uniffi::Record)]
pub struct DkEditorContext {
    pub text_before_cursor: String,
    pub selection_start: i32,
    pub selection_end: i32,
    pub text_len: i32,
    pub cursor_caps: bool,
}

impl From<DkEditorContext> for EditorContext {
    fn from(ctx: DkEditorContext) -> Self {
        EditorContext {
            text_before_cursor: ctx.text_before_cursor,
            selection_start: ctx.selection_start,
            selection_end: ctx.selection_end,
            text_len: ctx.text_len,
            cursor_caps: ctx.cursor_caps,
        }
    }
}

/// Event-driven response from every session call. Apply events in order.
#[derive(Debug, uniffi::Record)]
pub struct DkKeyResponse {
    pub consumed: bool,
    pub events: Vec<DkEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum DkDirection {
    Center,
    Left,
    Up,
    Right,
    Down,
}

impl From<Direction> for DkDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Center => DkDirection::Center,
            Direction::Left => DkDirection::Left,
            Direction::Up => DkDirection::Up,
            Direction::Right => DkDirection::Right,
            Direction::Down => DkDirection::Down,
        }
    }
}

/// Physical keyboard keys with their own handling; any other key is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum DkHardKey {
    Delete,
    Enter,
    Other,
}

impl From<DkHardKey> for HardKeyCode {
    fn from(k: DkHardKey) -> Self {
        match k {
            DkHardKey::Delete => HardKeyCode::Delete,
            DkHardKey::Enter => HardKeyCode::Enter,
            DkHardKey::Other => HardKeyCode::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum DkHostKey {
    Delete,
    Enter,
    Digit { digit: u8 },
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum DkEvent {
    SetComposingText { text: String },
    CommitText { text: String },
    SendKey { key: DkHostKey },
    FinishComposingText,
    SetSelection { start: i32, end: i32 },
    ShowCandidates { candidates: Vec<String> },
    HideCandidates,
    SetShifted { shifted: bool },
    CommitCompletion { index: u32 },
    RequestHideSelf,
    SwitchToNextInputMethod,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Platform code point to char; 0 means "no character".
pub(super) fn code_point(value: u32) -> Option<char> {
    char::from_u32(value).filter(|&c| c != '\0')
}

fn convert_key(key: HostKey) -> DkHostKey {
    match key {
        HostKey::Delete => DkHostKey::Delete,
        HostKey::Enter => DkHostKey::Enter,
        HostKey::Digit(digit) => DkHostKey::Digit { digit },
    }
}

pub(super) fn convert_to_events(resp: KeyResponse) -> DkKeyResponse {
    let events = resp
        .actions
        .into_iter()
        .map(|action| match action {
            HostAction::SetComposingText(text) => DkEvent::SetComposingText { text },
            HostAction::CommitText(text) => DkEvent::CommitText { text },
            HostAction::SendKey(key) => DkEvent::SendKey {
                key: convert_key(key),
            },
            HostAction::FinishComposingText => DkEvent::FinishComposingText,
            HostAction::SetSelection { start, end } => DkEvent::SetSelection { start, end },
            HostAction::ShowCandidates(candidates) => DkEvent::ShowCandidates { candidates },
            HostAction::HideCandidates => DkEvent::HideCandidates,
            HostAction::SetShifted(shifted) => DkEvent::SetShifted { shifted },
            HostAction::CommitCompletion(index) => DkEvent::CommitCompletion {
                index: u32::try_from(index).unwrap_or(u32::MAX),
            },
            HostAction::RequestHideSelf => DkEvent::RequestHideSelf,
            HostAction::SwitchToNextInputMethod => DkEvent::SwitchToNextInputMethod,
        })
        .collect();

    DkKeyResponse {
        consumed: resp.consumed,
        events,
    }
}
