use dokaben_core::fling::{FlingThresholds, GestureSample};
use dokaben_core::settings::Settings;

// Primary codes for the non-character keys of the flick layout.
pub mod key {
    pub const SHIFT: i32 = -1;
    pub const CANCEL: i32 = -3;
    pub const DELETE: i32 = -5;
    pub const OPTIONS: i32 = -100;
    pub const LANGUAGE_SWITCH: i32 = -101;
    pub const CURSOR_LEFT: i32 = -102;
    pub const CURSOR_RIGHT: i32 = -103;
    pub const DAKUTEN: i32 = -104;
    pub const KIGOU: i32 = -105;
    pub const DOKABEN: i32 = -106;
}

// Host input-type bit field.
mod input_type {
    pub const MASK_CLASS: u32 = 0x0000_000F;
    pub const MASK_VARIATION: u32 = 0x0000_0FF0;
    pub const CLASS_TEXT: u32 = 0x0000_0001;
    pub const VARIATION_URI: u32 = 0x0000_0010;
    pub const VARIATION_EMAIL_ADDRESS: u32 = 0x0000_0020;
    pub const VARIATION_PASSWORD: u32 = 0x0000_0080;
    pub const VARIATION_VISIBLE_PASSWORD: u32 = 0x0000_0090;
    pub const VARIATION_FILTER: u32 = 0x0000_00B0;
    pub const FLAG_AUTO_COMPLETE: u32 = 0x0001_0000;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    /// No editable text (input type 0).
    Null,
    Text,
    /// Numbers, phone, date/time: handled like text without predictions.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariation {
    Normal,
    Password,
    VisiblePassword,
    EmailAddress,
    Uri,
    Filter,
    Other,
}

/// What the host tells us about the field being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorInfo {
    pub class: InputClass,
    pub variation: TextVariation,
    pub auto_complete: bool,
    /// Whether the keyboard is running in fullscreen (extract) mode.
    pub fullscreen: bool,
}

impl EditorInfo {
    pub fn text() -> Self {
        Self {
            class: InputClass::Text,
            variation: TextVariation::Normal,
            auto_complete: false,
            fullscreen: false,
        }
    }

    /// Decode the host's raw input-type bits.
    pub fn from_input_type(bits: u32, fullscreen: bool) -> Self {
        use self::input_type::*;

        let class = match bits & MASK_CLASS {
            0 => InputClass::Null,
            CLASS_TEXT => InputClass::Text,
            _ => InputClass::Other,
        };
        let variation = if class == InputClass::Text {
            match bits & MASK_VARIATION {
                0 => TextVariation::Normal,
                VARIATION_PASSWORD => TextVariation::Password,
                VARIATION_VISIBLE_PASSWORD => TextVariation::VisiblePassword,
                VARIATION_EMAIL_ADDRESS => TextVariation::EmailAddress,
                VARIATION_URI => TextVariation::Uri,
                VARIATION_FILTER => TextVariation::Filter,
                _ => TextVariation::Other,
            }
        } else {
            TextVariation::Other
        };
        Self {
            class,
            variation,
            auto_complete: class == InputClass::Text && bits & FLAG_AUTO_COMPLETE != 0,
            fullscreen,
        }
    }
}

/// Snapshot of the host text connection taken when an event is delivered.
/// Events delivered without one (no active connection) skip every host edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContext {
    /// Text immediately before the cursor (the host may return up to one char).
    pub text_before_cursor: String,
    pub selection_start: i32,
    pub selection_end: i32,
    /// Length of the whole field text, in host units.
    pub text_len: i32,
    /// Whether the host would auto-capitalize at the cursor.
    pub cursor_caps: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Press(i32),
    Gesture(GestureSample),
    Release(i32),
    /// A key action by primary code (control keys, separators, characters).
    Key(i32),
    /// A key down from a physical keyboard.
    HardKey {
        key: HardKeyCode,
        /// The character the key produces with the current meta state,
        /// accent flag already masked off.
        unicode: Option<char>,
        /// The host's dead-key composition of the last composing character
        /// with `unicode`, when one exists.
        composed_with_last: Option<char>,
    },
    /// Multi-character text from a key with an output-text label.
    Text(String),
    SelectionChanged {
        new_start: i32,
        new_end: i32,
        /// End of the composing region, -1 if none.
        candidates_end: i32,
    },
    StartInput {
        info: EditorInfo,
        restarting: bool,
    },
    FinishInput,
    /// Completions supplied by an auto-complete editor.
    DisplayCompletions(Vec<String>),
    PickCandidate(usize),
}

/// Physical keys that get their own handling; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardKeyCode {
    Delete,
    Enter,
    Other,
}

/// A raw key the host should synthesize as a down/up pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    Delete,
    Enter,
    Digit(u8),
}

/// One outbound call on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    SetComposingText(String),
    CommitText(String),
    SendKey(HostKey),
    FinishComposingText,
    SetSelection { start: i32, end: i32 },
    ShowCandidates(Vec<String>),
    HideCandidates,
    SetShifted(bool),
    CommitCompletion(usize),
    RequestHideSelf,
    SwitchToNextInputMethod,
}

/// Response from handle_event, returned to the caller (Kotlin via UniFFI).
/// Actions must be applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub actions: Vec<HostAction>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn push(&mut self, action: HostAction) {
        self.actions.push(action);
    }

    /// All committed text in this response, concatenated.
    pub fn committed(&self) -> String {
        self.actions
            .iter()
            .filter_map(|a| match a {
                HostAction::CommitText(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The last candidate list shown by this response, if any.
    pub fn shown_candidates(&self) -> Option<&[String]> {
        self.actions.iter().rev().find_map(|a| match a {
            HostAction::ShowCandidates(c) => Some(c.as_slice()),
            _ => None,
        })
    }

    pub fn hides_candidates(&self) -> bool {
        self.actions.contains(&HostAction::HideCandidates)
    }
}

/// Per-session tunables, snapshotted from the global settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub thresholds: FlingThresholds,
    pub double_tap_ms: u64,
    pub word_separators: String,
    pub kigou_fallback: char,
}

impl SessionConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            thresholds: s.fling_thresholds(),
            double_tap_ms: s.shift.double_tap_ms,
            word_separators: s.input.word_separators.clone(),
            kigou_fallback: s.kigou_fallback_char(),
        }
    }

    pub(crate) fn is_word_separator(&self, c: char) -> bool {
        self.word_separators.contains(c)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_settings(dokaben_core::settings::settings())
    }
}

/// Field-dependent behaviour, decided at start of input.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldState {
    pub(crate) info: Option<EditorInfo>,
    pub(crate) prediction_on: bool,
    pub(crate) completion_on: bool,
    pub(crate) completions: Option<Vec<String>>,
}
