//! Replay a JSON-lines event script through an `InputSession`.
//!
//! Each line is one step, tagged by `event`:
//!
//! ```text
//! {"event":"start","input_type":1}
//! {"event":"flick","key":"ka","direction":"up"}
//! {"event":"key","key":"dakuten"}
//! {"event":"key","key":" ","at_ms":1500}
//! {"event":"hard_key","char":"a"}
//! {"event":"finish"}
//! ```
//!
//! The host editor is simulated (committed text plus composing span) so that
//! the dakuten and kigou keys see a realistic character before the cursor.
//! Steps without `at_ms` happen one second after the previous one.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process;

use serde::{Deserialize, Serialize};

use dokaben_core::fling::{Direction, GestureSample};
use dokaben_core::syllable::ConsonantRow;
use dokaben_session::{
    key, EditorContext, EditorInfo, Event, HardKeyCode, HostAction, HostKey, InputSession,
    KeyResponse,
};

const DEFAULT_STEP_MS: u64 = 1_000;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line}: unknown key {key:?}")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: unknown direction {direction:?}")]
    UnknownDirection { line: usize, direction: String },
}

// ---------------------------------------------------------------------------
// Script format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Step {
    #[serde(default)]
    at_ms: Option<u64>,
    /// Deliver the step without an input connection.
    #[serde(default)]
    disconnected: bool,
    #[serde(flatten)]
    event: ScriptEvent,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptEvent {
    Start {
        #[serde(default = "default_input_type")]
        input_type: u32,
        #[serde(default)]
        fullscreen: bool,
        #[serde(default)]
        restarting: bool,
    },
    Finish,
    /// Press, optional fling, key action and release on one row key.
    Flick {
        key: String,
        #[serde(default = "default_direction")]
        direction: String,
    },
    Press {
        key: String,
    },
    Gesture {
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        velocity_x: f32,
        velocity_y: f32,
    },
    Release {
        key: String,
    },
    Key {
        key: String,
    },
    /// Physical keyboard key: `delete`, `enter`, or a character key when
    /// `key` is absent.
    HardKey {
        #[serde(default)]
        key: Option<String>,
        #[serde(default, rename = "char")]
        unicode: Option<char>,
        #[serde(default)]
        composed: Option<char>,
    },
    Text {
        text: String,
    },
    Pick {
        index: usize,
    },
    Completions {
        items: Vec<String>,
    },
    Selection {
        new_start: i32,
        new_end: i32,
        candidates_end: i32,
    },
}

fn default_input_type() -> u32 {
    // TYPE_CLASS_TEXT
    0x0000_0001
}

fn default_direction() -> String {
    "center".to_string()
}

// ---------------------------------------------------------------------------
// Output records
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionRecord {
    SetComposingText { text: String },
    CommitText { text: String },
    SendKey { key: String },
    FinishComposingText,
    SetSelection { start: i32, end: i32 },
    ShowCandidates { candidates: Vec<String> },
    HideCandidates,
    SetShifted { shifted: bool },
    CommitCompletion { index: usize },
    RequestHideSelf,
    SwitchToNextInputMethod,
}

impl From<&HostAction> for ActionRecord {
    fn from(action: &HostAction) -> Self {
        match action {
            HostAction::SetComposingText(text) => Self::SetComposingText { text: text.clone() },
            HostAction::CommitText(text) => Self::CommitText { text: text.clone() },
            HostAction::SendKey(k) => Self::SendKey {
                key: match k {
                    HostKey::Delete => "delete".to_string(),
                    HostKey::Enter => "enter".to_string(),
                    HostKey::Digit(d) => d.to_string(),
                },
            },
            HostAction::FinishComposingText => Self::FinishComposingText,
            HostAction::SetSelection { start, end } => Self::SetSelection {
                start: *start,
                end: *end,
            },
            HostAction::ShowCandidates(c) => Self::ShowCandidates {
                candidates: c.clone(),
            },
            HostAction::HideCandidates => Self::HideCandidates,
            HostAction::SetShifted(shifted) => Self::SetShifted { shifted: *shifted },
            HostAction::CommitCompletion(index) => Self::CommitCompletion { index: *index },
            HostAction::RequestHideSelf => Self::RequestHideSelf,
            HostAction::SwitchToNextInputMethod => Self::SwitchToNextInputMethod,
        }
    }
}

/// What one script step did.
#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub line: usize,
    pub consumed: bool,
    pub actions: Vec<ActionRecord>,
    /// Session composing buffer after the step.
    pub composing: String,
    /// Everything committed to the simulated field so far.
    pub field: String,
}

// ---------------------------------------------------------------------------
// Simulated host editor
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct HostEditor {
    committed: String,
    composing: String,
}

impl HostEditor {
    fn context(&self) -> EditorContext {
        let len = (self.committed.chars().count() + self.composing.chars().count()) as i32;
        EditorContext {
            text_before_cursor: format!("{}{}", self.committed, self.composing),
            selection_start: len,
            selection_end: len,
            text_len: len,
            cursor_caps: false,
        }
    }

    /// A physical key the session left alone reaches the editor as is.
    fn pass_through(&mut self, key: HardKeyCode, unicode: Option<char>) {
        match key {
            HardKeyCode::Delete => {
                self.committed.pop();
            }
            HardKeyCode::Enter => self.committed.push('\n'),
            HardKeyCode::Other => self.committed.extend(unicode),
        }
    }

    fn apply(&mut self, resp: &KeyResponse) {
        for action in &resp.actions {
            match action {
                HostAction::SetComposingText(t) => self.composing = t.clone(),
                HostAction::CommitText(t) => {
                    self.composing.clear();
                    self.committed.push_str(t);
                }
                HostAction::FinishComposingText => {
                    let text = std::mem::take(&mut self.composing);
                    self.committed.push_str(&text);
                }
                HostAction::SendKey(HostKey::Delete) => {
                    self.committed.pop();
                }
                HostAction::SendKey(HostKey::Enter) => self.committed.push('\n'),
                HostAction::SendKey(HostKey::Digit(d)) => {
                    self.committed.push(char::from(b'0' + d));
                }
                _ => {}
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Key names
// ---------------------------------------------------------------------------

/// Map a script key name to a primary code: a control key name, a row name
/// ("ka"), or any single character.
pub fn parse_key_code(name: &str) -> Option<i32> {
    let code = match name {
        "shift" => key::SHIFT,
        "cancel" => key::CANCEL,
        "delete" => key::DELETE,
        "options" => key::OPTIONS,
        "language_switch" => key::LANGUAGE_SWITCH,
        "cursor_left" => key::CURSOR_LEFT,
        "cursor_right" => key::CURSOR_RIGHT,
        "dakuten" => key::DAKUTEN,
        "kigou" => key::KIGOU,
        "dokaben" => key::DOKABEN,
        "enter" => '\n' as i32,
        "space" => ' ' as i32,
        _ => {
            if let Some(row) = ConsonantRow::from_name(name) {
                return Some(row.key_char() as i32);
            }
            let mut chars = name.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c as i32),
                _ => None,
            };
        }
    };
    Some(code)
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

struct Replayer {
    session: InputSession,
    host: HostEditor,
    now_ms: u64,
}

impl Replayer {
    fn send(&mut self, event: Event, connected: bool) -> KeyResponse {
        let ctx = self.host.context();
        let resp = self
            .session
            .handle_event_at(event, connected.then_some(&ctx), self.now_ms);
        if connected {
            self.host.apply(&resp);
        }
        resp
    }

    fn step(&mut self, line: usize, step: Step) -> Result<StepRecord, ReplayError> {
        self.now_ms = step
            .at_ms
            .unwrap_or_else(|| self.now_ms.saturating_add(DEFAULT_STEP_MS));
        let connected = !step.disconnected;
        let code_of = |key: &str| {
            parse_key_code(key).ok_or_else(|| ReplayError::UnknownKey {
                line,
                key: key.to_string(),
            })
        };

        let resp = match step.event {
            ScriptEvent::Start {
                input_type,
                fullscreen,
                restarting,
            } => {
                let info = EditorInfo::from_input_type(input_type, fullscreen);
                let resp = self.send(Event::StartInput { info, restarting }, connected);
                if !restarting {
                    self.host = HostEditor::default();
                }
                resp
            }
            ScriptEvent::Finish => self.send(Event::FinishInput, connected),
            ScriptEvent::Flick { key, direction } => {
                let code = code_of(&key)?;
                let dir = Direction::from_name(&direction)
                    .ok_or_else(|| ReplayError::UnknownDirection { line, direction })?;
                self.send(Event::Press(code), connected);
                if let Some(sample) = synthetic_fling(dir) {
                    self.send(Event::Gesture(sample), connected);
                }
                self.send(Event::Key(code), connected);
                self.send(Event::Release(code), connected)
            }
            ScriptEvent::Press { key } => self.send(Event::Press(code_of(&key)?), connected),
            ScriptEvent::Gesture {
                start_x,
                start_y,
                end_x,
                end_y,
                velocity_x,
                velocity_y,
            } => self.send(
                Event::Gesture(GestureSample {
                    start_x,
                    start_y,
                    end_x,
                    end_y,
                    velocity_x,
                    velocity_y,
                }),
                connected,
            ),
            ScriptEvent::Release { key } => self.send(Event::Release(code_of(&key)?), connected),
            ScriptEvent::Key { key } => self.send(Event::Key(code_of(&key)?), connected),
            ScriptEvent::HardKey {
                key,
                unicode,
                composed,
            } => {
                let key = match key.as_deref() {
                    None => HardKeyCode::Other,
                    Some("delete") => HardKeyCode::Delete,
                    Some("enter") => HardKeyCode::Enter,
                    Some(other) => {
                        return Err(ReplayError::UnknownKey {
                            line,
                            key: other.to_string(),
                        })
                    }
                };
                let resp = self.send(
                    Event::HardKey {
                        key,
                        unicode,
                        composed_with_last: composed,
                    },
                    connected,
                );
                if connected && !resp.consumed {
                    self.host.pass_through(key, unicode);
                }
                resp
            }
            ScriptEvent::Text { text } => self.send(Event::Text(text), connected),
            ScriptEvent::Pick { index } => self.send(Event::PickCandidate(index), connected),
            ScriptEvent::Completions { items } => {
                self.send(Event::DisplayCompletions(items), connected)
            }
            ScriptEvent::Selection {
                new_start,
                new_end,
                candidates_end,
            } => self.send(
                Event::SelectionChanged {
                    new_start,
                    new_end,
                    candidates_end,
                },
                connected,
            ),
        };

        Ok(StepRecord {
            line,
            consumed: resp.consumed,
            actions: resp.actions.iter().map(ActionRecord::from).collect(),
            composing: self.session.composing_text().to_string(),
            field: format!("{}{}", self.host.committed, self.host.composing),
        })
    }
}

/// A fling well past any sensible threshold in the given direction.
fn synthetic_fling(direction: Direction) -> Option<GestureSample> {
    let (dx, dy) = match direction {
        Direction::Center => return None,
        Direction::Left => (-200.0, 0.0),
        Direction::Up => (0.0, -200.0),
        Direction::Right => (200.0, 0.0),
        Direction::Down => (0.0, 200.0),
    };
    Some(GestureSample {
        start_x: 300.0,
        start_y: 300.0,
        end_x: 300.0 + dx,
        end_y: 300.0 + dy,
        velocity_x: dx * 20.0,
        velocity_y: dy * 20.0,
    })
}

/// Run every step of a script. Blank lines and lines starting with `#` are
/// skipped.
pub fn replay<R: BufRead>(reader: R) -> Result<Vec<StepRecord>, ReplayError> {
    let mut replayer = Replayer {
        session: InputSession::new(),
        host: HostEditor::default(),
        now_ms: 0,
    };
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step: Step = serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse {
            line: line_no,
            source,
        })?;
        records.push(replayer.step(line_no, step)?);
    }
    Ok(records)
}

pub fn replay_file(path: &Path) -> Result<Vec<StepRecord>, ReplayError> {
    replay(BufReader::new(File::open(path)?))
}

pub fn replay_cmd(file: &str, quiet: bool) {
    let records = replay_file(Path::new(file)).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !quiet {
        for record in &records {
            let json = serde_json::to_string(record).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            });
            let _ = writeln!(out, "{json}");
        }
    }
    let field = records.last().map(|r| r.field.as_str()).unwrap_or("");
    let _ = writeln!(out, "{}", serde_json::json!({ "field": field }));
}
