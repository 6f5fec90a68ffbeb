use dokaben_core::fling::Direction;

use super::*;
use crate::types::{HostAction, InputClass, TextVariation};

fn start(session: &mut InputSession, info: EditorInfo) -> KeyResponse {
    send(
        session,
        Event::StartInput {
            info,
            restarting: false,
        },
    )
}

fn with_variation(variation: TextVariation) -> EditorInfo {
    EditorInfo {
        variation,
        ..EditorInfo::text()
    }
}

fn auto_complete(fullscreen: bool) -> EditorInfo {
    EditorInfo {
        auto_complete: true,
        fullscreen,
        ..EditorInfo::text()
    }
}

// --- Start of input ---

#[test]
fn test_start_plain_text_enables_prediction() {
    let mut session = InputSession::new();
    let resp = start(&mut session, EditorInfo::text());
    assert!(session.prediction_on());
    assert!(!session.completion_on());
    assert_eq!(
        resp.actions,
        vec![HostAction::HideCandidates, HostAction::SetShifted(false)]
    );
}

#[test]
fn test_start_disables_prediction_for_sensitive_fields() {
    for variation in [
        TextVariation::Password,
        TextVariation::VisiblePassword,
        TextVariation::EmailAddress,
        TextVariation::Uri,
        TextVariation::Filter,
    ] {
        let mut session = InputSession::new();
        start(&mut session, with_variation(variation));
        assert!(!session.prediction_on(), "{variation:?}");
    }

    let mut session = InputSession::new();
    start(&mut session, with_variation(TextVariation::Other));
    assert!(session.prediction_on());
}

#[test]
fn test_start_non_text_class() {
    let mut session = InputSession::new();
    start(
        &mut session,
        EditorInfo {
            class: InputClass::Other,
            variation: TextVariation::Other,
            auto_complete: false,
            fullscreen: false,
        },
    );
    assert!(!session.prediction_on());

    // Characters go straight to the field.
    let resp = flick(&mut session, 'ア', Direction::Center);
    assert_eq!(resp.actions, vec![HostAction::CommitText("ア".into())]);
}

#[test]
fn test_start_auto_complete() {
    let mut session = InputSession::new();
    start(&mut session, auto_complete(false));
    assert!(!session.prediction_on());
    assert!(!session.completion_on());

    let mut session = InputSession::new();
    start(&mut session, auto_complete(true));
    assert!(!session.prediction_on());
    assert!(session.completion_on());
}

#[test]
fn test_start_resets_composing() {
    let mut session = text_session();
    type_kana(&mut session, "カ");
    let resp = send(
        &mut session,
        Event::StartInput {
            info: EditorInfo::text(),
            restarting: true,
        },
    );
    assert!(!session.is_composing());
    assert!(session.candidates().is_empty());
    // Restart does not re-commit: the editor's text may have changed.
    assert_eq!(resp.committed(), "");
    assert!(resp.hides_candidates());
}

#[test]
fn test_start_uses_cursor_caps() {
    let mut session = InputSession::new();
    let caps = EditorContext {
        cursor_caps: true,
        ..EditorContext::default()
    };
    let resp = session.handle_event_at(
        Event::StartInput {
            info: EditorInfo::text(),
            restarting: false,
        },
        Some(&caps),
        T0,
    );
    assert!(session.is_shifted());
    assert_eq!(resp.actions.last(), Some(&HostAction::SetShifted(true)));
}

// --- Finish of input ---

#[test]
fn test_finish_commits_composing() {
    let mut session = text_session();
    type_kana(&mut session, "ネコ");
    let resp = send(&mut session, Event::FinishInput);
    assert_eq!(resp.committed(), "ネコ");
    assert!(resp.hides_candidates());
    assert!(!session.is_composing());
    assert!(session.candidates().is_empty());
}

#[test]
fn test_finish_is_idempotent() {
    let mut session = text_session();
    type_kana(&mut session, "ネ");
    send(&mut session, Event::FinishInput);
    let resp = send(&mut session, Event::FinishInput);
    assert_eq!(resp.actions, vec![HostAction::HideCandidates]);
}

#[test]
fn test_finish_without_connection_discards() {
    let mut session = text_session();
    type_kana(&mut session, "ネ");
    let resp = session.handle_event_at(Event::FinishInput, None, T0);
    assert_eq!(resp.actions, vec![HostAction::HideCandidates]);
    assert!(!session.is_composing());
}

#[test]
fn test_finish_clears_caps_lock_and_pending() {
    let mut session = text_session();
    tap(&mut session, crate::key::SHIFT);
    tap(&mut session, crate::key::SHIFT);
    assert!(session.caps_lock());
    send(&mut session, Event::Press('カ' as i32));

    send(&mut session, Event::FinishInput);
    assert!(!session.caps_lock());
    assert!(!session.is_shifted());

    // The press before finish is forgotten.
    let resp = send(&mut session, Event::Release('カ' as i32));
    assert!(!resp.consumed);
}

// --- Selection changes ---

#[test]
fn test_selection_away_drops_composing() {
    let mut session = text_session();
    type_kana(&mut session, "ミ");
    let resp = send(
        &mut session,
        Event::SelectionChanged {
            new_start: 0,
            new_end: 0,
            candidates_end: 1,
        },
    );
    assert!(!session.is_composing());
    assert_eq!(
        resp.actions,
        vec![
            HostAction::HideCandidates,
            HostAction::FinishComposingText,
            HostAction::SetShifted(false),
        ]
    );
    assert_eq!(resp.committed(), "");
}

#[test]
fn test_selection_at_composing_end_keeps_composing() {
    let mut session = text_session();
    type_kana(&mut session, "ミ");
    let resp = send(
        &mut session,
        Event::SelectionChanged {
            new_start: 1,
            new_end: 1,
            candidates_end: 1,
        },
    );
    assert!(!resp.consumed);
    assert_eq!(session.composing_text(), "ミ");
}

#[test]
fn test_selection_change_while_idle() {
    let mut session = text_session();
    let resp = send(
        &mut session,
        Event::SelectionChanged {
            new_start: 4,
            new_end: 4,
            candidates_end: -1,
        },
    );
    assert!(!resp.consumed);
    assert!(resp.actions.is_empty());
}

// --- Editor completions ---

#[test]
fn test_completions_shown_in_completion_mode() {
    let mut session = InputSession::new();
    start(&mut session, auto_complete(true));

    let words = vec!["ネコ".to_string(), "ネズミ".to_string()];
    let resp = send(&mut session, Event::DisplayCompletions(words.clone()));
    assert_eq!(resp.actions, vec![HostAction::ShowCandidates(words)]);

    let resp = send(&mut session, Event::PickCandidate(1));
    assert_eq!(
        resp.actions[..2],
        [HostAction::CommitCompletion(1), HostAction::HideCandidates]
    );

    // Completions were consumed by the pick.
    let resp = send(&mut session, Event::PickCandidate(0));
    assert!(resp.actions.is_empty());
}

#[test]
fn test_completions_ignored_otherwise() {
    let mut session = text_session();
    let resp = send(&mut session, Event::DisplayCompletions(vec!["x".into()]));
    assert!(!resp.consumed);
    assert!(resp.actions.is_empty());
}

#[test]
fn test_empty_completions_hide() {
    let mut session = InputSession::new();
    start(&mut session, auto_complete(true));
    let resp = send(&mut session, Event::DisplayCompletions(Vec::new()));
    assert_eq!(resp.actions, vec![HostAction::HideCandidates]);
}

#[test]
fn test_completion_mode_keeps_panel_for_editor() {
    let mut session = InputSession::new();
    start(&mut session, auto_complete(true));
    // Letters commit directly and do not touch the candidate panel.
    let resp = flick(&mut session, 'カ', Direction::Center);
    assert_eq!(resp.actions, vec![HostAction::CommitText("カ".into())]);
    assert!(!resp.hides_candidates());
}
