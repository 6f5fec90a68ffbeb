use super::*;
use crate::types::{key, HostAction};

fn shift_at(session: &mut InputSession, now_ms: u64) -> KeyResponse {
    session.handle_event_at(Event::Key(key::SHIFT), Some(&ctx()), now_ms)
}

#[test]
fn test_double_tap_sets_caps_lock() {
    let mut session = text_session();
    let first = shift_at(&mut session, T0);
    assert_eq!(first.actions, vec![HostAction::SetShifted(true)]);
    assert!(!session.caps_lock());

    let second = shift_at(&mut session, T0 + 500);
    assert!(session.caps_lock());
    assert_eq!(second.actions, vec![HostAction::SetShifted(true)]);
}

#[test]
fn test_slow_taps_only_toggle_shift() {
    let mut session = text_session();
    shift_at(&mut session, T0);
    assert!(session.is_shifted());
    shift_at(&mut session, T0 + 900);
    assert!(!session.caps_lock());
    assert!(!session.is_shifted());
}

#[test]
fn test_caps_lock_survives_cursor_refresh() {
    let mut session = text_session();
    shift_at(&mut session, T0);
    shift_at(&mut session, T0 + 100);
    assert!(session.caps_lock());

    // Typing re-derives the shift display from the context.
    type_kana(&mut session, "ア");
    assert!(session.is_shifted());
}

#[test]
fn test_double_tap_again_releases_caps_lock() {
    let mut session = text_session();
    shift_at(&mut session, T0);
    shift_at(&mut session, T0 + 100);
    assert!(session.caps_lock());

    shift_at(&mut session, T0 + 2_000);
    shift_at(&mut session, T0 + 2_100);
    assert!(!session.caps_lock());
}

#[test]
fn test_shift_without_connection_still_toggles() {
    let mut session = text_session();
    let resp = session.handle_event_at(Event::Key(key::SHIFT), None, T0);
    assert!(resp.consumed);
    assert!(session.is_shifted());
}

#[test]
fn test_custom_double_tap_window() {
    use crate::types::SessionConfig;

    let config = SessionConfig {
        double_tap_ms: 2_000,
        ..SessionConfig::default()
    };
    let mut session = InputSession::with_config(config);
    shift_at(&mut session, T0);
    shift_at(&mut session, T0 + 1_500);
    assert!(session.caps_lock());
}

#[test]
fn test_buffer_clearing_keys_refresh_shift() {
    let caps = EditorContext {
        text_before_cursor: "ア".into(),
        cursor_caps: true,
        ..EditorContext::default()
    };
    let selection_away = Event::SelectionChanged {
        new_start: 0,
        new_end: 0,
        candidates_end: 1,
    };

    for event in [
        Event::Key(key::DOKABEN),
        Event::Key(key::CANCEL),
        Event::PickCandidate(0),
        selection_away,
    ] {
        let mut session = text_session();
        type_kana(&mut session, "ア");
        assert!(!session.is_shifted());

        let resp = session.handle_event_at(event.clone(), Some(&caps), T0);
        assert!(!session.is_composing(), "{event:?}");
        assert!(session.is_shifted(), "{event:?}");
        assert!(
            resp.actions.contains(&HostAction::SetShifted(true)),
            "{event:?}: {:?}",
            resp.actions
        );
    }
}
