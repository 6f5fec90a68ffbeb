mod lifecycle;
mod shift;

use dokaben_core::fling::{Direction, GestureSample};

use super::types::{EditorContext, EditorInfo, Event, KeyResponse};
use super::InputSession;

/// A fixed clock far from the epoch, for events that read the time.
pub(super) const T0: u64 = 1_700_000_000_000;

pub(super) fn ctx() -> EditorContext {
    EditorContext::default()
}

/// Context whose text before the cursor ends with `before`.
pub(super) fn ctx_before(before: &str) -> EditorContext {
    EditorContext {
        text_before_cursor: before.to_string(),
        ..EditorContext::default()
    }
}

/// Session already started on a plain text field.
pub(super) fn text_session() -> InputSession {
    let mut session = InputSession::new();
    session.handle_event_at(
        Event::StartInput {
            info: EditorInfo::text(),
            restarting: false,
        },
        Some(&ctx()),
        T0,
    );
    session
}

pub(super) fn send(session: &mut InputSession, event: Event) -> KeyResponse {
    session.handle_event_at(event, Some(&ctx()), T0)
}

pub(super) fn tap(session: &mut InputSession, code: i32) -> KeyResponse {
    send(session, Event::Key(code))
}

/// A fling comfortably past the default thresholds.
pub(super) fn fling_toward(direction: Direction) -> GestureSample {
    let (dx, dy) = match direction {
        Direction::Center => (0.0, 0.0),
        Direction::Left => (-60.0, 0.0),
        Direction::Up => (0.0, -60.0),
        Direction::Right => (60.0, 0.0),
        Direction::Down => (0.0, 60.0),
    };
    GestureSample {
        start_x: 100.0,
        start_y: 100.0,
        end_x: 100.0 + dx,
        end_y: 100.0 + dy,
        velocity_x: dx * 10.0,
        velocity_y: dy * 10.0,
    }
}

/// Press a row key, optionally fling, release. Returns the release response.
pub(super) fn flick(session: &mut InputSession, row_key: char, direction: Direction) -> KeyResponse {
    let code = row_key as i32;
    send(session, Event::Press(code));
    if direction != Direction::Center {
        send(session, Event::Gesture(fling_toward(direction)));
    }
    // The keyboard view reports the key action between press and release.
    send(session, Event::Key(code));
    send(session, Event::Release(code))
}

/// Flick-type a string of characters reachable from the grid.
pub(super) fn type_kana(session: &mut InputSession, s: &str) {
    use dokaben_core::syllable::{resolve, ConsonantRow};

    for c in s.chars() {
        let (row, dir) = ConsonantRow::ALL
            .into_iter()
            .flat_map(|r| Direction::ALL.into_iter().map(move |d| (r, d)))
            .find(|&(r, d)| resolve(r, d) == Some(c))
            .unwrap_or_else(|| panic!("{c} is not on the flick grid"));
        flick(session, row.key_char(), dir);
    }
}
