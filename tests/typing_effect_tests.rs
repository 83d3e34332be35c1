//! Integration tests for the hero typewriter timeline.
//!
//! Drives [`TypingAnimator`] with wall-clock durations the way the event
//! loop does and checks the phases line up:
//! - The first character appears exactly at the start delay
//! - Characters then appear once per typing interval
//! - The full phrase holds before deletion begins
//! - Deletion runs at half the typing interval and wraps to the next phrase
//! - The typed prefix (with its block cursor) lands on the hero banner

use std::time::Duration;

use termfolio::config::Config;
use termfolio::content::SiteContent;
use termfolio::tui::typing::{
    TypingAnimator, ADVANCE_PAUSE, DELETE_INTERVAL, HOLD_PAUSE, START_DELAY, TYPE_INTERVAL,
};
use termfolio::tui::{sections, AppState};

fn animator() -> TypingAnimator {
    TypingAnimator::new(vec!["Hi".to_string(), "Yo".to_string()])
}

/// Drives one complete phrase cycle: lead-in, typing, hold, deletion.
/// Leaves the animator on the empty string waiting on the advance pause.
fn run_cycle(typing: &mut TypingAnimator, phrase_len: usize, lead_in: Duration) {
    typing.advance(lead_in);
    for _ in 1..phrase_len {
        typing.advance(TYPE_INTERVAL);
    }
    typing.advance(HOLD_PAUSE);
    for _ in 1..phrase_len {
        typing.advance(DELETE_INTERVAL);
    }
}

fn line_text(line: &ratatui::text::Line) -> String {
    line.spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}

#[test]
fn test_first_character_appears_at_start_delay() {
    let mut typing = animator();
    typing.advance(START_DELAY - Duration::from_millis(1));
    assert_eq!(typing.visible_text(), "", "still inside the start delay");
    typing.advance(Duration::from_millis(1));
    assert_eq!(typing.visible_text(), "H");
}

#[test]
fn test_types_one_character_per_interval() {
    let mut typing = animator();
    typing.advance(START_DELAY);
    typing.advance(TYPE_INTERVAL - Duration::from_millis(1));
    assert_eq!(typing.visible_text(), "H", "interval not elapsed yet");
    typing.advance(Duration::from_millis(1));
    assert_eq!(typing.visible_text(), "Hi");
}

#[test]
fn test_full_phrase_holds_before_deleting() {
    let mut typing = animator();
    typing.advance(START_DELAY + TYPE_INTERVAL);
    assert_eq!(typing.visible_text(), "Hi");
    assert!(typing.is_deleting(), "deletion is armed while the phrase holds");

    typing.advance(HOLD_PAUSE - Duration::from_millis(1));
    assert_eq!(typing.visible_text(), "Hi", "phrase stays intact through the hold");
    typing.advance(Duration::from_millis(1));
    assert_eq!(typing.visible_text(), "H", "first character deleted after the hold");
}

#[test]
fn test_deletion_runs_at_half_the_typing_interval() {
    assert_eq!(DELETE_INTERVAL * 2, TYPE_INTERVAL);

    let mut typing = animator();
    typing.advance(START_DELAY + TYPE_INTERVAL);
    typing.advance(HOLD_PAUSE);
    typing.advance(DELETE_INTERVAL);
    assert_eq!(typing.visible_text(), "");
    assert_eq!(typing.phrase_index(), 1, "emptying the line advances the phrase");
}

#[test]
fn test_cycle_wraps_past_the_last_phrase() {
    let mut typing = animator();
    run_cycle(&mut typing, 2, START_DELAY);
    assert_eq!(typing.phrase_index(), 1);

    run_cycle(&mut typing, 2, ADVANCE_PAUSE);
    assert_eq!(typing.phrase_index(), 0, "second cycle wraps back to the start");
    assert_eq!(typing.visible_text(), "");

    // And the wrapped phrase types again like the first time around
    typing.advance(ADVANCE_PAUSE);
    assert_eq!(typing.visible_text(), "H");
}

#[test]
fn test_stall_catches_up_in_one_advance() {
    let mut typing = animator();
    // A single delta spanning the start delay and the whole phrase
    typing.advance(START_DELAY + TYPE_INTERVAL);
    assert_eq!(typing.visible_text(), "Hi");
}

#[test]
fn test_hero_banner_shows_typed_prefix_with_cursor() {
    let mut state =
        AppState::new(SiteContent::builtin(), Config::new()).expect("state should build");
    state.handle_resize(80, 30);
    // Two characters of "I am a Developer"
    state.advance(START_DELAY + TYPE_INTERVAL);

    let lines = sections::build_page_lines(&state, 80);
    let typed_row = line_text(&lines[6]);
    assert!(
        typed_row.contains("I █"),
        "expected typed prefix with cursor, got {typed_row:?}"
    );
}
