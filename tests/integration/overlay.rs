//! Overlay controller scenarios: debounce, keyboard, one-shot commit.

use crate::common::small_index;
use std::time::{Duration, Instant};
use waypost::{Key, Navigator, OverlayController, Phase, DEBOUNCE_WINDOW};

#[derive(Default)]
struct Recorder {
    visited: Vec<String>,
}

impl Navigator for Recorder {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}

#[test]
fn burst_of_keystrokes_triggers_one_pass_on_final_query() {
    let index = small_index();
    let mut overlay = OverlayController::new(&index);
    let start = Instant::now();
    overlay.open();

    // Five keystrokes, 50ms apart, all inside one debounce window.
    let mut now = start;
    for partial in ["c", "co", "con", "cont", "conta"] {
        overlay.input(partial, now);
        now += Duration::from_millis(50);
        assert!(!overlay.tick(now), "no pass may run inside the window");
    }

    // One pass fires after the pause, on the final query only.
    let mut passes = 0;
    let deadline = now + DEBOUNCE_WINDOW;
    while now < deadline {
        now += Duration::from_millis(50);
        if overlay.tick(now) {
            passes += 1;
        }
    }
    assert_eq!(passes, 1);
    assert_eq!(overlay.query(), "conta");
    assert_eq!(overlay.phase(), Some(Phase::Results));

    // Nothing further fires without new input.
    assert!(!overlay.tick(now + DEBOUNCE_WINDOW));
}

#[test]
fn rapid_d_do_don_scores_once_with_don() {
    let index = small_index();
    let mut overlay = OverlayController::new(&index);
    let start = Instant::now();
    overlay.open();

    overlay.input("d", start);
    overlay.input("do", start + Duration::from_millis(50));
    overlay.input("don", start + Duration::from_millis(100));

    let due = start + Duration::from_millis(100) + DEBOUNCE_WINDOW;
    assert!(overlay.tick(due));
    assert_eq!(overlay.query(), "don");
    // "don" matches Donate Money via keyword "donate"/"donation".
    assert_eq!(overlay.phase(), Some(Phase::Results));
    assert!(!overlay.tick(due + DEBOUNCE_WINDOW));
}

#[test]
fn single_character_query_never_reaches_the_scorer() {
    let index = small_index();
    let mut overlay = OverlayController::new(&index);
    let start = Instant::now();
    overlay.open();

    overlay.input("c", start);
    assert!(!overlay.tick(start + DEBOUNCE_WINDOW));
    assert_eq!(overlay.phase(), Some(Phase::Querying));
    assert!(overlay.results().is_empty());
}

#[test]
fn commit_by_click_navigates_and_resets() {
    let index = small_index();
    let mut overlay = OverlayController::new(&index);
    let mut nav = Recorder::default();
    let start = Instant::now();
    overlay.open();
    overlay.input("education", start);
    overlay.tick(start + DEBOUNCE_WINDOW);
    assert_eq!(overlay.phase(), Some(Phase::Results));

    overlay.commit(0, &mut nav);
    assert_eq!(nav.visited, vec!["/programs#education".to_string()]);
    assert!(!overlay.is_open());
    assert_eq!(overlay.query(), "");
    assert!(overlay.results().is_empty());
}

#[test]
fn escape_then_reopen_starts_fresh() {
    let index = small_index();
    let mut overlay = OverlayController::new(&index);
    let mut nav = Recorder::default();
    let start = Instant::now();
    overlay.open();
    overlay.input("contact", start);
    overlay.tick(start + DEBOUNCE_WINDOW);
    assert_eq!(overlay.phase(), Some(Phase::Results));

    overlay.key(Key::Escape, &mut nav);
    assert!(!overlay.is_open());

    overlay.open();
    assert_eq!(overlay.phase(), Some(Phase::Empty));
    assert_eq!(overlay.query(), "");
    assert!(overlay.results().is_empty());
}

#[test]
fn closed_overlay_ignores_input_and_keys() {
    let index = small_index();
    let mut overlay = OverlayController::new(&index);
    let mut nav = Recorder::default();

    overlay.input("contact", Instant::now());
    overlay.key(Key::ArrowDown, &mut nav);
    overlay.key(Key::Enter, &mut nav);

    assert!(!overlay.is_open());
    assert!(nav.visited.is_empty());
    assert!(!overlay.tick(Instant::now() + DEBOUNCE_WINDOW));
}

#[test]
fn full_keyboard_session() {
    let index = small_index();
    let mut overlay = OverlayController::new(&index);
    let mut nav = Recorder::default();
    let start = Instant::now();

    overlay.open();
    overlay.input("phone", start);
    overlay.tick(start + DEBOUNCE_WINDOW);
    assert_eq!(overlay.phase(), Some(Phase::Results));
    assert!(overlay.results().len() >= 2);

    overlay.key(Key::ArrowDown, &mut nav);
    overlay.key(Key::ArrowDown, &mut nav);
    overlay.key(Key::ArrowUp, &mut nav);
    assert_eq!(overlay.selected(), Some(0));

    overlay.key(Key::Enter, &mut nav);
    assert_eq!(nav.visited.len(), 1);
    assert!(!overlay.is_open());
}
