// tests/navigator.rs
use offerings_browser::modal::{Direction, ModalState, Navigator};

#[test]
fn wraps_at_both_ends() {
    let mut nav = Navigator::new();
    assert!(nav.open(0, 5));
    assert_eq!(nav.navigate(Direction::Prev, 5), Some(4));
    assert_eq!(nav.navigate(Direction::Next, 5), Some(0));

    assert!(nav.open(4, 5));
    assert_eq!(nav.navigate(Direction::Next, 5), Some(0));
}

#[test]
fn single_record_wraps_onto_itself() {
    let mut nav = Navigator::new();
    assert!(nav.open(0, 1));
    assert_eq!(nav.navigate(Direction::Next, 1), Some(0));
    assert_eq!(nav.navigate(Direction::Prev, 1), Some(0));
}

#[test]
fn closed_navigator_ignores_movement() {
    let mut nav = Navigator::new();
    assert_eq!(nav.navigate(Direction::Next, 3), None);
    assert_eq!(nav.state(), ModalState::Closed);
}

#[test]
fn open_refuses_invalid_positions() {
    let mut nav = Navigator::new();
    assert!(!nav.open(0, 0));
    assert!(!nav.open(3, 3));
    assert!(!nav.is_open());
}

#[test]
fn close_then_reopen() {
    let mut nav = Navigator::new();
    nav.open(2, 3);
    nav.close();
    assert_eq!(nav.position(), None);
    nav.open(1, 3);
    assert_eq!(nav.position(), Some(1));
}
