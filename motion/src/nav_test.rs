use super::*;

#[derive(Clone, Copy, Debug)]
enum Op {
    Toggle,
    Close,
    ResizeWide,
    ResizeNarrow,
}

const OPS: [Op; 4] = [Op::Toggle, Op::Close, Op::ResizeWide, Op::ResizeNarrow];

fn apply(nav: &mut NavController, op: Op) {
    match op {
        Op::Toggle => nav.toggle(),
        Op::Close => nav.close(),
        Op::ResizeWide => {
            nav.on_resize(1024.0);
        }
        Op::ResizeNarrow => {
            nav.on_resize(375.0);
        }
    }
}

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_state_default_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::Closed.is_open());
    assert!(MenuState::Open.is_open());
}

// =============================================================
// toggle / close
// =============================================================

#[test]
fn new_controller_starts_closed() {
    let nav = NavController::new();
    assert_eq!(nav.state(), MenuState::Closed);
    assert!(!nav.is_open());
}

#[test]
fn toggle_flips_state() {
    let mut nav = NavController::new();
    nav.toggle();
    assert!(nav.is_open());
    nav.toggle();
    assert!(!nav.is_open());
}

#[test]
fn close_is_idempotent() {
    let mut nav = NavController::new();
    nav.toggle();
    nav.close();
    let after_first = nav;
    nav.close();
    nav.close();
    assert_eq!(nav, after_first);
    assert_eq!(nav.state(), MenuState::Closed);
}

#[test]
fn close_when_already_closed_is_noop() {
    let mut nav = NavController::new();
    nav.close();
    assert_eq!(nav, NavController::new());
}

#[test]
fn open_state_equals_toggle_parity_since_last_close() {
    // Model check: every op sequence up to length 7 over all four operations.
    let len = 7;
    let total = OPS.len().pow(len);
    for mut code in 0..total {
        let mut nav = NavController::new();
        let mut toggles_since_close = 0_usize;
        for _ in 0..len {
            let op = OPS[code % OPS.len()];
            code /= OPS.len();
            let was_open = nav.is_open();
            apply(&mut nav, op);
            match op {
                Op::Toggle => toggles_since_close += 1,
                Op::Close => toggles_since_close = 0,
                Op::ResizeWide if was_open => toggles_since_close = 0,
                Op::ResizeWide | Op::ResizeNarrow => {}
            }
            assert_eq!(nav.is_open(), toggles_since_close % 2 == 1, "op {op:?}");
        }
    }
}

// =============================================================
// on_resize
// =============================================================

#[test]
fn resize_at_breakpoint_closes_open_menu() {
    let mut nav = NavController::new();
    nav.toggle();
    assert!(nav.on_resize(768.0));
    assert_eq!(nav.state(), MenuState::Closed);
}

#[test]
fn resize_above_breakpoint_closes_open_menu() {
    let mut nav = NavController::new();
    nav.toggle();
    assert!(nav.on_resize(1440.0));
    assert!(!nav.is_open());
}

#[test]
fn resize_just_below_breakpoint_keeps_menu_open() {
    let mut nav = NavController::new();
    nav.toggle();
    assert!(!nav.on_resize(767.9));
    assert!(nav.is_open());
}

#[test]
fn resize_never_opens_menu() {
    let mut nav = NavController::new();
    for width in [0.0, 320.0, 767.0, 768.0, 2560.0] {
        assert!(!nav.on_resize(width));
        assert!(!nav.is_open());
    }
}

#[test]
fn resize_wide_when_closed_reports_no_change() {
    let mut nav = NavController::new();
    assert!(!nav.on_resize(1024.0));
    assert_eq!(nav.state(), MenuState::Closed);
}

#[test]
fn resize_with_nan_width_is_ignored() {
    let mut nav = NavController::new();
    nav.toggle();
    assert!(!nav.on_resize(f64::NAN));
    assert!(nav.is_open());
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn toggle_label_tracks_state() {
    let mut nav = NavController::new();
    assert_eq!(nav.toggle_label(), "Menu");
    nav.toggle();
    assert_eq!(nav.toggle_label(), "Close");
}

#[test]
fn aria_expanded_tracks_state() {
    let mut nav = NavController::new();
    assert_eq!(nav.aria_expanded(), "false");
    nav.toggle();
    assert_eq!(nav.aria_expanded(), "true");
    nav.on_resize(900.0);
    assert_eq!(nav.aria_expanded(), "false");
}
