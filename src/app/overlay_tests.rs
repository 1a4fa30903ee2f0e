//! Unit tests for the overlay state machine.

use super::*;

#[test]
fn open_from_closed_succeeds() {
    let mut overlays = OverlayController::new();

    assert!(overlays.open(Overlay::Login));
    assert_eq!(overlays.current(), Some(Overlay::Login));
}

#[test]
fn open_while_open_is_rejected() {
    let mut overlays = OverlayController::new();
    overlays.open(Overlay::Login);

    assert!(!overlays.open(Overlay::Register));
    assert_eq!(overlays.current(), Some(Overlay::Login));
}

#[test]
fn close_only_matches_the_open_overlay() {
    let mut overlays = OverlayController::new();
    overlays.open(Overlay::Login);

    assert!(!overlays.close(Overlay::Register));
    assert!(overlays.is_open());

    assert!(overlays.close(Overlay::Login));
    assert!(!overlays.is_open());
}

#[test]
fn switch_closes_immediately_and_defers_the_open() {
    let mut overlays = OverlayController::new();
    overlays.open(Overlay::Login);

    assert!(overlays.begin_switch(Overlay::Login, Overlay::Register));
    assert!(!overlays.is_open());
    assert_eq!(overlays.pending_switch(), Some(Overlay::Register));

    // Timer fires: the deferred open happens now.
    let target = overlays.take_pending().unwrap();
    assert!(overlays.open(target));
    assert_eq!(overlays.current(), Some(Overlay::Register));
}

#[test]
fn switch_from_wrong_overlay_is_rejected() {
    let mut overlays = OverlayController::new();
    overlays.open(Overlay::Login);

    assert!(!overlays.begin_switch(Overlay::Register, Overlay::Login));
    assert_eq!(overlays.current(), Some(Overlay::Login));
    assert_eq!(overlays.pending_switch(), None);
}

#[test]
fn close_all_dismisses_open_and_pending() {
    let mut overlays = OverlayController::new();
    overlays.open(Overlay::Login);
    overlays.begin_switch(Overlay::Login, Overlay::Register);

    assert!(overlays.close_all());
    assert!(!overlays.is_open());
    assert_eq!(overlays.take_pending(), None);
}

#[test]
fn direct_open_supersedes_a_pending_switch() {
    let mut overlays = OverlayController::new();
    overlays.open(Overlay::Login);
    overlays.begin_switch(Overlay::Login, Overlay::Register);

    // User reopens login before the delayed register-open fires.
    assert!(overlays.open(Overlay::Login));
    assert_eq!(overlays.take_pending(), None);
    assert_eq!(overlays.current(), Some(Overlay::Login));
}

#[test]
fn close_all_when_nothing_open_reports_false() {
    let mut overlays = OverlayController::new();
    assert!(!overlays.close_all());
}
