#![cfg(not(feature = "hydrate"))]

use super::*;
use motion::reveal::RevealStrategy;

#[test]
fn capabilities_are_absent_outside_browser() {
    let caps = read_capabilities();
    assert_eq!(caps.reduced_motion, None);
    assert!(!caps.observer_capable);
}

#[test]
fn absent_capabilities_fall_back_to_eager_reveal() {
    assert_eq!(RevealStrategy::select(read_capabilities()), RevealStrategy::EagerAll);
}
