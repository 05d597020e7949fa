#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn viewport_width_is_unknown_outside_browser() {
    assert_eq!(viewport_width(), None);
}
