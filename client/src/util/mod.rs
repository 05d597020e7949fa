//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (media queries, observers,
//! window listeners, clocks) from page and component logic so the rest of
//! the crate renders the same under SSR and in native tests.

pub mod clock;
pub mod motion_env;
pub mod reveal_dom;
pub mod viewport;
