//! Navigation and scroll-reveal state machines for the Learnora landing page.
//!
//! This crate holds the only stateful behavior of the page and has no browser
//! dependencies. The `client` crate binds it to the DOM: it forwards resize
//! notifications to [`nav::NavController`] and implements
//! [`reveal::RevealHost`] on top of `IntersectionObserver`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Overlay menu open/closed state with the wide-viewport guard |
//! | [`reveal`] | Reveal strategy selection, per-target records, and the host seam |
//! | [`consts`] | Breakpoint, observer tuning, and DOM hook names |

pub mod consts;
pub mod nav;
pub mod reveal;
