//! Shared constants for the navigation and reveal state machines.

// ── Navigation ──────────────────────────────────────────────────

/// Viewport width in logical pixels at or above which the overlay menu is forced closed.
pub const WIDE_BREAKPOINT_PX: f64 = 768.0;

// ── Reveal tuning ───────────────────────────────────────────────

/// Fraction of an element's area that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.18;

/// Observer root margin. The negative bottom inset fires 10% of the viewport
/// height before the element's bottom edge reaches the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Delay added per stagger bucket, in milliseconds.
pub const STAGGER_STEP_MS: u32 = 70;

/// Number of distinct stagger buckets; indices wrap so delays stay bounded.
pub const STAGGER_BUCKETS: usize = 6;

// ── DOM hooks ───────────────────────────────────────────────────

/// Selector for elements the presentation layer marks as revealable.
pub const REVEAL_SELECTOR: &str = "[data-reveal]";

/// Class applied to a revealed element.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Class applied to the document root while observation is active.
pub const READY_CLASS: &str = "reveal-ready";

/// Custom property carrying the per-element stagger delay.
pub const DELAY_PROPERTY: &str = "--reveal-delay";

/// Media query for the platform reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
