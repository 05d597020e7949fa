//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections from the static content
//! catalog. Elements meant to animate in carry the `data-reveal` attribute;
//! the header reads and writes the navigation menu state from context.

pub mod faq;
pub mod hero;
pub mod pricing;
pub mod section_heading;
pub mod showcase;
pub mod site_footer;
pub mod site_header;
pub mod testimonials;
