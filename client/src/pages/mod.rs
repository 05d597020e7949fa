//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns mount-scoped orchestration (listeners, observers) and
//! delegates rendering details to `components`.

pub mod landing;
