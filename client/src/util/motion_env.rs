//! Platform capability probing for the reveal scheduler.
//!
//! Reads the reduced-motion media query and checks for
//! `IntersectionObserver` support. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser both facts are reported as absent, which selects the
//! eager strategy: content is always visible, only the animation is lost.

#[cfg(test)]
#[path = "motion_env_test.rs"]
mod motion_env_test;

use motion::reveal::Capabilities;

/// Read motion preference and observer support from the current window.
pub fn read_capabilities() -> Capabilities {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Capabilities::default();
        };
        let capabilities = Capabilities {
            reduced_motion: reduced_motion(&window),
            observer_capable: observer_capable(&window),
        };
        log::debug!("motion env: {capabilities:?}");
        capabilities
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Capabilities::default()
    }
}

/// `None` when `matchMedia` is missing or rejects the query.
#[cfg(feature = "hydrate")]
fn reduced_motion(window: &web_sys::Window) -> Option<bool> {
    window
        .match_media(motion::consts::REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

#[cfg(feature = "hydrate")]
fn observer_capable(window: &web_sys::Window) -> bool {
    js_sys::Reflect::get(window, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
        .map_or(false, |ctor| ctor.is_function())
}
