//! Viewport width and resize subscription.
//!
//! The listener handle deregisters itself on drop, so holding it in a
//! mount-scoped slot ties the subscription to the page's lifetime.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Current `window.innerWidth` in logical pixels, if a window exists.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Call `on_width` with the new viewport width after every window resize.
///
/// Returns `None` when there is no window to listen on.
#[cfg(feature = "hydrate")]
pub fn listen_resize(mut on_width: impl FnMut(f64) + 'static) -> Option<gloo_events::EventListener> {
    let window = web_sys::window()?;
    Some(gloo_events::EventListener::new(&window, "resize", move |_event| {
        if let Some(width) = viewport_width() {
            on_width(width);
        }
    }))
}
