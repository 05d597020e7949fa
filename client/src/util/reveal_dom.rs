//! Browser binding for the reveal scheduler.
//!
//! ARCHITECTURE
//! ============
//! `DomRevealHost` maps `RevealHost` calls onto element class lists, an
//! inline custom property, and one shared `IntersectionObserver`.
//! `RevealMount` owns the scheduler for one page mount. The observer callback
//! holds only a weak reference to it, so dropping the mount tears the
//! scheduler down (disconnect + root flag removal) and leaves any callback
//! still queued by the browser with nothing to act on.

#[cfg(test)]
#[path = "reveal_dom_test.rs"]
mod reveal_dom_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use motion::consts::{DELAY_PROPERTY, READY_CLASS, REVEAL_SELECTOR, VISIBLE_CLASS};
#[cfg(feature = "hydrate")]
use motion::reveal::{Intersection, RevealConfig, RevealHost, RevealScheduler, RevealStrategy};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(feature = "hydrate")]
use crate::util::motion_env::read_capabilities;

/// CSS value for the `--reveal-delay` custom property.
pub fn delay_css_value(delay_ms: u32) -> String {
    format!("{delay_ms}ms")
}

#[cfg(feature = "hydrate")]
type SchedulerSlot = Rc<RefCell<Option<RevealScheduler<DomRevealHost>>>>;

#[cfg(feature = "hydrate")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `RevealHost` backed by the live document.
#[cfg(feature = "hydrate")]
pub struct DomRevealHost {
    root: Option<Element>,
    observer: Option<IntersectionObserver>,
    // Kept alive for as long as the observer can call it.
    _callback: Option<ObserverCallback>,
}

#[cfg(feature = "hydrate")]
impl RevealHost for DomRevealHost {
    type Handle = Element;

    fn mark_visible(&mut self, target: &Element) {
        if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
            log::warn!("reveal: could not mark element visible: {err:?}");
        }
    }

    fn set_reveal_delay(&mut self, target: &Element, delay_ms: u32) {
        let Some(element) = target.dyn_ref::<HtmlElement>() else {
            log::debug!("reveal: <{}> has no inline style, delay not set", target.tag_name());
            return;
        };
        if let Err(err) = element.style().set_property(DELAY_PROPERTY, &delay_css_value(delay_ms)) {
            log::warn!("reveal: could not set reveal delay: {err:?}");
        }
    }

    fn set_root_ready(&mut self, ready: bool) {
        let Some(root) = self.root.as_ref() else {
            return;
        };
        let class_list = root.class_list();
        let result = if ready { class_list.add_1(READY_CLASS) } else { class_list.remove_1(READY_CLASS) };
        if let Err(err) = result {
            log::warn!("reveal: could not update root ready flag: {err:?}");
        }
    }

    fn observe(&mut self, target: &Element) {
        if let Some(observer) = self.observer.as_ref() {
            observer.observe(target);
        }
    }

    fn unobserve(&mut self, target: &Element) {
        if let Some(observer) = self.observer.as_ref() {
            observer.unobserve(target);
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.as_ref() {
            observer.disconnect();
        }
    }
}

/// Scheduler for one mount of the landing page. Dropping it tears reveal down.
#[cfg(feature = "hydrate")]
pub struct RevealMount {
    slot: SchedulerSlot,
}

#[cfg(feature = "hydrate")]
impl RevealMount {
    /// Scan the document for revealable elements and start revealing them.
    ///
    /// Must run after the page has rendered; elements added later are not
    /// picked up. Returns `None` without a window or document.
    pub fn start() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let targets = collect_targets(&document);
        let config = RevealConfig::default();
        let capabilities = read_capabilities();
        let slot: SchedulerSlot = Rc::new(RefCell::new(None));

        let (capabilities, built) = if RevealStrategy::select(capabilities) == RevealStrategy::Observed {
            let built = build_observer(&slot, &config)
                .inspect_err(|err| {
                    log::warn!("reveal: IntersectionObserver construction failed, revealing eagerly: {err:?}");
                })
                .ok();
            (capabilities.with_observer_built(built.is_some()), built)
        } else {
            (capabilities, None)
        };
        let (observer, callback) = built.unzip();

        let host = DomRevealHost { root: document.document_element(), observer, _callback: callback };
        let scheduler = RevealScheduler::mount(host, targets, capabilities, config);
        *slot.borrow_mut() = Some(scheduler);
        Some(Self { slot })
    }

    /// Number of targets still waiting to be revealed.
    pub fn pending_count(&self) -> usize {
        self.slot.borrow().as_ref().map_or(0, RevealScheduler::pending_count)
    }
}

#[cfg(feature = "hydrate")]
fn collect_targets(document: &Document) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[cfg(feature = "hydrate")]
fn build_observer(
    slot: &SchedulerSlot,
    config: &RevealConfig,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let weak = Rc::downgrade(slot);
    let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        let Ok(mut guard) = slot.try_borrow_mut() else {
            return;
        };
        let Some(scheduler) = guard.as_mut() else {
            return;
        };
        let batch = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| (entry.target(), entry.is_intersecting()))
            .collect::<Vec<_>>();
        scheduler.on_intersections(
            batch
                .iter()
                .map(|(target, is_intersecting)| Intersection { target, is_intersecting: *is_intersecting }),
        );
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(config.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    Ok((observer, callback))
}
