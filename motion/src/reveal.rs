//! Scroll-triggered reveal scheduling.
//!
//! DESIGN
//! ======
//! The scheduler owns one [`RevealTarget`] per revealable element and picks a
//! [`RevealStrategy`] once, at mount. Every DOM effect goes through
//! [`RevealHost`], so the state machine runs natively under test and the
//! browser adapter in `client` stays a thin translation layer.
//!
//! LIFECYCLE
//! =========
//! `mount` applies the strategy immediately. `teardown` releases the shared
//! watcher and clears the root flag; it also runs from `Drop`, so an unmount
//! that never calls it explicitly still releases everything.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STAGGER_BUCKETS, STAGGER_STEP_MS};

/// Platform facts read once at mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Result of the reduced-motion media query, or `None` when the platform
    /// has no media query facility.
    pub reduced_motion: Option<bool>,
    /// Whether viewport intersection observation is available.
    pub observer_capable: bool,
}

impl Capabilities {
    /// A missing query facility counts as "no preference".
    #[must_use]
    pub fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }

    /// Capabilities after the host tried to build its watcher. A failed
    /// build means the platform is not observer-capable for this mount.
    #[must_use]
    pub fn with_observer_built(self, built: bool) -> Self {
        Self { observer_capable: self.observer_capable && built, ..self }
    }
}

/// How targets become visible for the lifetime of one mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Everything is marked visible at mount; nothing is observed.
    EagerAll,
    /// Targets reveal one by one as they intersect the viewport.
    Observed,
}

impl RevealStrategy {
    #[must_use]
    pub fn select(capabilities: Capabilities) -> Self {
        if capabilities.prefers_reduced_motion() || !capabilities.observer_capable {
            Self::EagerAll
        } else {
            Self::Observed
        }
    }
}

/// Watcher tuning and stagger timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub stagger_step_ms: u32,
    pub stagger_buckets: usize,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
            stagger_step_ms: STAGGER_STEP_MS,
            stagger_buckets: STAGGER_BUCKETS,
        }
    }
}

impl RevealConfig {
    /// Stagger delay for the target at `index`: `(index mod buckets) * step`.
    #[must_use]
    pub fn stagger_delay_ms(&self, index: usize) -> u32 {
        let bucket = index % self.stagger_buckets.max(1);
        u32::try_from(bucket).map_or(u32::MAX, |b| b.saturating_mul(self.stagger_step_ms))
    }
}

/// Scheduler-owned record for one revealable element.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTarget<H> {
    handle: H,
    index: usize,
    delay_ms: Option<u32>,
    revealed: bool,
}

impl<H> RevealTarget<H> {
    fn new(handle: H, index: usize) -> Self {
        Self { handle, index, delay_ms: None, revealed: false }
    }

    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Position among all targets of the mount.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Assigned stagger delay. Only set under [`RevealStrategy::Observed`].
    #[must_use]
    pub fn delay_ms(&self) -> Option<u32> {
        self.delay_ms
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only on the first call.
    fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }
}

/// One entry of an intersection batch as delivered by the host.
#[derive(Debug)]
pub struct Intersection<'a, H> {
    pub target: &'a H,
    pub is_intersecting: bool,
}

/// DOM side effects the scheduler needs from its environment.
///
/// `observe`/`unobserve`/`disconnect` act on one shared watcher that the host
/// creates before mount.
pub trait RevealHost {
    /// Opaque element handle. Compared by identity to route intersection entries.
    type Handle: PartialEq;

    /// Apply the "visible" marker to an element.
    fn mark_visible(&mut self, target: &Self::Handle);

    /// Store the stagger delay on an element.
    fn set_reveal_delay(&mut self, target: &Self::Handle, delay_ms: u32);

    /// Set or clear the "reveal-ready" flag on the document root.
    fn set_root_ready(&mut self, ready: bool);

    fn observe(&mut self, target: &Self::Handle);

    fn unobserve(&mut self, target: &Self::Handle);

    /// Stop the shared watcher; no callback may fire afterwards.
    fn disconnect(&mut self);
}

/// Reveal state for one mount of the page.
pub struct RevealScheduler<H: RevealHost> {
    host: H,
    config: RevealConfig,
    strategy: RevealStrategy,
    targets: Vec<RevealTarget<H::Handle>>,
    torn_down: bool,
}

impl<H: RevealHost> RevealScheduler<H> {
    /// Build the target list from `handles` (in order) and apply the strategy
    /// chosen from `capabilities`.
    ///
    /// The target set is fixed here; elements added to the page later are not
    /// picked up.
    pub fn mount<I>(mut host: H, handles: I, capabilities: Capabilities, config: RevealConfig) -> Self
    where
        I: IntoIterator<Item = H::Handle>,
    {
        let mut targets = handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| RevealTarget::new(handle, index))
            .collect::<Vec<_>>();
        let strategy = RevealStrategy::select(capabilities);

        match strategy {
            RevealStrategy::EagerAll => {
                for target in &mut targets {
                    target.reveal();
                    host.mark_visible(&target.handle);
                }
            }
            RevealStrategy::Observed => {
                host.set_root_ready(true);
                for target in &mut targets {
                    let delay_ms = config.stagger_delay_ms(target.index);
                    target.delay_ms = Some(delay_ms);
                    host.set_reveal_delay(&target.handle, delay_ms);
                    host.observe(&target.handle);
                }
            }
        }

        log::debug!(
            "reveal: mounted {} targets with {strategy:?} (reduced_motion={:?}, observer_capable={})",
            targets.len(),
            capabilities.reduced_motion,
            capabilities.observer_capable
        );

        Self { host, config, strategy, targets, torn_down: false }
    }

    #[must_use]
    pub fn strategy(&self) -> RevealStrategy {
        self.strategy
    }

    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    #[must_use]
    pub fn targets(&self) -> &[RevealTarget<H::Handle>] {
        &self.targets
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.targets.iter().filter(|t| t.revealed).count()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.targets.len() - self.revealed_count()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Process one watcher callback batch in delivery order.
    ///
    /// Each intersecting entry for a still-hidden target reveals it and stops
    /// observing that element. Entries never influence each other. Returns
    /// the number of targets revealed by this batch.
    pub fn on_intersections<'a, I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = Intersection<'a, H::Handle>>,
        H::Handle: 'a,
    {
        // Only an active observed mount owns a watcher.
        if self.torn_down || self.strategy != RevealStrategy::Observed {
            return 0;
        }

        let mut revealed = 0;
        for entry in batch {
            if !entry.is_intersecting {
                continue;
            }
            let Some(target) = self.targets.iter_mut().find(|t| t.handle == *entry.target) else {
                continue;
            };
            if !target.reveal() {
                continue;
            }
            self.host.mark_visible(&target.handle);
            self.host.unobserve(&target.handle);
            revealed += 1;
        }

        if revealed > 0 {
            log::trace!("reveal: {revealed} revealed, {} pending", self.pending_count());
        }
        revealed
    }

    /// Release the watcher and clear the root flag. Idempotent.
    pub fn teardown(&mut self) {
        if std::mem::replace(&mut self.torn_down, true) {
            return;
        }
        if self.strategy == RevealStrategy::Observed {
            self.host.disconnect();
            self.host.set_root_ready(false);
            log::debug!("reveal: torn down with {} targets pending", self.pending_count());
        }
    }
}

impl<H: RevealHost> Drop for RevealScheduler<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
