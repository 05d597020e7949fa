//! Landing page: all marketing sections plus the page-lifetime behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydration this page starts two independent subscriptions and keeps
//! their handles in mount-scoped slots:
//! - a window resize listener feeding `NavController::on_resize`;
//! - a `RevealMount` that scans the rendered `data-reveal` elements once and
//!   drives the reveal scheduler.
//!
//! Both handles release their browser resources when dropped, and cleanup
//! drops them synchronously, so neither callback can act after unmount.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use motion::nav::NavController;

use crate::components::faq::FaqSection;
use crate::components::hero::Hero;
use crate::components::pricing::PricingSection;
use crate::components::showcase::{OutcomesSection, ProcessSection, ProgramsSection, TrustSection};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::testimonials::TestimonialsSection;
#[cfg(feature = "hydrate")]
use crate::util::reveal_dom::RevealMount;
#[cfg(feature = "hydrate")]
use crate::util::viewport::listen_resize;

#[component]
pub fn LandingPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let nav = expect_context::<RwSignal<NavController>>();
        let resize_listener = StoredValue::new_local(None::<gloo_events::EventListener>);
        let reveal = StoredValue::new_local(None::<RevealMount>);

        // Runs once, after the sections below are in the DOM.
        Effect::new(move || {
            if resize_listener.with_value(Option::is_none) {
                resize_listener.set_value(listen_resize(move |width| {
                    nav.maybe_update(|n| n.on_resize(width));
                }));
            }
            if reveal.with_value(Option::is_none) {
                reveal.set_value(RevealMount::start());
            }
        });

        on_cleanup(move || {
            drop(resize_listener.try_update_value(Option::take));
            if let Some(Some(mount)) = reveal.try_update_value(Option::take) {
                log::debug!("landing: unmounting with {} reveal targets pending", mount.pending_count());
                drop(mount);
            }
        });
    }

    view! {
        <div class="page-root" id="top">
            <SiteHeader/>
            <main>
                <Hero/>
                <TrustSection/>
                <OutcomesSection/>
                <ProgramsSection/>
                <ProcessSection/>
                <TestimonialsSection/>
                <PricingSection/>
                <FaqSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
