//! Pricing tiers.
//!
//! The featured plan gets a badge and the primary button style; every CTA
//! scrolls back to the top of the page.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{CATALOG, PRICING_HEADING, Plan};

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section class="section pricing" id="pricing">
            <div class="container">
                <SectionHeading heading=PRICING_HEADING/>
                <div class="pricing-grid">
                    {CATALOG.plans.iter().map(|plan| view! { <PriceCard plan=*plan/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PriceCard(plan: Plan) -> impl IntoView {
    view! {
        <article class=plan.card_class() data-reveal="" aria-label=plan.aria_label()>
            {plan.featured.then(|| view! { <span class="badge">"Most popular"</span> })}
            <h3>{plan.name}</h3>
            <p class="price">
                {plan.price}
                <span>{plan.term}</span>
            </p>
            <p class="plan-copy">{plan.description}</p>
            <ul>
                {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <a class=plan.cta_class() href="#top">
                {plan.cta}
            </a>
        </article>
    }
}
