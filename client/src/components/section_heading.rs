//! Kicker + headline block shared by the content sections.

use leptos::prelude::*;

use crate::content::Heading;

/// Revealable section heading.
#[component]
pub fn SectionHeading(heading: Heading) -> impl IntoView {
    view! {
        <div class="section-heading" data-reveal="">
            <p class="section-kicker">{heading.kicker}</p>
            <h2>{heading.title}</h2>
        </div>
    }
}
