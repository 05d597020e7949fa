//! Frequently asked questions as native disclosure widgets.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{CATALOG, FAQ_HEADING};

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section class="section faq" id="faq">
            <div class="container">
                <SectionHeading heading=FAQ_HEADING/>
                <div class="faq-list">
                    {CATALOG
                        .faqs
                        .iter()
                        .map(|faq| {
                            view! {
                                <details data-reveal="">
                                    <summary>{faq.question}</summary>
                                    <p>{faq.answer}</p>
                                </details>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
