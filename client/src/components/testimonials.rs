//! Learner stories.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{CATALOG, TESTIMONIALS_HEADING};

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="section testimonials" id="testimonials">
            <div class="container">
                <SectionHeading heading=TESTIMONIALS_HEADING/>
                <div class="testimonial-grid">
                    {CATALOG
                        .testimonials
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <figure class="testimonial-card" data-reveal="">
                                    <blockquote>{testimonial.quote}</blockquote>
                                    <figcaption>
                                        <strong>{testimonial.name}</strong>
                                        <span>{testimonial.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
