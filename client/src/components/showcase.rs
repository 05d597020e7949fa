//! Trust, outcomes, programs, and process sections.
//!
//! Each card is its own reveal target so long grids fade in row by row with
//! the stagger delay the scheduler assigns.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{CATALOG, OUTCOMES_HEADING, PROCESS_HEADING, PROGRAMS_HEADING, Step};

#[component]
pub fn TrustSection() -> impl IntoView {
    view! {
        <section class="section trust" id="trust">
            <div class="container" data-reveal="">
                <p class="section-kicker">"Trusted by learners from"</p>
                <ul class="trust-row" aria-label="Partner and employer names">
                    {CATALOG.partners.iter().map(|partner| view! { <li>{*partner}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
pub fn OutcomesSection() -> impl IntoView {
    view! {
        <section class="section outcomes" id="outcomes">
            <div class="container">
                <SectionHeading heading=OUTCOMES_HEADING/>
                <div class="outcome-grid">
                    {CATALOG
                        .outcomes
                        .iter()
                        .map(|item| {
                            view! {
                                <article class="stat-card" data-reveal="">
                                    <h3>{item.value}</h3>
                                    <p>{item.label}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProgramsSection() -> impl IntoView {
    view! {
        <section class="section programs" id="programs">
            <div class="container">
                <SectionHeading heading=PROGRAMS_HEADING/>
                <div class="program-grid">
                    {CATALOG
                        .programs
                        .iter()
                        .map(|program| {
                            view! {
                                <article class="program-card" data-reveal="">
                                    <p class="program-duration">{program.duration}</p>
                                    <h3>{program.title}</h3>
                                    <p>{program.focus}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <section class="section process" id="process">
            <div class="container">
                <SectionHeading heading=PROCESS_HEADING/>
                <div class="step-grid">
                    {CATALOG
                        .steps
                        .iter()
                        .enumerate()
                        .map(|(position, step)| {
                            view! {
                                <article class="step-card" data-reveal="">
                                    <span class="step-index">{Step::label(position)}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.detail}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
