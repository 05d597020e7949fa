//! Hero section with the primary calls to action and a progress snapshot.
//!
//! The hero is above the fold, so none of it is revealable.

use leptos::prelude::*;

use crate::content::{BRAND, HERO_NOTES};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero section" id="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <p class="eyebrow">"Evidence-based online learning platform"</p>
                    <h1>"Master in-demand skills with academic rigor and real career outcomes."</h1>
                    <p class="lead">
                        {BRAND}
                        " blends university-level instruction, mentor coaching, and portfolio-building projects so every week you learn, apply, and progress with confidence."
                    </p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#pricing">"Start free trial"</a>
                        <a class="btn btn-secondary" href="#programs">"Explore courses"</a>
                    </div>
                    <ul class="hero-notes">
                        {HERO_NOTES.iter().map(|note| view! { <li>{*note}</li> }).collect_view()}
                    </ul>
                </div>

                <aside class="hero-card" aria-label="Student progress and outcomes">
                    <p class="card-kicker">"Student progress snapshot"</p>
                    <h2>"Week 5: Applied Data Strategy"</h2>
                    <ProgressRow label="Learning pace" percent=82/>
                    <ProgressRow label="Project completion" percent=68/>
                    <div class="outcome-chip" aria-label="Outcome summary">
                        <strong>"Mentor note:"</strong>
                        " Your dashboard prototype now meets stakeholder review standards."
                    </div>
                </aside>
            </div>
        </section>
    }
}

#[component]
fn ProgressRow(label: &'static str, percent: u8) -> impl IntoView {
    view! {
        <div class="progress-row">
            <div class="progress-meta">
                <span>{label}</span>
                <span>{format!("{percent}%")}</span>
            </div>
            <div class="progress-track" aria-hidden="true">
                <span class=format!("progress-fill fill-{percent}")></span>
            </div>
        </div>
    }
}
