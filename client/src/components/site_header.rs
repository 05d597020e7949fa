//! Sticky site header with the responsive overlay navigation.
//!
//! DESIGN
//! ======
//! The menu state lives in `motion::nav::NavController` behind an
//! `RwSignal` from context. The header only forwards user intent: the toggle
//! button flips it, and every link (brand included) closes it so following
//! an anchor never leaves the overlay open.

use leptos::prelude::*;
use motion::nav::NavController;

use crate::content::{BRAND, PRIMARY_NAV};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavController>>();
    let close_menu = move |_: leptos::ev::MouseEvent| nav.update(NavController::close);

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a class="brand" href="#top" on:click=close_menu>
                    {BRAND}
                </a>

                <button
                    class="menu-toggle"
                    type="button"
                    aria-controls="primary-navigation"
                    aria-expanded=move || nav.with(NavController::aria_expanded)
                    on:click=move |_| nav.update(NavController::toggle)
                >
                    {move || nav.with(NavController::toggle_label)}
                </button>

                <nav
                    id="primary-navigation"
                    class="primary-nav"
                    class:open=move || nav.with(NavController::is_open)
                >
                    {PRIMARY_NAV
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class=link.class on:click=close_menu>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
