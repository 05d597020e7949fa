//! Site footer with secondary links and the copyright line.

use leptos::prelude::*;

use crate::content::{BRAND, FOOTER_NAV};
use crate::util::clock::{copyright_line, current_year};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div>
                    <a class="brand" href="#top">
                        {BRAND}
                    </a>
                    <p>"Premium online learning built for modern careers."</p>
                </div>

                <nav aria-label="Footer links" class="footer-links">
                    {FOOTER_NAV.iter().map(|link| view! { <a href=link.href>{link.label}</a> }).collect_view()}
                </nav>

                <p class="copyright">{copyright_line(current_year(), BRAND)}</p>
            </div>
        </footer>
    }
}
