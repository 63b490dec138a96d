use leptos::prelude::*;

use crate::copy::FOOTER_TAGLINE;
use crate::state::locale::Locale;

#[component]
pub fn Footer() -> impl IntoView {
    let locale = expect_context::<Signal<Locale>>();

    let links = move || {
        locale
            .get()
            .nav_items()
            .into_iter()
            .map(|item| {
                view! {
                    <li>
                        <a href=item.target class="footer__link">
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <footer class="footer">
            <span class="footer__brand">"Labees"</span>
            <ul class="footer__links">{links}</ul>
            <span class="footer__tagline">{FOOTER_TAGLINE}</span>
        </footer>
    }
}
