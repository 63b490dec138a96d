//! Full-height hero banner with localized headline and calls to action.

use leptos::prelude::*;

use crate::copy::{self, VENDORS_PATH, WAITLIST_PATH};
use crate::state::locale::Locale;

/// Hero banner for the landing route.
#[component]
pub fn Hero() -> impl IntoView {
    let locale = expect_context::<Signal<Locale>>();
    let text = move || copy::hero(locale.get());

    view! {
        <section class="hero">
            <div class="hero__backdrop"></div>
            <div class="hero__content">
                <h1 class="hero__headline">{move || text().headline}</h1>
                <p class="hero__subheadline">{move || text().subheadline}</p>
                <div class="hero__actions">
                    <a href=WAITLIST_PATH class="btn hero__cta">
                        {move || text().cta}
                    </a>
                    <a href=VENDORS_PATH class="btn btn--ghost hero__vendors">
                        {move || text().for_brands}
                    </a>
                </div>
                <p class="hero__trusted">{move || text().trusted}</p>
            </div>
        </section>
    }
}
