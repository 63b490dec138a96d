//! Secondary marketing routes (`/about`, `/how`, `/pricing`, `/waitlist`, `/vendors`).
//!
//! One component serves every info route; the current path selects the copy
//! and the active locale selects its language.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::copy;
use crate::state::locale::Locale;

#[component]
pub fn InfoPage() -> impl IntoView {
    let locale = expect_context::<Signal<Locale>>();
    let location = use_location();

    let content = move || copy::page(&location.pathname.get(), locale.get());

    view! {
        <section class="info-page">
            {move || match content() {
                Some(page) => {
                    view! {
                        <h1 class="info-page__title">{page.title}</h1>
                        <p class="info-page__body">{page.body}</p>
                    }
                        .into_any()
                }
                None => view! { <p class="info-page__missing">"Page not found."</p> }.into_any(),
            }}
        </section>
    }
}
