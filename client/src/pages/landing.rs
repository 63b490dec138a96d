//! Landing route (`/`).

use leptos::prelude::*;

use crate::components::hero::Hero;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Hero/>
        </div>
    }
}
