//! Sticky top navbar: logo, localized links, language/theme toggles, mobile dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `ViewState` signal. Owns the window scroll
//! subscription for the lifetime of the mounted navbar; the subscription is
//! released in `on_cleanup` (and by its own `Drop` on any other path).

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::state::view::ViewState;
use crate::util::scroll;

/// Site-wide navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let theme = expect_context::<Signal<Theme>>();

    let subscription = scroll::subscribe(state);
    on_cleanup(move || subscription.unsubscribe());

    let on_language = move |_| state.update(ViewState::toggle_language);
    let on_menu = move |_| state.update(ViewState::toggle_menu);
    let on_theme = move |_| {
        state.update(|s| {
            let next = s.toggle_theme();
            leptos::logging::log!("theme: {}", next.as_attr());
        });
    };

    let links = move || {
        state
            .get()
            .nav_items()
            .into_iter()
            .map(|item| {
                view! {
                    <li class="navbar__item">
                        <a href=item.target class="navbar__link">
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let dropdown_links = move || {
        state
            .get()
            .nav_items()
            .into_iter()
            .map(|item| {
                view! {
                    <li class="navbar__dropdown-item">
                        <a
                            href=item.target
                            class="navbar__dropdown-link"
                            on:click=move |_| state.update(ViewState::close_menu)
                        >
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class=move || state.get().navbar_class()>
            <div class="navbar__inner">
                <a href="/" class="navbar__logo" title="Labees">
                    "Labees"
                </a>
                <ul class="navbar__links">{links}</ul>
                <div class="navbar__actions">
                    <button class="navbar__lang" on:click=on_language>
                        {move || state.get().locale.switch_label()}
                    </button>
                    <button class="navbar__theme" title="Toggle theme" on:click=on_theme>
                        {move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263e}" }}
                    </button>
                    <button class="navbar__burger" title="Menu" on:click=on_menu>
                        {move || if state.get().menu_open { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
            <Show when=move || state.get().menu_open>
                <ul class="navbar__dropdown">{dropdown_links}</ul>
            </Show>
        </nav>
    }
}
