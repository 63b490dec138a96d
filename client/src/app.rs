//! Root application component with routing and context providers.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::{info::InfoPage, landing::LandingPage};
use crate::state::locale::Locale;
use crate::state::theme::Theme;
use crate::state::view::ViewState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: document metadata, then the routed site.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/labees.css"/>
        <Title text="Labees"/>

        <Site initial=ViewState::default()>
            <Router>
                <Navbar/>
                <main class="site__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("about") view=InfoPage/>
                        <Route path=StaticSegment("how") view=InfoPage/>
                        <Route path=StaticSegment("pricing") view=InfoPage/>
                        <Route path=StaticSegment("waitlist") view=InfoPage/>
                        <Route path=StaticSegment("vendors") view=InfoPage/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </Site>
    }
}

/// The `.site` wrapper.
///
/// Owns the page-session `ViewState` and hands it down as context, together
/// with memoized `Theme` and `Locale` signals for components that only read
/// one of them. The theme and locale are projected onto this wrapper rather
/// than onto `<html>`, so the styling layer sees a single flag that is always
/// derived from the same state.
#[component]
pub fn Site(initial: ViewState, children: Children) -> impl IntoView {
    let state = RwSignal::new(initial);
    let theme = Memo::new(move |_| state.get().theme);
    let locale = Memo::new(move |_| state.get().locale);

    provide_context(state);
    provide_context::<Signal<Theme>>(theme.into());
    provide_context::<Signal<Locale>>(locale.into());

    view! {
        <div
            class=move || theme.get().site_class()
            data-theme=move || theme.get().as_attr()
            lang=move || locale.get().code()
            dir=move || locale.get().dir()
        >
            {children()}
        </div>
    }
}
