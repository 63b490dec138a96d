//! Window scroll tracking for the navbar treatment.
//!
//! The predicate is a pure function so it can be tested natively; the
//! listener wiring only exists in the browser build. SSR paths return an
//! inert subscription to keep server rendering deterministic.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

use crate::state::view::ViewState;
use crate::util::subscription::Subscription;

/// Vertical offset, in CSS pixels, past which the navbar is "scrolled".
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// `true` when `offset` is strictly past the threshold.
///
/// Negative offsets (elastic overscroll) and NaN are below it.
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Start tracking the window scroll offset into `view.scrolled`.
///
/// Samples once after hydration so a reload mid-page renders the right
/// treatment, then on every `scroll` event.
pub fn subscribe(view: RwSignal<ViewState>) -> Subscription {
    #[cfg(feature = "hydrate")]
    {
        if web_sys::window().is_none() {
            leptos::logging::warn!("scroll tracking disabled: no window");
            return Subscription::inert();
        }

        let read_offset = || web_sys::window().and_then(|w| w.scroll_y().ok());
        track(view, read_offset, |on_scroll| {
            let handle = leptos::leptos_dom::helpers::window_event_listener(
                leptos::ev::scroll,
                move |_| on_scroll(),
            );
            Subscription::new(move || handle.remove())
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = view;
        Subscription::inert()
    }
}

/// Wire an offset source into `view.scrolled`.
///
/// The initial sample runs in an effect, not during setup: a write made
/// while the navbar is hydrating would be absorbed by the server-rendered
/// `class` and never reach the DOM.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn track<R, L>(view: RwSignal<ViewState>, read_offset: R, listen: L) -> Subscription
where
    R: Fn() -> Option<f64> + Copy + 'static,
    L: FnOnce(Box<dyn Fn()>) -> Subscription,
{
    let sample = move || {
        if let Some(offset) = read_offset() {
            sync_scrolled(view, offset);
        }
    };
    Effect::new(move |_| sample());
    listen(Box::new(sample))
}

/// Apply `offset` to `view`, writing the signal only when the flag flips.
pub fn sync_scrolled(view: RwSignal<ViewState>, offset: f64) {
    if is_past_threshold(offset) != view.get_untracked().scrolled {
        view.update(|v| {
            v.on_scroll(offset);
        });
    }
}
