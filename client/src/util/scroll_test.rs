use super::*;

#[test]
fn zero_offset_is_below_threshold() {
    assert!(!is_past_threshold(0.0));
}

#[test]
fn threshold_itself_is_excluded() {
    assert!(!is_past_threshold(SCROLL_THRESHOLD_PX));
    assert!(!is_past_threshold(20.0));
}

#[test]
fn one_pixel_past_threshold_counts() {
    assert!(is_past_threshold(21.0));
    assert!(is_past_threshold(20.5));
}

#[test]
fn overscroll_and_nan_do_not_count() {
    assert!(!is_past_threshold(-1.0));
    assert!(!is_past_threshold(-500.0));
    assert!(!is_past_threshold(f64::NEG_INFINITY));
    assert!(!is_past_threshold(f64::NAN));
    assert!(is_past_threshold(f64::INFINITY));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn subscribe_is_inert_without_a_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let view = RwSignal::new(ViewState::default());
        let sub = subscribe(view);
        assert!(!sub.is_active());
        assert!(!view.get_untracked().scrolled);
    });
}

#[test]
fn sync_scrolled_follows_threshold() {
    let owner = Owner::new();
    owner.with(|| {
        let view = RwSignal::new(ViewState::default());
        sync_scrolled(view, 300.0);
        assert!(view.get_untracked().scrolled);
        sync_scrolled(view, 500.0);
        assert!(view.get_untracked().scrolled);
        sync_scrolled(view, -12.0);
        assert!(!view.get_untracked().scrolled);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn track_defers_initial_sample_past_setup() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let owner = Owner::new();
    owner.with(|| {
        let view = RwSignal::new(ViewState::default());
        let registered: Rc<RefCell<Option<Box<dyn Fn()>>>> = Rc::default();
        let slot = Rc::clone(&registered);

        let sub = track(view, || Some(300.0), move |on_scroll| {
            *slot.borrow_mut() = Some(on_scroll);
            Subscription::new(|| {})
        });

        assert!(sub.is_active());
        assert!(!view.get_untracked().scrolled);

        let on_scroll = registered.borrow_mut().take().unwrap();
        on_scroll();
        assert!(view.get_untracked().scrolled);
    });
}
