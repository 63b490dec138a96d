//! Scoped release guard for event-listener registrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components register window listeners on mount and hand the guard to
//! `on_cleanup`. Release also runs from `Drop`, so an unmount path that never
//! reaches the explicit call (early return, panic unwinding, a dropped
//! reactive owner) still removes the listener.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Owns the release side of a subscribe/unsubscribe pair.
///
/// The release closure runs at most once.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Release>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release (SSR, tests, no window).
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release now.
    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
