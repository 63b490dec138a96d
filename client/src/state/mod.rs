//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `view` holds the page-session flags; `theme` and `locale` are the value
//! types those flags are made of, usable on their own by components that only
//! style or only translate.

pub mod locale;
pub mod theme;
pub mod view;
