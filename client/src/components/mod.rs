//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and read/write the shared view state from
//! Leptos context providers set up in `app`.

pub mod footer;
pub mod hero;
pub mod navbar;
