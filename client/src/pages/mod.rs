//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped lookup and delegates rendering details
//! to `components`.

pub mod info;
pub mod landing;
