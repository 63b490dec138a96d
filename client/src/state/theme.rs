//! Light/dark palette selection.
//!
//! DESIGN
//! ======
//! The theme is a plain value carried in `ViewState` and handed down the
//! render tree as a derived signal. The app root projects it onto its own
//! `data-theme` attribute and class list, so there is exactly one writer
//! and no document-global mutation to fall out of sync.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// One of the two predefined visual palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite palette.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value for the root `data-theme` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class list for the `.site` wrapper; the styling layer keys dark
    /// variants on `.site.dark`.
    pub fn site_class(self) -> &'static str {
        match self {
            Self::Light => "site",
            Self::Dark => "site dark",
        }
    }
}
