//! Display language and the localized navigation table.
//!
//! DESIGN
//! ======
//! Navigation is one ordered table of rows, each carrying its route target
//! and the label for every locale. Switching locale picks a label column; it
//! never reorders or swaps targets, so `label[i]` and `target[i]` cannot
//! drift apart.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

/// The two supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Arabic,
}

impl Locale {
    pub fn other(self) -> Self {
        match self {
            Self::English => Self::Arabic,
            Self::Arabic => Self::English,
        }
    }

    /// BCP 47 tag for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Self::English => "ltr",
            Self::Arabic => "rtl",
        }
    }

    /// Caption of the language button: names the locale a click switches to.
    pub fn switch_label(self) -> &'static str {
        match self.other() {
            Self::English => "ENG",
            Self::Arabic => "AR",
        }
    }

    /// Navigation entries in display order, labelled for this locale.
    pub fn nav_items(self) -> Vec<NavItem> {
        NAV_LINKS
            .iter()
            .map(|link| NavItem {
                label: link.label(self),
                target: link.target,
            })
            .collect()
    }
}

/// One row of the navigation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub target: &'static str,
    pub english: &'static str,
    pub arabic: &'static str,
}

impl NavLink {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english,
            Locale::Arabic => self.arabic,
        }
    }
}

/// A label/target pair resolved for a single locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        target: "/",
        english: "Startup",
        arabic: "الشركة",
    },
    NavLink {
        target: "/about",
        english: "About",
        arabic: "من نحن",
    },
    NavLink {
        target: "/how",
        english: "How it Works",
        arabic: "كيف يعمل",
    },
    NavLink {
        target: "/pricing",
        english: "Plans/Pricing",
        arabic: "الأسعار",
    },
];
