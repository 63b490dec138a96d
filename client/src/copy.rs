//! Localized marketing copy for the hero and info pages.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use crate::state::locale::Locale;

/// Hero banner text for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroCopy {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub for_brands: &'static str,
    pub trusted: &'static str,
}

pub const WAITLIST_PATH: &str = "/waitlist";
pub const VENDORS_PATH: &str = "/vendors";

const HERO_EN: HeroCopy = HeroCopy {
    headline: "Qatar's First Curated Fashion Marketplace",
    subheadline: "Shop bold, curated fashion from Qatar's top Gen Z designers.",
    cta: "Join the Waitlist",
    for_brands: "Apply as a Vendor",
    trusted: "Trusted by brands like",
};

const HERO_AR: HeroCopy = HeroCopy {
    headline: "أول سوق أزياء مختارة في قطر",
    subheadline: "تسوق أزياء جريئة ومختارة من أفضل مصممي الجيل Z في قطر",
    cta: "انضم إلى قائمة الانتظار",
    for_brands: "قدم كبائع",
    trusted: "موثوق به من قبل علامات تجارية مثل",
};

pub fn hero(locale: Locale) -> HeroCopy {
    match locale {
        Locale::English => HERO_EN,
        Locale::Arabic => HERO_AR,
    }
}

/// Heading and body of an info page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCopy {
    pub title: &'static str,
    pub body: &'static str,
}

struct PageRow {
    target: &'static str,
    english: PageCopy,
    arabic: PageCopy,
}

const PAGES: [PageRow; 5] = [
    PageRow {
        target: "/about",
        english: PageCopy {
            title: "About Labees",
            body: "We bring independent Qatari designers and the shoppers who love them onto one curated marketplace.",
        },
        arabic: PageCopy {
            title: "عن لبيس",
            body: "نجمع المصممين القطريين المستقلين ومحبي أعمالهم في سوق واحد مختار بعناية.",
        },
    },
    PageRow {
        target: "/how",
        english: PageCopy {
            title: "How it Works",
            body: "Brands apply, we curate their collections, and shoppers order straight from the designers.",
        },
        arabic: PageCopy {
            title: "كيف يعمل",
            body: "تتقدم العلامات التجارية، ونختار مجموعاتها، ويطلب المتسوقون مباشرة من المصممين.",
        },
    },
    PageRow {
        target: "/pricing",
        english: PageCopy {
            title: "Plans & Pricing",
            body: "Listing is free during the launch period. Vendors pay a commission only on completed orders.",
        },
        arabic: PageCopy {
            title: "الخطط والأسعار",
            body: "الإدراج مجاني خلال فترة الإطلاق. يدفع البائعون عمولة على الطلبات المكتملة فقط.",
        },
    },
    PageRow {
        target: WAITLIST_PATH,
        english: PageCopy {
            title: "Join the Waitlist",
            body: "Early members get first access to launch collections. Sign-ups open soon.",
        },
        arabic: PageCopy {
            title: "انضم إلى قائمة الانتظار",
            body: "يحصل الأعضاء الأوائل على وصول مبكر إلى مجموعات الإطلاق. التسجيل يفتح قريبًا.",
        },
    },
    PageRow {
        target: VENDORS_PATH,
        english: PageCopy {
            title: "Apply as a Vendor",
            body: "Tell us about your label and we will reach out before the marketplace opens.",
        },
        arabic: PageCopy {
            title: "قدم كبائع",
            body: "أخبرنا عن علامتك التجارية وسنتواصل معك قبل افتتاح السوق.",
        },
    },
];

/// Copy for the info page at `target`, if there is one.
pub fn page(target: &str, locale: Locale) -> Option<PageCopy> {
    PAGES
        .iter()
        .find(|row| row.target == target)
        .map(|row| match locale {
            Locale::English => row.english,
            Locale::Arabic => row.arabic,
        })
}

pub const FOOTER_TAGLINE: &str = "Made in Qatar with \u{2764}\u{fe0f}";
