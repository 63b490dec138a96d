use super::*;

fn labels(locale: Locale) -> Vec<&'static str> {
    locale.nav_items().iter().map(|item| item.label).collect()
}

fn targets(locale: Locale) -> Vec<&'static str> {
    locale.nav_items().iter().map(|item| item.target).collect()
}

// =============================================================
// Locale
// =============================================================

#[test]
fn locale_default_is_english() {
    assert_eq!(Locale::default(), Locale::English);
}

#[test]
fn other_swaps_the_two_locales() {
    assert_eq!(Locale::English.other(), Locale::Arabic);
    assert_eq!(Locale::Arabic.other(), Locale::English);
}

#[test]
fn arabic_renders_right_to_left() {
    assert_eq!(Locale::English.dir(), "ltr");
    assert_eq!(Locale::Arabic.dir(), "rtl");
    assert_eq!(Locale::English.code(), "en");
    assert_eq!(Locale::Arabic.code(), "ar");
}

#[test]
fn switch_label_names_the_other_locale() {
    assert_eq!(Locale::English.switch_label(), "AR");
    assert_eq!(Locale::Arabic.switch_label(), "ENG");
}

// =============================================================
// Navigation table
// =============================================================

#[test]
fn english_nav_items_match_table_order() {
    assert_eq!(
        labels(Locale::English),
        vec!["Startup", "About", "How it Works", "Plans/Pricing"]
    );
    assert_eq!(
        targets(Locale::English),
        vec!["/", "/about", "/how", "/pricing"]
    );
}

#[test]
fn arabic_nav_items_keep_targets_in_order() {
    assert_eq!(
        labels(Locale::Arabic),
        vec!["الشركة", "من نحن", "كيف يعمل", "الأسعار"]
    );
    assert_eq!(targets(Locale::Arabic), targets(Locale::English));
}

#[test]
fn every_item_label_and_target_come_from_the_same_row() {
    for locale in [Locale::English, Locale::Arabic] {
        for (item, row) in locale.nav_items().iter().zip(NAV_LINKS.iter()) {
            assert_eq!(item.target, row.target);
            assert_eq!(item.label, row.label(locale));
        }
    }
}

#[test]
fn nav_targets_are_unique() {
    let all = targets(Locale::English);
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
