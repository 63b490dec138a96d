use super::*;
use leptos_router::location::RequestUrl;

fn render_site(initial: ViewState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        view! {
            <Site initial=initial>
                <Navbar/>
            </Site>
        }
        .to_html()
    })
}

#[test]
fn site_root_reflects_default_state() {
    let html = render_site(ViewState::default());
    assert!(html.contains(r#"class="site""#), "{html}");
    assert!(html.contains(r#"data-theme="light""#), "{html}");
    assert!(html.contains(r#"lang="en""#), "{html}");
    assert!(html.contains(r#"dir="ltr""#), "{html}");
    assert!(html.contains("About"), "{html}");
    assert!(html.contains("AR"), "{html}");
}

#[test]
fn site_root_reflects_dark_arabic_state() {
    let html = render_site(ViewState {
        theme: Theme::Dark,
        locale: Locale::Arabic,
        ..ViewState::default()
    });
    assert!(html.contains(r#"class="site dark""#), "{html}");
    assert!(html.contains(r#"data-theme="dark""#), "{html}");
    assert!(html.contains(r#"lang="ar""#), "{html}");
    assert!(html.contains(r#"dir="rtl""#), "{html}");
    assert!(html.contains("من نحن"), "{html}");
    assert!(html.contains("ENG"), "{html}");
}

#[test]
fn navbar_renders_scroll_treatment_from_initial_state() {
    let html = render_site(ViewState {
        scrolled: true,
        ..ViewState::default()
    });
    assert!(html.contains(r#"class="navbar navbar--scrolled""#), "{html}");
}
