//! Accessibility assertions: semantic landmarks, heading hygiene, and
//! text that does not rely on styling to be understood

use regex::Regex;
use zengarden::TestDom;

#[test]
fn semantic_landmarks_are_present() {
    let dom = TestDom::fresh();
    let page = dom.page();
    assert!(page.exists("header").expect("header selector"));
    assert!(page.exists("section").expect("section selector"));
}

#[test]
fn meta_tags_support_assistive_tools() {
    let dom = TestDom::fresh();
    let page = dom.page();
    assert!(page.exists("meta[charset]").expect("charset selector"));
    assert!(page.exists("meta[name=\"viewport\"]").expect("viewport selector"));
    assert!(!page.title().is_empty());
}

#[test]
fn headings_are_meaningful_and_start_high() {
    let dom = TestDom::fresh();
    let page = dom.page();

    let headings = page.texts("h1, h2, h3, h4, h5, h6").expect("heading selector");
    assert!(!headings.is_empty(), "page has no headings");
    for heading in &headings {
        assert!(!heading.is_empty(), "empty heading found");
    }

    let tags = page.tag_names("h1, h2, h3, h4, h5, h6").expect("heading selector");
    let first = tags.first().map(String::as_str).unwrap_or_default();
    assert!(
        matches!(first, "h1" | "h2" | "h3"),
        "first heading is {}, expected h1..h3",
        first
    );
}

#[test]
fn decorative_stones_still_expose_their_text() {
    let dom = TestDom::fresh();
    let text = dom.page().body_text();
    assert!(text.contains("Stillness"));
    assert!(text.contains("Balance"));
    assert!(text.contains("Presence"));
    assert!(text.contains("In quietude, clarity emerges"));
    assert!(text.contains("Harmony found in asymmetry"));
    assert!(text.contains("This moment, perfectly imperfect"));
}

#[test]
fn no_broken_or_trapped_interactive_elements() {
    let dom = TestDom::fresh();
    let page = dom.page();
    assert_eq!(page.count("a[href=\"#\"]").expect("link selector"), 0);
    assert_eq!(page.count("a[href=\"\"]").expect("link selector"), 0);
    assert_eq!(page.count("[tabindex=\"-1\"]").expect("tabindex selector"), 0);
}

#[test]
fn information_is_not_conveyed_by_color_alone() {
    let dom = TestDom::fresh();
    // Each stone has a textual label beside its color.
    let bodies = dom
        .page()
        .texts("div[class*=\"bg-stone-700\"]")
        .expect("stone selector");
    let labeled = bodies.iter().filter(|body| !body.is_empty()).count();
    assert!(labeled >= 3, "expected >= 3 labeled stones, got {}", labeled);
}

#[test]
fn hiding_is_scoped_to_a_breakpoint() {
    let dom = TestDom::fresh();
    let hidden = dom
        .page()
        .all_classes("[class*=\"hidden\"]")
        .expect("hidden selector");
    for classes in &hidden {
        if classes.iter().any(|c| c == "md:hidden") {
            continue;
        }
        assert!(
            classes.iter().any(|c| c.starts_with("md:")),
            "element hidden without a breakpoint escape: {:?}",
            classes
        );
    }
}

#[test]
fn rem_sizing_keeps_the_page_zoomable() {
    let dom = TestDom::fresh();
    let rem_sizes = Regex::new(r"\[14rem\]|\[16rem\]|\[24rem\]").expect("valid pattern");
    assert!(rem_sizes.is_match(dom.source()));
}

#[test]
fn text_sizes_build_a_visual_hierarchy() {
    let dom = TestDom::fresh();
    let scale = Regex::new(r"text-(xs|sm|base|lg|xl|2xl|3xl|4xl|5xl|6xl)").expect("valid pattern");
    assert!(scale.is_match(dom.source()));
}

#[test]
fn dark_backgrounds_pair_with_light_text() {
    let dom = TestDom::fresh();
    let source = dom.source();
    if source.contains("bg-stone-700") {
        assert!(
            Regex::new(r"text-stone-100|text-white")
                .expect("valid pattern")
                .is_match(source),
            "dark background without a light text pairing"
        );
    }
}
