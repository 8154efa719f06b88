//! Edge case and boundary condition tests
//!
//! Pages missing optional pieces must degrade to silent no-ops, and the
//! narrow anchor rules must hold exactly.

use std::time::Duration;

use folio_core::controllers::certificates::TIP_CLASS;
use folio_core::{
    build_document, Document, FolioConfig, NodeId, PageSpec, RecordingHost, Selector, UiSession,
    ESCAPE,
};

fn start(doc: Document) -> UiSession<RecordingHost> {
    UiSession::start(doc, FolioConfig::default(), RecordingHost::with_year(2026))
}

fn find(s: &UiSession<RecordingHost>, selector: &str) -> NodeId {
    s.find(&Selector::parse(selector).unwrap()).unwrap()
}

// ============================================================================
// Anchor Rules
// ============================================================================

/// `#` alone and links to ids that do not exist keep their default.
#[test]
fn test_unroutable_anchors_keep_default() {
    let mut doc = build_document(&PageSpec::default());
    let body = doc.body();
    let bare = doc.append(body, "a").attr("href", "#").build();
    let dangling = doc.append(body, "a").attr("href", "#nowhere").build();
    let mut s = start(doc);
    s.show_only_section("skills");

    for link in [bare, dangling] {
        let outcome = s.click(link);
        assert!(!outcome.default_prevented);
    }
    assert!(s.host().scrolls.is_empty());
    assert_eq!(s.snapshot().visible_sections(), ["skills"]);
}

/// A nav link to a non-managed target resets to overview mode even when
/// that target is not a section at all.
#[test]
fn test_nav_link_to_non_managed_element() {
    let mut doc = build_document(&PageSpec::default());
    let nav = doc
        .query_selector(doc.body(), &Selector::class("nav-links"))
        .unwrap();
    let item = doc.append(nav, "li").build();
    let link = doc.append(item, "a").attr("href", "#year").build();
    let mut s = start(doc);

    s.show_only_section("about");
    assert!(s.click(link).default_prevented);
    assert_eq!(s.snapshot().visible_sections().len(), 5);
    assert_eq!(s.host().last_scroll().unwrap().element_id, "year");
}

/// Managed ids are recognized even when their section is missing: the
/// click narrows over the sections that do exist, hiding all of them.
#[test]
fn test_missing_managed_section() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append(body, "section").id("about").build();
    let link = doc.append(body, "a").attr("href", "#about").build();
    let mut s = start(doc);

    assert_eq!(s.sections().sections().len(), 1);
    s.click(link);
    assert_eq!(s.snapshot().visible_sections(), ["about"]);
    s.show_only_section("skills");
    assert!(s.snapshot().visible_sections().is_empty());
}

/// Every fragment link on the default page is routed, certificate media
/// included.
#[test]
fn test_fragment_links_wired() {
    let s = start(build_document(&PageSpec::default()));
    let wired = s.anchors().links().len();
    // brand, six nav links, call to action, back to top, two certificate media
    assert_eq!(wired, 11);
}

// ============================================================================
// Optional Overlays
// ============================================================================

#[test]
fn test_page_without_overlays() {
    let spec = PageSpec {
        include_lightbox: false,
        include_project_modal: false,
        ..PageSpec::default()
    };
    let mut s = start(build_document(&spec));

    let media = find(&s, ".certificate-media");
    let outcome = s.click(media);
    assert!(outcome.default_prevented, "tip still runs without a lightbox");

    let details = find(&s, ".project-details");
    s.click(details);
    s.key_down(ESCAPE);
    s.open_lightbox("x.png", "x");
    s.close_lightbox();
    s.open_project_modal("t", "d");
    s.close_project_modal();

    let snap = s.snapshot();
    assert!(snap.lightbox.is_none());
    assert!(snap.project_modal.is_none());
    assert!(snap.certificates[0].tip_visible);
}

/// Without a caption the lightbox refuses to open, but can still close.
#[test]
fn test_lightbox_without_caption() {
    let mut doc = Document::new();
    let body = doc.body();
    let root = doc.append(body, "div").id("certificate-lightbox").build();
    let image = doc.append(root, "img").class("lightbox-image").build();
    let mut s = start(doc);

    s.open_lightbox("a.png", "A");
    assert!(!s.lightbox().is_open(s.document()));
    assert_eq!(s.document().attribute(image, "src"), None);

    s.close_lightbox();
    assert_eq!(s.document().attribute(root, "aria-hidden").as_deref(), Some("true"));
    assert_eq!(s.document().attribute(image, "src").as_deref(), Some(""));
}

/// Escape only acts on an open overlay.
#[test]
fn test_escape_on_closed_overlays_is_noop() {
    let mut s = start(build_document(&PageSpec::default()));
    let before = s.snapshot();
    let outcome = s.key_down(ESCAPE);
    assert_eq!(outcome.handlers_run, 2);
    assert!(!outcome.default_prevented);
    assert_eq!(s.snapshot(), before);
}

/// A modal missing its description element never opens.
#[test]
fn test_project_modal_missing_description() {
    let mut doc = Document::new();
    let body = doc.body();
    let modal = doc.append(body, "div").id("project-modal").build();
    doc.append(modal, "h3").id("project-modal-title").build();
    let card = doc.append(body, "article").class("feature-card").build();
    doc.append(card, "h3").text("Thing").build();
    doc.append(card, "button")
        .class("project-details")
        .attr("data-project", "user-profile")
        .build();
    let mut s = start(doc);

    let details = find(&s, ".project-details");
    s.click(details);
    assert!(!s.projects().is_open(s.document()));
}

// ============================================================================
// Project Titles
// ============================================================================

fn detail_page(heading: Option<&str>, in_card: bool) -> UiSession<RecordingHost> {
    let mut doc = build_document(&PageSpec {
        projects: vec![],
        ..PageSpec::default()
    });
    let projects = doc.element_by_id("projects").unwrap();
    let parent = if in_card {
        doc.append(projects, "article").class("feature-card").build()
    } else {
        doc.append(projects, "div").build()
    };
    if let Some(h) = heading {
        doc.append(parent, "h3").text(h).build();
    }
    doc.append(parent, "button")
        .class("project-details")
        .attr("type", "button")
        .attr("data-project", "agro-mentor")
        .build();
    start(doc)
}

fn opened_title(mut s: UiSession<RecordingHost>) -> String {
    let button = find(&s, ".project-details");
    s.click(button);
    let modal = s.snapshot().project_modal.unwrap();
    assert!(modal.open);
    modal.title
}

#[test]
fn test_title_is_trimmed_heading() {
    assert_eq!(opened_title(detail_page(Some("  Agro  \n"), true)), "Agro");
}

#[test]
fn test_title_defaults_without_heading() {
    assert_eq!(opened_title(detail_page(None, true)), "Project Details");
}

#[test]
fn test_title_defaults_for_blank_heading() {
    assert_eq!(opened_title(detail_page(Some("   "), true)), "Project Details");
}

#[test]
fn test_title_defaults_outside_feature_card() {
    assert_eq!(opened_title(detail_page(Some("Loose"), false)), "Project Details");
}

#[test]
fn test_button_without_key_is_noop() {
    let spec = PageSpec {
        projects: vec![folio_core::page::ProjectCard {
            key: None,
            title: "Secret".to_string(),
            summary: String::new(),
        }],
        ..PageSpec::default()
    };
    let mut s = start(build_document(&spec));
    let details = find(&s, ".project-details");
    s.click(details);
    assert!(!s.snapshot().project_modal.unwrap().open);
}

// ============================================================================
// Certificates
// ============================================================================

/// Cards without media get neither a tip nor a lightbox listener; cards
/// with media but no image still get the tip.
#[test]
fn test_partial_certificate_cards() {
    let mut doc = build_document(&PageSpec {
        certificates: vec![],
        ..PageSpec::default()
    });
    let grid = doc.element_by_id("certificates").unwrap();
    let bare = doc.append(grid, "article").class("certificate-card").build();
    doc.append(bare, "img").class("certificate-image").build();
    let imageless = doc.append(grid, "article").class("certificate-card").build();
    let media = doc.append(imageless, "div").class("certificate-media").build();
    let mut s = start(doc);

    let outcome = s.click(media);
    assert_eq!(outcome.handlers_run, 1);
    assert!(s.document().has_class(imageless, TIP_CLASS));
    assert!(!s.lightbox().is_open(s.document()));

    s.click(bare);
    assert!(!s.document().has_class(bare, TIP_CLASS));
}

#[test]
fn test_configured_tip_duration() {
    let config = FolioConfig {
        tip_duration_ms: 250,
        ..FolioConfig::default()
    };
    let mut s = UiSession::start(
        build_document(&PageSpec::default()),
        config,
        RecordingHost::new(),
    );
    let media = find(&s, ".certificate-media");
    s.click(media);
    s.advance(Duration::from_millis(250));
    assert!(s.snapshot().certificates[0].tip_visible);
    s.advance(Duration::from_millis(1));
    assert!(!s.snapshot().certificates[0].tip_visible);
}

#[test]
fn test_year_without_footer() {
    let s = start(Document::new());
    assert!(s.snapshot().year.is_none());
    assert!(s.snapshot().sections.is_empty());
}
