//! Property-based tests for the page session
//!
//! Uses proptest to drive random interaction sequences and check the
//! invariants that must hold after every step.

use std::collections::HashMap;
use std::time::Duration;

use folio_core::config::MANAGED_SECTION_IDS;
use folio_core::controllers::certificates::{find_cards, TIP_CLASS};
use folio_core::{build_document, FolioConfig, PageSpec, RecordingHost, Selector, UiSession, ESCAPE};
use proptest::prelude::*;

const TIP_MS: u64 = 1600;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Interactions a visitor can make
#[derive(Debug, Clone)]
enum Op {
    NavClick(usize), // Index into the nav links
    CardClick(usize), // Index into the certificate cards
    Advance(u64),
    Escape,
    Details(usize), // Index into the detail buttons
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..6usize).prop_map(Op::NavClick),
            3 => (0..2usize).prop_map(Op::CardClick),
            3 => (0..2500u64).prop_map(Op::Advance),
            1 => Just(Op::Escape),
            1 => (0..2usize).prop_map(Op::Details),
        ],
        0..max_ops,
    )
}

fn session() -> UiSession<RecordingHost> {
    UiSession::start(
        build_document(&PageSpec::default()),
        FolioConfig::default(),
        RecordingHost::with_year(2026),
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Sections are either all visible or exactly one is, and the one is
    /// the last managed target clicked.
    #[test]
    fn sections_focused_or_overview(ops in ops_strategy(40)) {
        let mut s = session();
        let nav_links = s.document().query_selector_all(
            s.document().body(),
            &Selector::parse(".nav-links a").unwrap(),
        );
        let mut expected: Option<String> = None;

        for op in &ops {
            if let Op::NavClick(i) = op {
                let link = nav_links[*i];
                s.click(link);
                let href = s.document().attribute(link, "href").unwrap();
                let target = href.trim_start_matches('#');
                expected = MANAGED_SECTION_IDS
                    .contains(&target)
                    .then(|| target.to_string());
            }
        }

        let snapshot = s.snapshot();
        let visible = snapshot.visible_sections().len();
        match expected {
            Some(id) => prop_assert_eq!(snapshot.visible_sections(), vec![id.as_str()]),
            None => prop_assert_eq!(visible, MANAGED_SECTION_IDS.len()),
        }
    }

    /// A tip is visible exactly while its card has a pending timer, through
    /// the instant 1600 ms after the card's latest click.
    #[test]
    fn tip_visible_iff_timer_pending(ops in ops_strategy(60)) {
        let mut s = session();
        let cards = find_cards(s.document());
        let mut last_click: HashMap<usize, Duration> = HashMap::new();

        for op in &ops {
            match op {
                Op::CardClick(i) => {
                    s.click(cards[*i].media.unwrap());
                    last_click.insert(*i, s.now());
                }
                Op::Advance(ms) => s.advance(Duration::from_millis(*ms)),
                Op::Escape => {
                    s.key_down(ESCAPE);
                }
                Op::NavClick(_) | Op::Details(_) => {}
            }

            prop_assert!(s.tips().pending_count() <= cards.len());
            for (i, cert) in cards.iter().enumerate() {
                let visible = s.document().has_class(cert.card, TIP_CLASS);
                let pending = s.tips().pending(cert.card);
                prop_assert_eq!(visible, pending.is_some());

                let should_show = last_click
                    .get(&i)
                    .is_some_and(|at| s.now() <= *at + Duration::from_millis(TIP_MS));
                prop_assert_eq!(visible, should_show);
                if let (Some(handle), Some(at)) = (pending, last_click.get(&i)) {
                    prop_assert_eq!(handle.deadline(), *at + Duration::from_millis(TIP_MS));
                }
            }
        }
    }

    /// Escape always leaves both overlays closed.
    #[test]
    fn escape_closes_everything(ops in ops_strategy(30)) {
        let mut s = session();
        let cards = find_cards(s.document());
        let buttons = s.document().query_selector_all(
            s.document().body(),
            &Selector::class("project-details"),
        );

        for op in &ops {
            match op {
                Op::CardClick(i) => { s.click(cards[*i].media.unwrap()); }
                Op::Details(i) => { s.click(buttons[*i]); }
                Op::Advance(ms) => s.advance(Duration::from_millis(*ms)),
                Op::Escape | Op::NavClick(_) => {}
            }
        }

        s.key_down(ESCAPE);
        let snap = s.snapshot();
        prop_assert!(!snap.lightbox.unwrap().open);
        prop_assert!(!snap.project_modal.unwrap().open);
    }
}
