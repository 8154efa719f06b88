//! UI Components for Folio.
//!
//! Every component renders straight from the session's document, so
//! classes, visibility and text always reflect what the controllers last
//! did. Interactions go back through [`PageHandle::route`].

mod certificates;
mod contact;
mod footer;
mod header;
mod projects;
mod sections;

pub use certificates::{CertificateLightbox, CertificatesSection};
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use header::{FragmentLink, SiteHeader};
pub use projects::{ProjectModal, ProjectsSection};
pub use sections::{AboutSection, PageSection, SkillsSection};

use dioxus::prelude::*;
use folio_core::{Document, Host, NodeId, Selector, UiSession};

use crate::context::PageHandle;

/// Space-separated class list of `node`, as the controllers left it.
fn class_list(doc: &Document, node: NodeId) -> String {
    doc.get(node)
        .map(|el| el.classes().join(" "))
        .unwrap_or_default()
}

/// Text of the first match of `selector` under `scope`.
fn text_of(doc: &Document, scope: NodeId, selector: &Selector) -> String {
    doc.query_selector(scope, selector)
        .map(|node| doc.text_content(node))
        .unwrap_or_default()
}

/// Click `node` in the session. Returns whether a handler suppressed the
/// default action, which the webview must then suppress too.
fn click_prevents_default<H: Host>(session: &mut UiSession<H>, node: NodeId) -> bool {
    session.click(node).default_prevented
}

/// Click handler that hands the click to the session as a click on
/// `node`. The session does its own bubbling, so the webview event stops
/// here; its default action runs unless a session handler prevented it.
fn route_click(page: PageHandle, node: NodeId) -> impl FnMut(MouseEvent) + 'static {
    move |evt: MouseEvent| {
        evt.stop_propagation();
        if page.route(|s| click_prevents_default(s, node)) {
            evt.prevent_default();
        }
    }
}
