//! Project details modal.

use tracing::debug;

use crate::config::ProjectCatalog;
use crate::controllers::certificates::OPEN_CLASS;
use crate::dom::{Document, NodeId};
use crate::event::{Dispatcher, Event, EventKind, EventTarget, Handler, ESCAPE};
use crate::selector::Selector;

pub const MODAL_ID: &str = "project-modal";
pub const MODAL_TITLE_ID: &str = "project-modal-title";
pub const MODAL_DESCRIPTION_ID: &str = "project-modal-description";
pub const PROJECT_KEY_ATTR: &str = "data-project";

#[derive(Debug, Clone)]
pub struct ProjectModal {
    root: Option<NodeId>,
    title: Option<NodeId>,
    description: Option<NodeId>,
    close: Option<NodeId>,
    catalog: ProjectCatalog,
    default_title: String,
    feature_card: Selector,
    heading: Selector,
}

impl ProjectModal {
    pub fn wire(
        doc: &Document,
        dispatcher: &mut Dispatcher,
        catalog: &ProjectCatalog,
        default_title: &str,
    ) -> Self {
        let root = doc.element_by_id(MODAL_ID);
        let modal = Self {
            root,
            title: doc.element_by_id(MODAL_TITLE_ID),
            description: doc.element_by_id(MODAL_DESCRIPTION_ID),
            close: root.and_then(|r| doc.query_selector(r, &Selector::class("project-modal-close"))),
            catalog: catalog.clone(),
            default_title: default_title.to_string(),
            feature_card: Selector::class("feature-card"),
            heading: Selector::tag("h3"),
        };

        // Detail buttons are wired even without a modal; opening is then a no-op.
        let buttons = doc.query_selector_all(doc.body(), &Selector::class("project-details"));
        for button in &buttons {
            dispatcher.listen(EventTarget::Node(*button), EventKind::Click, Handler::ProjectDetails);
        }
        debug!(buttons = buttons.len(), "Project detail buttons wired");

        if let Some(root) = root {
            dispatcher.listen(EventTarget::Node(root), EventKind::Click, Handler::ProjectModalBackdrop);
            if let Some(close) = modal.close {
                dispatcher.listen(EventTarget::Node(close), EventKind::Click, Handler::ProjectModalClose);
            }
            dispatcher.listen(EventTarget::Document, EventKind::KeyDown, Handler::ProjectModalEscape);
        }

        modal
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        self.root.is_some_and(|r| doc.has_class(r, OPEN_CLASS))
    }

    pub fn open(&self, doc: &mut Document, title: &str, description: &str) {
        let (Some(root), Some(title_el), Some(description_el)) =
            (self.root, self.title, self.description)
        else {
            return;
        };
        doc.set_text_content(title_el, title);
        doc.set_text_content(description_el, description);
        doc.add_class(root, OPEN_CLASS);
        doc.set_attribute(root, "aria-hidden", "false");
        debug!(title, "Project modal opened");
    }

    /// Hide the modal. Title and description are left in place.
    pub fn close(&self, doc: &mut Document) {
        let Some(root) = self.root else {
            return;
        };
        doc.remove_class(root, OPEN_CLASS);
        doc.set_attribute(root, "aria-hidden", "true");
        debug!("Project modal closed");
    }

    /// Title shown for a details button: the trimmed text of the first
    /// `h3` in its feature card, or the default title.
    pub fn title_for(&self, doc: &Document, button: NodeId) -> String {
        doc.closest(button, &self.feature_card)
            .and_then(|card| doc.query_selector(card, &self.heading))
            .map(|h| doc.text_content(h).trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.default_title.clone())
    }

    pub fn on_details_click(&self, button: NodeId, doc: &mut Document) {
        let Some(key) = doc.attribute(button, PROJECT_KEY_ATTR) else {
            return;
        };
        let Some(description) = self.catalog.get(&key) else {
            debug!(%key, "Unknown project key");
            return;
        };
        let title = self.title_for(doc, button);
        self.open(doc, &title, description);
    }

    pub fn on_backdrop_click(&self, event: &Event, doc: &mut Document) {
        if self.root.is_some() && event.target().node() == self.root {
            self.close(doc);
        }
    }

    pub fn on_key_down(&self, event: &Event, doc: &mut Document) {
        if event.is_key(ESCAPE) && self.is_open(doc) {
            self.close(doc);
        }
    }
}
