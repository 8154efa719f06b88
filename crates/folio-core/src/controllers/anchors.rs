//! In-page anchor navigation.

use tracing::debug;

use crate::controllers::sections::SectionVisibility;
use crate::dom::{Document, NodeId};
use crate::event::{Dispatcher, Event, EventKind, EventTarget, Handler};
use crate::host::{Host, ScrollRequest};
use crate::selector::Selector;

const NAV_REGION: &str = "nav-links";

#[derive(Debug, Clone)]
pub struct AnchorRouter {
    links: Vec<NodeId>,
    nav_region: Selector,
}

impl AnchorRouter {
    /// Listen for clicks on every link whose href starts with `#`.
    pub fn wire(doc: &Document, dispatcher: &mut Dispatcher) -> Self {
        let fragment_links = Selector::tag("a").with_attr_prefix("href", "#");
        let links = doc.query_selector_all(doc.body(), &fragment_links);
        for link in &links {
            dispatcher.listen(EventTarget::Node(*link), EventKind::Click, Handler::AnchorNavigate);
        }
        debug!(count = links.len(), "Anchor links wired");
        Self {
            links,
            nav_region: Selector::class(NAV_REGION),
        }
    }

    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    /// Route a click on `link`.
    ///
    /// Bare `#` links and links to ids that do not exist keep their default
    /// behavior. Everything else is handled here: managed targets narrow
    /// to that section, other targets reached from the navigation region
    /// reveal every section, and the target is scrolled into view.
    pub fn on_click(
        &self,
        link: NodeId,
        event: &mut Event,
        doc: &mut Document,
        sections: &SectionVisibility,
        host: &mut impl Host,
    ) {
        let Some(href) = doc.attribute(link, "href") else {
            return;
        };
        let Some(target_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return;
        };
        let Some(target) = doc.element_by_id(target_id) else {
            debug!(target_id, "Anchor target missing, leaving default");
            return;
        };

        event.prevent_default();

        if sections.is_managed(target_id) {
            sections.show_only(doc, target_id);
        } else if doc.closest(link, &self.nav_region).is_some() {
            sections.show_all(doc);
        }

        host.scroll_into_view(ScrollRequest {
            node: target,
            element_id: target_id.to_string(),
        });
    }
}
