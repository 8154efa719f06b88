//! Event dispatch.
//!
//! Listeners are named [`Handler`] values registered against an element
//! (or the document) for one [`EventKind`]. An event bubbles from its
//! target up through its ancestors and finally to the document; at each
//! stop the listeners for that kind run in registration order.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};

/// Key name reported for the Escape key.
pub const ESCAPE: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    KeyDown,
}

/// Where an event is aimed, or where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Document,
    Node(NodeId),
}

impl EventTarget {
    pub fn node(self) -> Option<NodeId> {
        match self {
            EventTarget::Document => None,
            EventTarget::Node(node) => Some(node),
        }
    }
}

/// A discrete input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    target: EventTarget,
    key: Option<String>,
    default_prevented: bool,
}

impl Event {
    pub fn click(node: NodeId) -> Self {
        Self::new(EventKind::Click, EventTarget::Node(node))
    }

    pub fn submit(form: NodeId) -> Self {
        Self::new(EventKind::Submit, EventTarget::Node(form))
    }

    /// A key press with no focused element; it is delivered to the
    /// document listeners only.
    pub fn key_down(key: &str) -> Self {
        let mut event = Self::new(EventKind::KeyDown, EventTarget::Document);
        event.key = Some(key.to_string());
        event
    }

    fn new(kind: EventKind, target: EventTarget) -> Self {
        Self {
            kind,
            target,
            key: None,
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> EventTarget {
        self.target
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn is_key(&self, key: &str) -> bool {
        self.key() == Some(key)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Named handlers the page controllers register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// In-page `#fragment` link
    AnchorNavigate,
    /// Contact form submission
    ContactSubmit,
    /// Certificate media click showing the tip on `card`
    CertificateTip { card: NodeId },
    /// Certificate media click opening `image` in the lightbox
    OpenLightbox { image: NodeId },
    LightboxBackdrop,
    LightboxClose,
    LightboxEscape,
    /// Project "details" button
    ProjectDetails,
    ProjectModalBackdrop,
    ProjectModalClose,
    ProjectModalEscape,
}

/// One listener invocation planned for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub current_target: EventTarget,
    pub handler: Handler,
}

/// Listener registry.
#[derive(Debug, Default)]
pub struct Dispatcher {
    listeners: HashMap<(EventTarget, EventKind), Vec<Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, target: EventTarget, kind: EventKind, handler: Handler) {
        self.listeners.entry((target, kind)).or_default().push(handler);
    }

    pub fn listeners(&self, target: EventTarget, kind: EventKind) -> &[Handler] {
        self.listeners
            .get(&(target, kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every listener `event` reaches, in the order they must run.
    ///
    /// The path is fixed before any handler runs, so listeners added while
    /// an event is in flight only see later events.
    pub fn route(&self, doc: &Document, event: &Event) -> Vec<Invocation> {
        let mut path = Vec::new();
        if let EventTarget::Node(node) = event.target() {
            path.push(EventTarget::Node(node));
            path.extend(doc.ancestors(node).map(EventTarget::Node));
        }
        path.push(EventTarget::Document);

        path.into_iter()
            .flat_map(|stop| {
                self.listeners(stop, event.kind())
                    .iter()
                    .map(move |handler| Invocation {
                        current_target: stop,
                        handler: *handler,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_bubbles_target_first_then_document() {
        let mut doc = Document::new();
        let body = doc.body();
        let overlay = doc.append(body, "div").build();
        let close = doc.append(overlay, "button").build();

        let mut dispatcher = Dispatcher::new();
        dispatcher.listen(EventTarget::Document, EventKind::Click, Handler::ProjectModalEscape);
        dispatcher.listen(EventTarget::Node(overlay), EventKind::Click, Handler::LightboxBackdrop);
        dispatcher.listen(EventTarget::Node(close), EventKind::Click, Handler::LightboxClose);

        let route = dispatcher.route(&doc, &Event::click(close));
        let handlers: Vec<_> = route.iter().map(|i| i.handler).collect();
        assert_eq!(
            handlers,
            vec![
                Handler::LightboxClose,
                Handler::LightboxBackdrop,
                Handler::ProjectModalEscape
            ]
        );
        assert_eq!(route[1].current_target, EventTarget::Node(overlay));
    }

    #[test]
    fn test_registration_order_preserved_per_target() {
        let mut doc = Document::new();
        let body = doc.body();
        let card = doc.append(body, "article").build();
        let media = doc.append(card, "a").build();
        let image = doc.append(media, "img").build();

        let mut dispatcher = Dispatcher::new();
        dispatcher.listen(EventTarget::Node(media), EventKind::Click, Handler::AnchorNavigate);
        dispatcher.listen(EventTarget::Node(media), EventKind::Click, Handler::CertificateTip { card });
        dispatcher.listen(EventTarget::Node(media), EventKind::Click, Handler::OpenLightbox { image });

        let handlers: Vec<_> = dispatcher
            .route(&doc, &Event::click(image))
            .into_iter()
            .map(|i| i.handler)
            .collect();
        assert_eq!(
            handlers,
            vec![
                Handler::AnchorNavigate,
                Handler::CertificateTip { card },
                Handler::OpenLightbox { image }
            ]
        );
        assert_eq!(dispatcher.len(), 3);
    }

    #[test]
    fn test_kinds_are_separate() {
        let doc = Document::new();
        let mut dispatcher = Dispatcher::new();
        dispatcher.listen(EventTarget::Document, EventKind::KeyDown, Handler::LightboxEscape);
        assert!(dispatcher.route(&doc, &Event::click(doc.body())).is_empty());
        assert_eq!(dispatcher.route(&doc, &Event::key_down(ESCAPE)).len(), 1);
    }

    #[test]
    fn test_prevent_default_is_sticky() {
        let mut event = Event::key_down("a");
        assert!(!event.default_prevented());
        event.prevent_default();
        event.prevent_default();
        assert!(event.default_prevented());
        assert!(!event.is_key(ESCAPE));
    }
}
