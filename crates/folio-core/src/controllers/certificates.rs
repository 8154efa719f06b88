//! Certificate cards: the click tip and the full-size lightbox.
//!
//! A click on a card's media shows its tip for a fixed window and, when
//! the page has a lightbox, also opens the full image. The two behaviors
//! are separate listeners on the same element; the tip listener is
//! registered first.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::dom::{Document, NodeId};
use crate::event::{Dispatcher, Event, EventKind, EventTarget, Handler, ESCAPE};
use crate::selector::Selector;
use crate::timer::{TimerHandle, TimerQueue, TimerTask};

pub const TIP_CLASS: &str = "show-tip";
pub const OPEN_CLASS: &str = "is-open";
pub const LIGHTBOX_ID: &str = "certificate-lightbox";

/// One certificate card and its optional parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateCard {
    pub card: NodeId,
    pub media: Option<NodeId>,
    pub image: Option<NodeId>,
}

/// Find every `.certificate-card` with its media and image.
pub fn find_cards(doc: &Document) -> Vec<CertificateCard> {
    let media = Selector::class("certificate-media");
    let image = Selector::class("certificate-image");
    doc.query_selector_all(doc.body(), &Selector::class("certificate-card"))
        .into_iter()
        .map(|card| CertificateCard {
            card,
            media: doc.query_selector(card, &media),
            image: doc.query_selector(card, &image),
        })
        .collect()
}

/// Per-card tip state. At most one hide timer is pending per card.
#[derive(Debug, Clone)]
pub struct CertificateTips {
    duration: Duration,
    timers: HashMap<NodeId, TimerHandle>,
}

impl CertificateTips {
    pub fn wire(cards: &[CertificateCard], dispatcher: &mut Dispatcher, duration: Duration) -> Self {
        for cert in cards {
            let Some(media) = cert.media else {
                warn!(card = %cert.card, "Certificate card has no media, tip disabled");
                continue;
            };
            dispatcher.listen(
                EventTarget::Node(media),
                EventKind::Click,
                Handler::CertificateTip { card: cert.card },
            );
        }
        Self {
            duration,
            timers: HashMap::new(),
        }
    }

    /// Show the tip on `card`, restarting its hide timer.
    pub fn on_media_click(
        &mut self,
        card: NodeId,
        event: &mut Event,
        doc: &mut Document,
        timers: &mut TimerQueue,
    ) {
        event.prevent_default();
        doc.add_class(card, TIP_CLASS);

        if let Some(existing) = self.timers.remove(&card) {
            timers.cancel(existing);
        }
        let handle = timers.schedule(self.duration, TimerTask::HideTip { card });
        self.timers.insert(card, handle);
        debug!(%card, deadline = ?handle.deadline(), "Tip shown");
    }

    /// Hide timer for `card` fired.
    pub fn on_timer(&mut self, card: NodeId, doc: &mut Document) {
        doc.remove_class(card, TIP_CLASS);
        self.timers.remove(&card);
        debug!(%card, "Tip expired");
    }

    pub fn pending(&self, card: NodeId) -> Option<TimerHandle> {
        self.timers.get(&card).copied()
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }
}

/// Singleton image overlay.
#[derive(Debug, Clone)]
pub struct Lightbox {
    root: Option<NodeId>,
    image: Option<NodeId>,
    caption: Option<NodeId>,
    close: Option<NodeId>,
    default_caption: String,
}

impl Lightbox {
    /// Resolve the lightbox and, if it exists, wire the card media, the
    /// backdrop, the close control and Escape.
    pub fn wire(
        doc: &Document,
        dispatcher: &mut Dispatcher,
        cards: &[CertificateCard],
        default_caption: &str,
    ) -> Self {
        let root = doc.element_by_id(LIGHTBOX_ID);
        let find = |class: &str| root.and_then(|r| doc.query_selector(r, &Selector::class(class)));
        let lightbox = Self {
            root,
            image: find("lightbox-image"),
            caption: find("lightbox-caption"),
            close: find("lightbox-close"),
            default_caption: default_caption.to_string(),
        };

        let Some(root) = root else {
            debug!("No lightbox on page");
            return lightbox;
        };

        for cert in cards {
            let (Some(media), Some(image)) = (cert.media, cert.image) else {
                continue;
            };
            dispatcher.listen(
                EventTarget::Node(media),
                EventKind::Click,
                Handler::OpenLightbox { image },
            );
        }
        dispatcher.listen(EventTarget::Node(root), EventKind::Click, Handler::LightboxBackdrop);
        if let Some(close) = lightbox.close {
            dispatcher.listen(EventTarget::Node(close), EventKind::Click, Handler::LightboxClose);
        }
        dispatcher.listen(EventTarget::Document, EventKind::KeyDown, Handler::LightboxEscape);

        lightbox
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn image(&self) -> Option<NodeId> {
        self.image
    }

    pub fn caption(&self) -> Option<NodeId> {
        self.caption
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        self.root.is_some_and(|r| doc.has_class(r, OPEN_CLASS))
    }

    pub fn open(&self, doc: &mut Document, src: &str, alt: &str) {
        let (Some(root), Some(image), Some(caption)) = (self.root, self.image, self.caption) else {
            return;
        };
        doc.set_attribute(image, "src", src);
        doc.set_attribute(image, "alt", alt);
        let caption_text = if alt.is_empty() {
            self.default_caption.as_str()
        } else {
            alt
        };
        doc.set_text_content(caption, caption_text);
        doc.add_class(root, OPEN_CLASS);
        doc.set_attribute(root, "aria-hidden", "false");
        debug!(src, "Lightbox opened");
    }

    pub fn close(&self, doc: &mut Document) {
        let (Some(root), Some(image)) = (self.root, self.image) else {
            return;
        };
        doc.remove_class(root, OPEN_CLASS);
        doc.set_attribute(root, "aria-hidden", "true");
        doc.set_attribute(image, "src", "");
        doc.set_attribute(image, "alt", "");
        if let Some(caption) = self.caption {
            doc.set_text_content(caption, "");
        }
        debug!("Lightbox closed");
    }

    /// Open with the card image's own source and alt text.
    pub fn on_media_click(&self, image: NodeId, doc: &mut Document) {
        let src = doc.attribute(image, "src").unwrap_or_default();
        let alt = doc.attribute(image, "alt").unwrap_or_default();
        self.open(doc, &src, &alt);
    }

    /// Only clicks landing on the backdrop itself close; clicks inside the
    /// content bubble up here too and are ignored.
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
