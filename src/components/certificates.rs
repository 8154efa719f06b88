//! Certificate cards with their copy tip, and the full-size lightbox.

use dioxus::prelude::*;
use folio_core::controllers::certificates::{find_cards, CertificateCard};
use folio_core::{Document, NodeId, Selector};

use super::{class_list, route_click, text_of, PageSection};
use crate::context::{use_page, PageHandle};

#[component]
pub fn CertificatesSection() -> Element {
    let page = use_page();
    let cards: Vec<(String, CertificateCard)> = find_cards(page.session.read().document())
        .into_iter()
        .map(|cert| (cert.card.to_string(), cert))
        .collect();

    rsx! {
        PageSection { section_id: "certificates",
            div { class: "certificate-grid",
                for (key, cert) in cards {
                    CertificateCardView { key: "{key}", cert }
                }
            }
        }
    }
}

/// An `<img>` mirroring a document image. Clicks bubble through the
/// session, not the webview.
fn image_view(page: PageHandle, doc: &Document, node: NodeId) -> Element {
    let class = class_list(doc, node);
    let src = doc.attribute(node, "src").unwrap_or_default();
    let alt = doc.attribute(node, "alt").unwrap_or_default();
    rsx! {
        img { class: "{class}", src: "{src}", alt: "{alt}", onclick: route_click(page, node) }
    }
}

/// One card. The tip shows while the controllers keep `show-tip` on it.
#[component]
fn CertificateCardView(cert: CertificateCard) -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let card_class = class_list(doc, cert.card);
    let title = text_of(doc, cert.card, &Selector::tag("h3"));
    let issuer = text_of(doc, cert.card, &Selector::class("issuer"));
    let tip = text_of(doc, cert.card, &Selector::class("certificate-tip"));

    let media = cert.media.map(|media| {
        let media_class = class_list(doc, media);
        let image = cert.image.map(|node| image_view(page, doc, node));
        rsx! {
            a { class: "{media_class}", href: "#", onclick: route_click(page, media), {image} }
        }
    });

    rsx! {
        article { class: "{card_class}",
            {media}
            span { class: "certificate-tip", "{tip}" }
            h3 { "{title}" }
            p { class: "issuer", "{issuer}" }
        }
    }
}

/// Full-size certificate overlay. Renders nothing if the page has none.
#[component]
pub fn CertificateLightbox() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();
    let lightbox = session.lightbox();

    let Some(root) = lightbox.root() else {
        return rsx! {};
    };
    let root_class = class_list(doc, root);
    let aria_hidden = doc.attribute(root, "aria-hidden").unwrap_or_default();

    let close_button = doc
        .query_selector(root, &Selector::class("lightbox-close"))
        .map(|node| {
            let class = class_list(doc, node);
            let label = doc.text_content(node);
            rsx! {
                button {
                    class: "{class}",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: route_click(page, node),
                    "{label}"
                }
            }
        });
    let image = lightbox.image().map(|node| image_view(page, doc, node));
    let caption = lightbox.caption().map(|node| {
        let class = class_list(doc, node);
        let text = doc.text_content(node);
        rsx! {
            p { class: "{class}", "{text}" }
        }
    });
    let parts = rsx! {
        {close_button}
        {image}
        {caption}
    };
    let body = match doc.query_selector(root, &Selector::class("lightbox-content")) {
        Some(content) => rsx! {
            div { class: "lightbox-content", onclick: route_click(page, content), {parts} }
        },
        None => parts,
    };

    rsx! {
        div {
            id: "certificate-lightbox",
            class: "{root_class}",
            "role": "dialog",
            "aria-hidden": "{aria_hidden}",
            onclick: route_click(page, root),
            {body}
        }
    }
}
