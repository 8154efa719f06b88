//! Project cards and the project details modal.

use dioxus::prelude::*;
use folio_core::controllers::projects::{MODAL_DESCRIPTION_ID, MODAL_ID, MODAL_TITLE_ID};
use folio_core::{NodeId, Selector};

use super::{class_list, route_click, text_of, PageSection};
use crate::context::use_page;

#[component]
pub fn ProjectsSection() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let cards: Vec<(String, NodeId)> = doc
        .element_by_id("projects")
        .map(|section| doc.query_selector_all(section, &Selector::class("feature-card")))
        .unwrap_or_default()
        .into_iter()
        .map(|card| (card.to_string(), card))
        .collect();

    rsx! {
        PageSection { section_id: "projects",
            div { class: "feature-grid",
                for (key, card) in cards {
                    ProjectCardView { key: "{key}", card }
                }
            }
        }
    }
}

#[component]
fn ProjectCardView(card: NodeId) -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let title = text_of(doc, card, &Selector::tag("h3"));
    let summary = text_of(doc, card, &Selector::tag("p"));
    let details = doc
        .query_selector(card, &Selector::class("project-details"))
        .map(|button| {
            let label = doc.text_content(button);
            let key = doc.attribute(button, "data-project").unwrap_or_default();
            rsx! {
                button {
                    class: "project-details",
                    r#type: "button",
                    "data-project": "{key}",
                    onclick: route_click(page, button),
                    "{label}"
                }
            }
        });

    rsx! {
        article { class: "feature-card",
            h3 { "{title}" }
            p { "{summary}" }
            {details}
        }
    }
}

/// Project details overlay. Renders nothing if the page has none.
#[component]
pub fn ProjectModal() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let Some(root) = session.projects().root() else {
        return rsx! {};
    };
    let root_class = class_list(doc, root);
    let aria_hidden = doc.attribute(root, "aria-hidden").unwrap_or_default();
    let title = doc
        .element_by_id(MODAL_TITLE_ID)
        .map(|node| doc.text_content(node))
        .unwrap_or_default();
    let description = doc
        .element_by_id(MODAL_DESCRIPTION_ID)
        .map(|node| doc.text_content(node))
        .unwrap_or_default();

    let close_button = doc
        .query_selector(root, &Selector::class("project-modal-close"))
        .map(|node| {
            let label = doc.text_content(node);
            rsx! {
                button {
                    class: "project-modal-close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: route_click(page, node),
                    "{label}"
                }
            }
        });
    let parts = rsx! {
        {close_button}
        h3 { id: MODAL_TITLE_ID, "{title}" }
        p { id: MODAL_DESCRIPTION_ID, "{description}" }
    };
    let body = match doc.query_selector(root, &Selector::class("project-modal-content")) {
        Some(content) => rsx! {
            div { class: "project-modal-content", onclick: route_click(page, content), {parts} }
        },
        None => parts,
    };

    rsx! {
        div {
            id: MODAL_ID,
            class: "{root_class}",
            "role": "dialog",
            "aria-hidden": "{aria_hidden}",
            onclick: route_click(page, root),
            {body}
        }
    }
}
