//! Contact section and its local-only form.

use dioxus::prelude::*;
use folio_core::{Document, NodeId, Selector};

use super::{text_of, PageSection};
use crate::context::{use_page, PageHandle};

#[component]
pub fn ContactSection() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let email = doc
        .element_by_id("contact")
        .map(|section| text_of(doc, section, &Selector::class("contact-email")))
        .unwrap_or_default();
    let form = session.contact().form().map(|form| {
        let fields = doc
            .get(form)
            .map(|el| el.children().to_vec())
            .unwrap_or_default()
            .into_iter()
            .map(|child| form_child(page, doc, child));
        rsx! {
            form {
                id: "contact-form",
                onsubmit: move |evt: FormEvent| {
                    if page.route(|s| s.submit(form).default_prevented) {
                        evt.prevent_default();
                    }
                },
                {fields}
            }
        }
    });

    rsx! {
        PageSection { section_id: "contact",
            p { class: "contact-email", "{email}" }
            {form}
        }
    }
}

/// Render one child of the contact form. Controls are kept in sync with
/// the document value, so a reset in the session empties them on screen.
fn form_child(page: PageHandle, doc: &Document, node: NodeId) -> Element {
    let Some(el) = doc.get(node) else {
        return rsx! {};
    };
    let key = node.to_string();
    let id = el.id().unwrap_or_default().to_string();
    let name = el.attribute("name").unwrap_or_default();
    let value = el.value().to_string();
    let on_input = move |evt: FormEvent| {
        let value = evt.value();
        page.route(|s| s.set_value(node, &value));
    };

    match el.tag() {
        "label" => {
            let target = el.attribute("for").unwrap_or_default();
            let text = doc.text_content(node);
            rsx! {
                label { key: "{key}", r#for: "{target}", "{text}" }
            }
        }
        "input" => {
            let kind = el.attribute("type").unwrap_or_else(|| "text".to_string());
            rsx! {
                input {
                    key: "{key}",
                    id: "{id}",
                    name: "{name}",
                    r#type: "{kind}",
                    value: "{value}",
                    oninput: on_input,
                }
            }
        }
        "textarea" => rsx! {
            textarea {
                key: "{key}",
                id: "{id}",
                name: "{name}",
                rows: "5",
                value: "{value}",
                oninput: on_input,
            }
        },
        "button" => {
            let text = doc.text_content(node);
            rsx! {
                // Native submission raises the form's submit event
                button { key: "{key}", class: "button", r#type: "submit", "{text}" }
            }
        }
        _ => rsx! {},
    }
}
