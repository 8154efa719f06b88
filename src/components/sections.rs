//! Tab-like page sections.

use dioxus::prelude::*;
use folio_core::Selector;

use super::{class_list, text_of};
use crate::context::use_page;

/// A managed `<section>`: hidden whenever another section has focus.
#[component]
pub fn PageSection(section_id: String, children: Element) -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let Some(node) = doc.element_by_id(&section_id) else {
        return rsx! {};
    };
    let heading = text_of(doc, node, &Selector::tag("h2"));
    let class = class_list(doc, node);
    let hidden = doc.is_hidden(node);

    rsx! {
        section {
            id: "{section_id}",
            class: "{class}",
            hidden: hidden,
            h2 { "{heading}" }
            {children}
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let paragraphs: Vec<String> = doc
        .element_by_id("about")
        .map(|about| {
            doc.query_selector_all(about, &Selector::tag("p"))
                .into_iter()
                .map(|p| doc.text_content(p))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        PageSection { section_id: "about",
            for (i, text) in paragraphs.into_iter().enumerate() {
                p { key: "{i}", "{text}" }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let skills: Vec<String> = doc
        .element_by_id("skills")
        .map(|section| {
            doc.query_selector_all(section, &Selector::class("skill"))
                .into_iter()
                .map(|li| doc.text_content(li))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        PageSection { section_id: "skills",
            ul { class: "skill-list",
                for skill in skills {
                    li { key: "{skill}", class: "skill", "{skill}" }
                }
            }
        }
    }
}
