use dioxus::prelude::*;
use folio_core::{NodeId, Selector};

use super::FragmentLink;
use crate::context::use_page;

/// Footer with the stamped year and a back-to-top link.
#[component]
pub fn SiteFooter() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let Some(footer) = doc.query_selector(doc.body(), &Selector::tag("footer")) else {
        return rsx! {};
    };
    let spans: Vec<(NodeId, Option<String>, String)> = doc
        .query_selector_all(footer, &Selector::tag("span"))
        .into_iter()
        .map(|span| {
            let id = doc.get(span).and_then(|el| el.id()).map(str::to_string);
            (span, id, doc.text_content(span))
        })
        .collect();
    let back_to_top = doc.query_selector(footer, &Selector::class("back-to-top"));

    rsx! {
        footer { class: "site-footer",
            p {
                for (node, id, text) in spans {
                    span { key: "{node}", id: id, "{text}" }
                }
            }
            {back_to_top.map(|node| rsx! { FragmentLink { node } })}
        }
    }
}
