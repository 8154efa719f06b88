//! Site header: brand, navigation and call to action.

use dioxus::prelude::*;
use folio_core::{NodeId, Selector};

use super::{class_list, route_click, text_of};
use crate::context::use_page;

/// An in-page `#fragment` link backed by a document anchor.
#[component]
pub fn FragmentLink(node: NodeId) -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let href = doc.attribute(node, "href").unwrap_or_default();
    let class = class_list(doc, node);
    let label = doc.text_content(node);

    rsx! {
        a { class: "{class}", href: "{href}", onclick: route_click(page, node), "{label}" }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let page = use_page();
    let session = page.session.read();
    let doc = session.document();

    let Some(header) = doc.element_by_id("top") else {
        return rsx! {};
    };
    let brand = doc.query_selector(header, &Selector::class("brand"));
    let links = doc
        .query_selector(header, &Selector::class("nav-links"))
        .map(|list| doc.query_selector_all(list, &Selector::tag("a")))
        .unwrap_or_default();
    let tagline = text_of(doc, header, &Selector::class("tagline"));
    let cta = doc.query_selector(header, &Selector::class("cta"));
    let header_class = class_list(doc, header);

    rsx! {
        header { id: "top", class: "{header_class}",
            {brand.map(|node| rsx! { FragmentLink { node } })}
            nav { class: "site-nav",
                ul { class: "nav-links",
                    for link in links {
                        li { key: "{link}", FragmentLink { node: link } }
                    }
                }
            }
            p { class: "tagline", "{tagline}" }
            {cta.map(|node| rsx! { FragmentLink { node } })}
        }
    }
}
