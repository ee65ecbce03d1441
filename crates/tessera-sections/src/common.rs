//! Pieces shared by several sections.

use serde::{Deserialize, Serialize};
use tessera_core::{Element, Item, el};
use tessera_schema::FieldSchema;

/// A labelled link (navigation bar, footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

pub fn link_items_schema(title: &str) -> FieldSchema {
    FieldSchema::array(
        title,
        FieldSchema::object([
            ("label", FieldSchema::string("Label")),
            ("href", FieldSchema::string("URL")),
        ]),
    )
}

pub fn link_list(items: &[Item<'_>], class: &str) -> Element {
    el("ul").class(class).children(items.iter().map(|item| {
        el("li").child(
            el("a")
                .attr("href", item.text("href"))
                .text(item.text("label")),
        )
    }))
}

/// Centered `h2` + optional paragraph heading block.
pub fn heading(headline: &str, subtext: Option<&str>) -> Element {
    let block = el("div")
        .class("text-center mb-16")
        .child(
            el("h2")
                .class("font-nunito font-bold text-3xl md:text-5xl text-white")
                .text(headline),
        );
    match subtext {
        Some(subtext) => {
            block.child(el("p").class("font-lato text-zinc-400 text-lg").text(subtext))
        }
        None => block,
    }
}
