//! Standard footer with logo and links.

use serde::{Deserialize, Serialize};
use tessera_core::{PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

use crate::common::{LinkItem, link_items_schema, link_list};

pub struct FooterSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterProps {
    pub logo_text: String,
    pub copyright: String,
    pub links: Vec<LinkItem>,
}

impl Default for FooterProps {
    fn default() -> Self {
        Self {
            logo_text: "MatchMe".into(),
            copyright: "© 2024 MatchMe Inc. All rights reserved.".into(),
            links: vec![
                LinkItem::new("Privacy Policy", "#"),
                LinkItem::new("Terms of Service", "#"),
            ],
        }
    }
}

impl Component for FooterSection {
    type Props = FooterProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "footer-section",
            "Footer",
            "Standard footer with logo and links",
            "Navigation",
        )
    }

    fn properties() -> Properties {
        [
            ("logoText", FieldSchema::string("Logo Text")),
            ("copyright", FieldSchema::string("Copyright Text")),
            ("links", link_items_schema("Footer Links")),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        el("footer")
            .class("w-full py-12 border-t border-zinc-800 bg-[#18181B]")
            .child(
                el("div")
                    .class(
                        "max-w-6xl mx-auto px-6 flex flex-col md:flex-row items-center \
                         justify-between gap-6",
                    )
                    .child(
                        el("span")
                            .class("font-nunito font-extrabold text-xl text-white")
                            .text(props.text("logoText")),
                    )
                    .child(link_list(&props.items("links"), "flex gap-6 text-sm text-zinc-400"))
                    .child(el("p").class("text-sm text-zinc-500").text(props.text("copyright"))),
            )
            .into()
    }
}
