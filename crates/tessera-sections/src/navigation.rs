//! Sticky navigation bar.

use serde::{Deserialize, Serialize};
use tessera_core::{Icon, PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

use crate::common::{LinkItem, link_items_schema, link_list};

pub struct NavigationSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationProps {
    pub logo_text: String,
    pub links: Vec<LinkItem>,
    pub cta_text: String,
    pub cta_link: String,
}

impl Default for NavigationProps {
    fn default() -> Self {
        Self {
            logo_text: "MatchMe".into(),
            links: vec![
                LinkItem::new("Benefits", "#benefits"),
                LinkItem::new("Features", "#features"),
                LinkItem::new("Pricing", "#pricing"),
            ],
            cta_text: "Find Matches".into(),
            cta_link: "#cta".into(),
        }
    }
}

impl Component for NavigationSection {
    type Props = NavigationProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "navigation-section",
            "Navigation Bar",
            "Sticky navigation bar with logo, links, and CTA",
            "Navigation",
        )
    }

    fn properties() -> Properties {
        [
            ("logoText", FieldSchema::string("Logo Text")),
            ("links", link_items_schema("Navigation Links")),
            ("ctaText", FieldSchema::string("CTA Text")),
            (
                "ctaLink",
                FieldSchema::string("CTA Link").with_placeholder("Enter URL or anchor ID"),
            ),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        el("nav")
            .id("navigation")
            .class("fixed top-0 inset-x-0 z-50 backdrop-blur-md")
            .child(
                el("div")
                    .class("max-w-6xl mx-auto px-6 h-20 flex items-center justify-between")
                    .child(
                        el("a")
                            .attr("href", "#")
                            .class("font-nunito font-extrabold text-2xl text-white")
                            .text(props.text("logoText")),
                    )
                    .child(link_list(
                        &props.items("links"),
                        "hidden md:flex items-center gap-8",
                    ))
                    .child(
                        el("a")
                            .attr("href", props.text("ctaLink"))
                            .class(
                                "hidden md:inline-flex rounded-full bg-[#EC4899] px-6 py-2.5 \
                                 text-white",
                            )
                            .text(props.text("ctaText")),
                    )
                    .child(
                        el("button")
                            .class("md:hidden text-white")
                            .attr("aria-label", "Toggle menu")
                            .attr("aria-expanded", "false")
                            .child(Icon::Menu.render(24)),
                    ),
            )
            .into()
    }
}
