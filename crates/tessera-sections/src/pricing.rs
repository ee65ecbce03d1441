//! Single centered pricing card.

use serde::{Deserialize, Serialize};
use tessera_core::{Icon, PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldKind, FieldSchema, Properties};

use crate::common::heading;

pub struct PricingSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingProps {
    pub headline: String,
    pub subtext: String,
    pub plan_name: String,
    pub price: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

impl Default for PricingProps {
    fn default() -> Self {
        Self {
            headline: "Unlock Premium Features.".into(),
            subtext: "Free to match + premium features.".into(),
            plan_name: "MatchMe Premium".into(),
            price: "$19.99/month".into(),
            features: vec![
                "Unlimited Swipes".into(),
                "Advanced Filters".into(),
                "See Who Likes You".into(),
            ],
            cta_text: "Find Matches".into(),
            cta_link: "#cta".into(),
        }
    }
}

impl Component for PricingSection {
    type Props = PricingProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "pricing-section",
            "Pricing Card",
            "Single centered pricing card",
            "Content",
        )
    }

    fn properties() -> Properties {
        [
            ("headline", FieldSchema::string("Headline")),
            ("subtext", FieldSchema::string("Subtext")),
            ("planName", FieldSchema::string("Plan Name")),
            ("price", FieldSchema::string("Price")),
            (
                "features",
                FieldSchema::array("Features", FieldSchema::untitled(FieldKind::String)),
            ),
            ("ctaText", FieldSchema::string("CTA Text")),
            ("ctaLink", FieldSchema::string("CTA Link")),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        let features = props.strings("features").into_iter().map(|feature| {
            el("li")
                .class("flex items-center gap-3 text-zinc-300")
                .child(Icon::Check.render(20))
                .text(feature)
        });

        el("section")
            .id("pricing")
            .class("relative w-full py-24 md:py-32 bg-[#18181B]")
            .child(
                el("div")
                    .class("max-w-md mx-auto px-6")
                    .child(heading(props.text("headline"), Some(props.text("subtext"))))
                    .child(
                        el("div")
                            .class("rounded-3xl bg-[#222225] p-10 border border-[#EC4899]/30")
                            .child(
                                el("h3")
                                    .class("font-nunito font-bold text-2xl text-white")
                                    .text(props.text("planName")),
                            )
                            .child(
                                el("p")
                                    .class("text-4xl font-extrabold text-white mt-4")
                                    .text(props.text("price")),
                            )
                            .child(el("ul").class("mt-8 space-y-4").children(features))
                            .child(
                                el("a")
                                    .attr("href", props.text("ctaLink"))
                                    .class(
                                        "block mt-10 rounded-full bg-[#EC4899] py-4 text-center \
                                         text-white font-bold",
                                    )
                                    .text(props.text("ctaText")),
                            ),
                    ),
            )
            .into()
    }
}
