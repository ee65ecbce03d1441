//! Alternating feature blocks, each with an optional call to action.

use serde::{Deserialize, Serialize};
use tessera_core::{PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

use crate::common::heading;

pub struct FeaturesSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub has_cta: bool,
    pub cta_text: String,
    pub cta_link: String,
}

impl FeatureItem {
    fn plain(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            has_cta: false,
            cta_text: String::new(),
            cta_link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesProps {
    pub headline: String,
    pub features: Vec<FeatureItem>,
}

impl Default for FeaturesProps {
    fn default() -> Self {
        Self {
            headline: "Compatibility Engineered for Romance.".into(),
            features: vec![
                FeatureItem {
                    has_cta: true,
                    cta_text: "Take Quiz".into(),
                    cta_link: "#quiz".into(),
                    ..FeatureItem::plain(
                        "Compatibility Quiz",
                        "Our scientifically-backed quiz dives deep into your personality, values, \
                         and relationship goals to find your true equal.",
                    )
                },
                FeatureItem::plain(
                    "Video Profiles",
                    "See the real person behind the profile with 30-second video intros that \
                     capture personality better than photos ever could.",
                ),
                FeatureItem::plain(
                    "In-app Messaging",
                    "Secure, private, and intuitive messaging keeps your conversation flowing \
                     without sharing personal contact details too soon.",
                ),
                FeatureItem::plain(
                    "Safety Features",
                    "From photo verification to advanced reporting tools, we've built a \
                     fortress around your dating experience.",
                ),
            ],
        }
    }
}

impl Component for FeaturesSection {
    type Props = FeaturesProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "features-section",
            "Features Serpentine",
            "Alternating feature blocks with text and mock visuals",
            "Content",
        )
    }

    fn properties() -> Properties {
        [
            ("headline", FieldSchema::string("Headline")),
            (
                "features",
                FieldSchema::array(
                    "Features",
                    FieldSchema::object([
                        ("title", FieldSchema::string("Title")),
                        ("description", FieldSchema::string("Description")),
                        ("hasCta", FieldSchema::boolean("Show CTA?")),
                        ("ctaText", FieldSchema::string("CTA Text")),
                        ("ctaLink", FieldSchema::string("CTA Link")),
                    ]),
                ),
            ),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        let blocks = props
            .items("features")
            .into_iter()
            .enumerate()
            .map(|(idx, feature)| {
                let direction = if idx % 2 == 1 { "md:flex-row-reverse" } else { "md:flex-row" };
                let mut copy = el("div")
                    .class("flex-1")
                    .child(
                        el("h3")
                            .class("font-nunito font-bold text-2xl md:text-3xl text-white mb-4")
                            .text(feature.text("title")),
                    )
                    .child(
                        el("p")
                            .class("font-lato text-zinc-400 text-lg")
                            .text(feature.text("description")),
                    );
                if feature.flag("hasCta") && !feature.text("ctaText").is_empty() {
                    copy = copy.child(
                        el("a")
                            .attr("href", feature.text("ctaLink"))
                            .class("inline-flex mt-6 text-[#F97316] font-bold")
                            .text(feature.text("ctaText")),
                    );
                }
                el("div")
                    .class(&format!("flex flex-col {direction} items-center gap-12"))
                    .child(copy)
                    .child(
                        el("div")
                            .class("flex-1 aspect-video rounded-2xl bg-[#222225]")
                            .attr("aria-hidden", "true"),
                    )
            });

        el("section")
            .id("features")
            .class("relative w-full py-24 md:py-32 bg-[#18181B]")
            .child(
                el("div")
                    .class("max-w-6xl mx-auto px-6 md:px-8")
                    .child(heading(props.text("headline"), None))
                    .child(el("div").class("flex flex-col gap-24").children(blocks)),
            )
            .into()
    }
}
