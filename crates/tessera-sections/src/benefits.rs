//! Three-column benefits grid with icons.

use serde::{Deserialize, Serialize};
use tessera_core::{Icon, PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

use crate::common::heading;

pub struct BenefitsSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
    pub icon_name: String,
}

impl BenefitItem {
    fn new(title: &str, description: &str, icon: Icon) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon_name: icon.name().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsProps {
    pub headline: String,
    pub subtext: String,
    pub benefits: Vec<BenefitItem>,
}

impl Default for BenefitsProps {
    fn default() -> Self {
        Self {
            headline: "Why MatchMe? Hope, Connection, Excitement.".into(),
            subtext: "Discover the core advantages that make MatchMe different.".into(),
            benefits: vec![
                BenefitItem::new(
                    "Quality Matches",
                    "Our algorithm filters out noise to bring you people who truly align with \
                     your values.",
                    Icon::Heart,
                ),
                BenefitItem::new(
                    "Safe Dating",
                    "Verified profiles and privacy-first features ensure you can date with \
                     complete peace of mind.",
                    Icon::Shield,
                ),
                BenefitItem::new(
                    "Easy Communication",
                    "Break the ice effortlessly with our intuitive messaging and connection tools.",
                    Icon::MessageCircle,
                ),
            ],
        }
    }
}

impl Component for BenefitsSection {
    type Props = BenefitsProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "benefits-section",
            "Benefits Grid",
            "Three-column grid with stepping stone layout",
            "Content",
        )
    }

    fn properties() -> Properties {
        [
            ("headline", FieldSchema::string("Headline")),
            ("subtext", FieldSchema::string("Subtext")),
            (
                "benefits",
                FieldSchema::array(
                    "Benefits",
                    FieldSchema::object([
                        ("title", FieldSchema::string("Title")),
                        ("description", FieldSchema::string("Description")),
                        (
                            "iconName",
                            FieldSchema::string("Icon Name (Heart, Shield, MessageCircle)"),
                        ),
                    ]),
                ),
            ),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        let cards = props
            .items("benefits")
            .into_iter()
            .enumerate()
            .map(|(idx, benefit)| {
                // stepping-stone offset for the second and third cards
                let offset = match idx {
                    1 => " md:mt-8",
                    2 => " md:mt-16",
                    _ => "",
                };
                el("div")
                    .class(&format!("group relative bg-[#222225] rounded-2xl p-8{offset}"))
                    .child(
                        el("div")
                            .class(
                                "w-14 h-14 rounded-full flex items-center justify-center \
                                 text-[#EC4899] mb-6",
                            )
                            .child(Icon::from_name(benefit.text("iconName")).render(32)),
                    )
                    .child(
                        el("h3")
                            .class("text-xl font-nunito font-bold text-white mb-4")
                            .text(benefit.text("title")),
                    )
                    .child(
                        el("p")
                            .class("font-lato text-zinc-400")
                            .text(benefit.text("description")),
                    )
            });

        el("section")
            .id("benefits")
            .class("relative w-full py-24 md:py-32 bg-[#18181B] text-zinc-200")
            .child(
                el("div")
                    .class("max-w-6xl mx-auto px-6 md:px-8")
                    .child(heading(props.text("headline"), Some(props.text("subtext"))))
                    .child(
                        el("div")
                            .class("grid grid-cols-1 md:grid-cols-3 gap-8")
                            .children(cards),
                    ),
            )
            .into()
    }
}
