//! Hero with headline, two calls to action, and trust stats.

use serde::{Deserialize, Serialize};
use tessera_core::{PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

pub struct HeroSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustIndicator {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    pub eyebrow: String,
    pub headline: String,
    pub subtext: String,
    pub primary_cta_label: String,
    pub primary_cta_link: String,
    pub secondary_cta_label: String,
    pub secondary_cta_link: String,
    pub trust_indicators: Vec<TrustIndicator>,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            eyebrow: "MatchMe: The Future of Dating.".into(),
            headline: "Find Your Perfect Match. Write Your Love Story.".into(),
            subtext: "Find your perfect match with advanced compatibility algorithms.".into(),
            primary_cta_label: "Find Matches".into(),
            primary_cta_link: "#cta".into(),
            secondary_cta_label: "Take Quiz".into(),
            secondary_cta_link: "#quiz".into(),
            trust_indicators: vec![
                TrustIndicator {
                    label: "Matches".into(),
                    value: "1M+".into(),
                },
                TrustIndicator {
                    label: "Profiles".into(),
                    value: "Verified".into(),
                },
            ],
        }
    }
}

impl Component for HeroSection {
    type Props = HeroProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "hero-section",
            "Hero Section",
            "Cinematic hero with radial gradient and profile showcase",
            "Hero",
        )
    }

    fn properties() -> Properties {
        [
            ("eyebrow", FieldSchema::string("Eyebrow Text")),
            ("headline", FieldSchema::string("Headline")),
            ("subtext", FieldSchema::string("Subtext")),
            ("primaryCtaLabel", FieldSchema::string("Primary CTA Label")),
            ("primaryCtaLink", FieldSchema::string("Primary CTA Link")),
            ("secondaryCtaLabel", FieldSchema::string("Secondary CTA Label")),
            ("secondaryCtaLink", FieldSchema::string("Secondary CTA Link")),
            (
                "trustIndicators",
                FieldSchema::array(
                    "Trust Stats",
                    FieldSchema::object([
                        ("label", FieldSchema::string("Label")),
                        ("value", FieldSchema::string("Value")),
                    ]),
                ),
            ),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        let stats = props.items("trustIndicators").into_iter().map(|stat| {
            el("div")
                .class("flex flex-col")
                .child(el("span").class("text-2xl font-bold text-white").text(stat.text("value")))
                .child(el("span").class("text-sm text-zinc-500").text(stat.text("label")))
        });

        let ctas = el("div")
            .class("flex flex-col sm:flex-row gap-4 mt-10")
            .child(
                el("a")
                    .attr("href", props.text("primaryCtaLink"))
                    .class("rounded-full bg-[#EC4899] px-8 py-4 text-white font-bold")
                    .text(props.text("primaryCtaLabel")),
            )
            .child(
                el("a")
                    .attr("href", props.text("secondaryCtaLink"))
                    .class("rounded-full border border-zinc-700 px-8 py-4 text-white")
                    .text(props.text("secondaryCtaLabel")),
            );

        el("section")
            .id("hero")
            .class("relative min-h-screen flex items-center overflow-hidden")
            .child(
                el("div")
                    .class("relative z-10 max-w-6xl mx-auto px-6")
                    .child(
                        el("p")
                            .class("uppercase tracking-widest text-[#F97316] text-sm mb-6")
                            .text(props.text("eyebrow")),
                    )
                    .child(
                        el("h1")
                            .class("font-nunito font-extrabold text-5xl md:text-7xl text-white")
                            .text(props.text("headline")),
                    )
                    .child(
                        el("p")
                            .class("font-lato text-zinc-400 text-lg md:text-xl mt-6")
                            .text(props.text("subtext")),
                    )
                    .child(ctas)
                    .child(el("div").class("flex gap-10 mt-12").children(stats)),
            )
            .into()
    }
}
