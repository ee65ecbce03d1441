//! Stats grid with gradient numbers.

use serde::{Deserialize, Serialize};
use tessera_core::{PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

use crate::common::heading;

pub struct StatsSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsProps {
    pub headline: String,
    pub stats: Vec<Stat>,
}

impl Default for StatsProps {
    fn default() -> Self {
        Self {
            headline: "Our Community by the Numbers.".into(),
            stats: vec![
                Stat::new("1M+", "Matches Made"),
                Stat::new("100%", "Profiles Verified"),
                Stat::new("Yes", "GDPR Compliant"),
                Stat::new("Always", "Free Communication"),
            ],
        }
    }
}

impl Component for StatsSection {
    type Props = StatsProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "stats-section",
            "Stats Grid",
            "Simple stats grid with gradient numbers",
            "Content",
        )
    }

    fn properties() -> Properties {
        [
            ("headline", FieldSchema::string("Headline")),
            (
                "stats",
                FieldSchema::array(
                    "Stats",
                    FieldSchema::object([
                        ("value", FieldSchema::string("Value")),
                        ("label", FieldSchema::string("Label")),
                    ]),
                ),
            ),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        let cells = props.items("stats").into_iter().map(|stat| {
            el("div")
                .class("text-center")
                .child(
                    el("div")
                        .class(
                            "text-4xl md:text-5xl font-extrabold bg-gradient-to-r from-[#EC4899] \
                             to-[#F97316] bg-clip-text text-transparent",
                        )
                        .text(stat.text("value")),
                )
                .child(el("div").class("mt-2 text-zinc-400").text(stat.text("label")))
        });

        el("section")
            .id("stats")
            .class("relative w-full py-24 bg-[#18181B]")
            .child(
                el("div")
                    .class("max-w-6xl mx-auto px-6 md:px-8")
                    .child(heading(props.text("headline"), None))
                    .child(
                        el("div")
                            .class("grid grid-cols-2 md:grid-cols-4 gap-8")
                            .children(cells),
                    ),
            )
            .into()
    }
}
