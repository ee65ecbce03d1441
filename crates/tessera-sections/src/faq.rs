//! Two-column FAQ accordion.
//!
//! Every answer renders collapsed; expanding is host-side behaviour keyed on
//! the `aria-controls` ids.

use serde::{Deserialize, Serialize};
use tessera_core::{Icon, PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

pub struct FaqSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqProps {
    pub headline: String,
    pub subtext: String,
    pub questions: Vec<FaqEntry>,
}

impl Default for FaqProps {
    fn default() -> Self {
        Self {
            headline: "Questions About Safety and Privacy?".into(),
            subtext: "We address your biggest concerns.".into(),
            questions: vec![
                FaqEntry::new(
                    "Are there fake profiles on MatchMe?",
                    "We use AI-driven verification and manual reviews to ensure every profile \
                     is real.",
                ),
                FaqEntry::new(
                    "What is the true cost of the app?",
                    "MatchMe is free to download and match. Premium features unlock unlimited \
                     swipes and advanced filters.",
                ),
                FaqEntry::new(
                    "How is my privacy protected?",
                    "We use end-to-end encryption and never sell your data to third parties. \
                     You have full control over what you share.",
                ),
            ],
        }
    }
}

impl Component for FaqSection {
    type Props = FaqProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "faq-section",
            "FAQ Accordion",
            "Two-column FAQ with accordion",
            "Content",
        )
    }

    fn properties() -> Properties {
        [
            ("headline", FieldSchema::string("Headline")),
            ("subtext", FieldSchema::string("Subtext")),
            (
                "questions",
                FieldSchema::array(
                    "Questions",
                    FieldSchema::object([
                        ("question", FieldSchema::string("Question")),
                        ("answer", FieldSchema::string("Answer")),
                    ]),
                ),
            ),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        let rows = props
            .items("questions")
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                let panel_id = format!("faq-answer-{idx}");
                el("div")
                    .class("border-b border-zinc-800")
                    .child(
                        el("button")
                            .class("w-full flex items-center justify-between py-6 text-left")
                            .attr("aria-expanded", "false")
                            .attr("aria-controls", panel_id.clone())
                            .child(
                                el("span")
                                    .class("font-nunito font-bold text-lg text-white")
                                    .text(entry.text("question")),
                            )
                            .child(el("span").class("text-[#F97316]").child(Icon::Plus.render(24))),
                    )
                    .child(
                        el("div")
                            .id(&panel_id)
                            .attr("hidden", "")
                            .class("pb-6 font-lato text-zinc-400")
                            .text(entry.text("answer")),
                    )
            });

        el("section")
            .id("faq")
            .class("relative w-full py-24 md:py-32 bg-[#18181B]")
            .child(
                el("div")
                    .class("max-w-6xl mx-auto px-6 md:px-8 grid grid-cols-1 md:grid-cols-2 gap-16")
                    .child(
                        el("div")
                            .child(
                                el("h2")
                                    .class("font-nunito font-bold text-3xl md:text-5xl text-white")
                                    .text(props.text("headline")),
                            )
                            .child(
                                el("p")
                                    .class("font-lato text-zinc-400 text-lg mt-6")
                                    .text(props.text("subtext")),
                            ),
                    )
                    .child(el("div").children(rows)),
            )
            .into()
    }
}
