//! Two-column testimonial grid.

use serde::{Deserialize, Serialize};
use tessera_core::{PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

use crate::common::heading;

pub struct TestimonialsSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialsProps {
    pub headline: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsProps {
    fn default() -> Self {
        Self {
            headline: "Real Love Stories Start Here.".into(),
            testimonials: vec![
                Testimonial {
                    quote: "Found my soulmate.".into(),
                    author: "A. Johnson".into(),
                },
                Testimonial {
                    quote: "Safe and fun.".into(),
                    author: "B. Lee".into(),
                },
            ],
        }
    }
}

impl Component for TestimonialsSection {
    type Props = TestimonialsProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(
            "testimonials-section",
            "Testimonials",
            "Two-column testimonial grid",
            "Content",
        )
    }

    fn properties() -> Properties {
        [
            ("headline", FieldSchema::string("Headline")),
            (
                "testimonials",
                FieldSchema::array(
                    "Testimonials",
                    FieldSchema::object([
                        ("quote", FieldSchema::string("Quote")),
                        ("author", FieldSchema::string("Author")),
                    ]),
                ),
            ),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        let cards = props.items("testimonials").into_iter().map(|item| {
            el("figure")
                .class("bg-[#222225] rounded-2xl p-8 border border-white/5")
                .child(
                    el("blockquote")
                        .class("font-lato text-xl text-white")
                        .text(item.text("quote")),
                )
                .child(el("figcaption").class("mt-6 text-zinc-500").text(item.text("author")))
        });

        el("section")
            .id("testimonials")
            .class("relative w-full py-24 md:py-32 bg-[#18181B]")
            .child(
                el("div")
                    .class("max-w-5xl mx-auto px-6 md:px-8")
                    .child(heading(props.text("headline"), None))
                    .child(
                        el("div")
                            .class("grid grid-cols-1 md:grid-cols-2 gap-8")
                            .children(cards),
                    ),
            )
            .into()
    }
}
