//! Final call to action with the lead-capture form.
//!
//! The registered renderer lays the form out empty and idle. Hosts that own
//! live form state (entered values, the in-flight flag, the last outcome)
//! render through [`render_form`] with a [`FormState`] instead.

use serde::{Deserialize, Serialize};
use tessera_core::{Element, PropsView, ViewNode, el};
use tessera_registry::Component;
use tessera_schema::{ComponentMeta, FieldSchema, Properties};

/// Registry name of this section.
pub const NAME: &str = "cta-section";

/// Minimum age accepted by the form's age input.
pub const MIN_AGE: u8 = 18;

/// Submit button label while a submission is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";

pub struct CtaSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaProps {
    pub headline: String,
    pub subtext: String,
    pub cta_text: String,
    pub consent_text: String,
    pub privacy_link_text: String,
    pub privacy_link_url: String,
}

impl Default for CtaProps {
    fn default() -> Self {
        Self {
            headline: "Ready to Write Your Love Story?".into(),
            subtext: "Join 1M+ singles finding real connection today.".into(),
            cta_text: "Find Matches".into(),
            consent_text: "I agree to receive match notifications.".into(),
            privacy_link_text: "Privacy Policy".into(),
            privacy_link_url: "#".into(),
        }
    }
}

/// Outcome line shown under the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    Success(&'a str),
    Failure(&'a str),
}

/// Live form state folded into the rendered form.
#[derive(Debug, Clone, Default)]
pub struct FormState<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: &'a str,
    pub consent: bool,
    pub in_flight: bool,
    /// Input names that failed client-side checks.
    pub invalid: Vec<&'static str>,
    pub notice: Option<Notice<'a>>,
}

fn input(name: &'static str, kind: &str, placeholder: &str, state: &FormState<'_>) -> Element {
    let value = match name {
        "name" => state.name,
        "email" => state.email,
        "age" => state.age,
        _ => "",
    };
    let mut input = el("input")
        .attr("type", kind)
        .attr("name", name)
        .attr("placeholder", placeholder)
        .attr("required", "")
        .class("w-full px-6 py-4 rounded-full bg-[#121215] border border-zinc-700 text-white");
    if !value.is_empty() {
        input = input.attr("value", value);
    }
    if state.invalid.contains(&name) {
        input = input.attr("aria-invalid", "true");
    }
    input
}

fn consent(props: &PropsView<'_>, state: &FormState<'_>) -> Element {
    let mut checkbox = el("input")
        .attr("type", "checkbox")
        .id("consent")
        .attr("name", "consent")
        .attr("required", "");
    if state.consent {
        checkbox = checkbox.attr("checked", "");
    }
    if state.invalid.contains(&"consent") {
        checkbox = checkbox.attr("aria-invalid", "true");
    }

    el("div")
        .class("flex items-start gap-3 text-sm text-zinc-400")
        .child(checkbox)
        .child(
            el("label")
                .attr("for", "consent")
                .text(props.text("consentText"))
                .child(
                    el("a")
                        .attr("href", props.text("privacyLinkUrl"))
                        .class("underline")
                        .text(props.text("privacyLinkText")),
                ),
        )
}

fn submit_button(props: &PropsView<'_>, state: &FormState<'_>) -> Element {
    let button = el("button")
        .attr("type", "submit")
        .class("w-full md:w-auto rounded-full bg-[#EC4899] px-10 py-4 text-white font-bold");
    if state.in_flight {
        button
            .attr("disabled", "")
            .attr("aria-busy", "true")
            .text(PROCESSING_LABEL)
    } else {
        button.text(props.text("ctaText"))
    }
}

fn notice(notice: Notice<'_>) -> Element {
    match notice {
        Notice::Success(message) => el("p")
            .attr("role", "status")
            .class("text-sm text-emerald-400")
            .text(message),
        Notice::Failure(message) => el("p")
            .attr("role", "alert")
            .class("text-sm text-red-400")
            .text(message),
    }
}

/// Render the CTA section with live form state.
#[must_use]
pub fn render_form(props: &PropsView<'_>, state: &FormState<'_>) -> ViewNode {
    let mut form = el("form")
        .class("mt-10 space-y-4")
        .child(
            el("div")
                .class("grid grid-cols-1 md:grid-cols-3 gap-4")
                .child(input("name", "text", "Name", state))
                .child(input("email", "email", "Email", state))
                .child(input("age", "number", "Age", state).attr("min", MIN_AGE.to_string())),
        )
        .child(consent(props, state))
        .child(submit_button(props, state));
    if let Some(outcome) = state.notice {
        form = form.child(notice(outcome));
    }

    el("section")
        .id("cta")
        .class("relative w-full py-24 md:py-32 bg-[#18181B]")
        .child(
            el("div")
                .class("max-w-3xl mx-auto px-6 text-center")
                .child(
                    el("h2")
                        .class("font-nunito font-bold text-3xl md:text-5xl text-white")
                        .text(props.text("headline")),
                )
                .child(
                    el("p")
                        .class("font-lato text-zinc-400 text-lg mt-6")
                        .text(props.text("subtext")),
                )
                .child(form),
        )
        .into()
}

impl Component for CtaSection {
    type Props = CtaProps;

    fn meta() -> ComponentMeta {
        ComponentMeta::new(NAME, "Final CTA Form", "Lead capture form", "Conversion")
    }

    fn properties() -> Properties {
        [
            ("headline", FieldSchema::string("Headline")),
            ("subtext", FieldSchema::string("Subtext")),
            ("ctaText", FieldSchema::string("Button Text")),
            ("consentText", FieldSchema::string("Consent Text")),
            ("privacyLinkText", FieldSchema::string("Privacy Link Text")),
            ("privacyLinkUrl", FieldSchema::string("Privacy Link URL")),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
    }

    fn render(props: &PropsView<'_>) -> ViewNode {
        render_form(props, &FormState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tessera_core::{ResolvedProps, to_record};

    fn defaults() -> ResolvedProps {
        to_record(&CtaProps::default()).unwrap()
    }

    fn button(node: &ViewNode) -> Element {
        let buttons = node.find_all("button");
        assert_eq!(buttons.len(), 1);
        buttons[0].clone()
    }

    #[test]
    fn idle_form_is_empty_and_enabled() {
        let record = defaults();
        let node = CtaSection::render(&PropsView::new(&record, &record));
        let submit = button(&node);
        assert_eq!(submit.get_attr("disabled"), None);
        assert_eq!(ViewNode::from(submit).text_content(), "Find Matches");
        assert!(node.find_all("input").iter().all(|i| i.get_attr("value").is_none()));
        assert!(node.find_all("p").iter().all(|p| p.get_attr("role").is_none()));
    }

    #[test]
    fn in_flight_disables_submit() {
        let record = defaults();
        let state = FormState {
            in_flight: true,
            ..FormState::default()
        };
        let node = render_form(&PropsView::new(&record, &record), &state);
        let submit = button(&node);
        assert_eq!(submit.get_attr("disabled"), Some(""));
        assert_eq!(ViewNode::from(submit).text_content(), PROCESSING_LABEL);
    }

    #[test]
    fn values_and_invalid_marks_are_rendered() {
        let record = defaults();
        let state = FormState {
            name: "Ada",
            age: "16",
            consent: true,
            invalid: vec!["age"],
            ..FormState::default()
        };
        let node = render_form(&PropsView::new(&record, &record), &state);
        let inputs = node.find_all("input");
        assert_eq!(inputs[0].get_attr("value"), Some("Ada"));
        assert_eq!(inputs[1].get_attr("value"), None);
        assert_eq!(inputs[2].get_attr("aria-invalid"), Some("true"));
        assert_eq!(inputs[3].get_attr("checked"), Some(""));
    }

    #[test]
    fn failure_notice_is_an_alert() {
        let record = defaults();
        let state = FormState {
            notice: Some(Notice::Failure("Something went wrong.")),
            ..FormState::default()
        };
        let node = render_form(&PropsView::new(&record, &record), &state);
        let html = node.to_html();
        assert!(html.contains("<p role=\"alert\""));
        assert!(html.contains("Something went wrong."));
    }
}
