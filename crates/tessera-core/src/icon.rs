//! The closed icon set sections can reference by name.
//!
//! Editors store icons as free-text names (e.g. `"Shield"`). Unknown names
//! resolve to [`Icon::DEFAULT`] instead of failing the render.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::view::{Element, el};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Heart,
    Shield,
    MessageCircle,
    Plus,
    Minus,
    Menu,
    X,
    Check,
}

impl Icon {
    /// Icon used for names outside the known set.
    pub const DEFAULT: Self = Self::Heart;

    pub const ALL: [Self; 8] = [
        Self::Heart,
        Self::Shield,
        Self::MessageCircle,
        Self::Plus,
        Self::Minus,
        Self::Menu,
        Self::X,
        Self::Check,
    ];

    /// Look up an icon by its editor name, falling back to [`Icon::DEFAULT`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or(Self::DEFAULT)
    }

    /// Strict lookup by editor name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Name as written in editor data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heart => "Heart",
            Self::Shield => "Shield",
            Self::MessageCircle => "MessageCircle",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Menu => "Menu",
            Self::X => "X",
            Self::Check => "Check",
        }
    }

    /// Kebab-case slug used in rendered markup.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Shield => "shield",
            Self::MessageCircle => "message-circle",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Menu => "menu",
            Self::X => "x",
            Self::Check => "check",
        }
    }

    /// An `<svg>` placeholder element the host's icon sprite fills in.
    #[must_use]
    pub fn render(self, size: u32) -> Element {
        let size = size.to_string();
        el("svg")
            .attr("data-icon", self.slug())
            .class(&format!("lucide lucide-{}", self.slug()))
            .attr("width", size.clone())
            .attr("height", size)
            .attr("aria-hidden", "true")
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Heart", Icon::Heart)]
    #[case("Shield", Icon::Shield)]
    #[case("MessageCircle", Icon::MessageCircle)]
    #[case("X", Icon::X)]
    #[case("Check", Icon::Check)]
    fn known_names_resolve(#[case] name: &str, #[case] expected: Icon) {
        assert_eq!(Icon::from_name(name), expected);
    }

    #[rstest]
    #[case("Unknown")]
    #[case("")]
    #[case("heart")]
    fn unknown_names_fall_back_to_default(#[case] name: &str) {
        assert_eq!(Icon::from_name(name), Icon::DEFAULT);
        assert!(Icon::parse(name).is_none());
    }

    #[test]
    fn names_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(Icon::parse(icon.name()), Some(icon));
        }
    }

    #[test]
    fn render_marks_slug_and_size() {
        let svg = Icon::MessageCircle.render(32);
        assert_eq!(svg.get_attr("data-icon"), Some("message-circle"));
        assert_eq!(svg.get_attr("width"), Some("32"));
    }
}
