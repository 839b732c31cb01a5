//! Per-widget alignment overrides.
//!
//! Stored as `"<box> & <text>"`. Either side may be empty; a string without
//! the separator is all box.

use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATOR: &str = " & ";

/// Box and text alignment tokens for one widget.
///
/// Tokens are free-form (`"center"`, `"flex-start"`, ...); the engine never
/// interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alignment {
    /// Placement of the widget box inside its grid cell.
    pub box_align: String,
    /// Alignment of the text inside the widget.
    pub text_align: String,
}

impl Alignment {
    pub fn new(box_align: impl Into<String>, text_align: impl Into<String>) -> Self {
        Self {
            box_align: box_align.into(),
            text_align: text_align.into(),
        }
    }

    /// Parses `"box & text"`.
    ///
    /// ```
    /// use move_grid::layout::Alignment;
    ///
    /// let align = Alignment::parse("center & left");
    /// assert_eq!(align, Alignment::new("center", "left"));
    /// assert_eq!(Alignment::parse("center"), Alignment::new("center", ""));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.split_once(SEPARATOR) {
            Some((box_align, text_align)) => Self::new(box_align, text_align),
            None => Self::new(s, ""),
        }
    }

    /// True when neither side carries a token.
    pub fn is_empty(&self) -> bool {
        self.box_align.is_empty() && self.text_align.is_empty()
    }
}

impl fmt::Display for Alignment {
    /// The separator is written whenever the text side is set, so an empty
    /// box survives a round trip (`" & left"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text_align.is_empty() {
            f.write_str(&self.box_align)
        } else {
            write!(f, "{}{SEPARATOR}{}", self.box_align, self.text_align)
        }
    }
}

impl From<String> for Alignment {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Alignment> for String {
    fn from(align: Alignment) -> Self {
        align.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_both_sides() {
        let align = Alignment::parse("flex-end & right");
        assert_eq!(align.box_align, "flex-end");
        assert_eq!(align.text_align, "right");
    }

    #[test]
    fn parse_without_separator_is_box_only() {
        assert_eq!(Alignment::parse("center"), Alignment::new("center", ""));
    }

    #[test]
    fn parse_empty_string() {
        let align = Alignment::parse("");
        assert!(align.is_empty());
    }

    #[test]
    fn display_box_only() {
        assert_eq!(Alignment::new("center", "").to_string(), "center");
    }

    #[test]
    fn display_both_sides() {
        assert_eq!(Alignment::new("center", "left").to_string(), "center & left");
    }

    #[test]
    fn empty_box_survives_roundtrip() {
        let align = Alignment::new("", "left");
        assert_eq!(align.to_string(), " & left");
        assert_eq!(Alignment::parse(&align.to_string()), align);
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&Alignment::new("center", "right")).expect("serialize");
        assert_eq!(json, "\"center & right\"");
        let parsed: Alignment = serde_json::from_str("\"start\"").expect("deserialize");
        assert_eq!(parsed, Alignment::new("start", ""));
    }
}
