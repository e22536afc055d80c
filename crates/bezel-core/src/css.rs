//! Inline style emission for computed layouts.
//!
//! # Design
//! - Declarations keep insertion order so rendered markup is stable.
//! - `Auto` lengths are skipped; an absent declaration already means `auto`.

use std::fmt::{self, Display, Formatter};

use crate::geometry::{CornerRadii, Insets, Length, Size, Transform};

/// Ordered set of CSS declarations for a `style` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    /// Empty declaration list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Set `property`, replacing any earlier value in place.
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Display) -> Self {
        let value = value.to_string();
        if let Some(slot) = self
            .declarations
            .iter_mut()
            .find(|(name, _)| *name == property)
        {
            slot.1 = value;
        } else {
            self.declarations.push((property, value));
        }
        self
    }

    /// Set `property` unless `length` is `auto`.
    #[must_use]
    pub fn with_length(self, property: &'static str, length: Length) -> Self {
        if length.is_auto() {
            self
        } else {
            self.with(property, length)
        }
    }

    /// Set `width` and `height` in pixels.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        self.with_length("width", Length::Px(size.width))
            .with_length("height", Length::Px(size.height))
    }

    /// Set the positioned offsets that are not `auto`.
    #[must_use]
    pub fn with_insets(self, insets: &Insets) -> Self {
        self.with_length("top", insets.top)
            .with_length("right", insets.right)
            .with_length("bottom", insets.bottom)
            .with_length("left", insets.left)
    }

    /// Set `border-radius`, expanding to per-corner longhands when they differ.
    #[must_use]
    pub fn with_corners(self, corners: &CornerRadii) -> Self {
        if corners.is_uniform() {
            self.with("border-radius", corners.top_left)
        } else {
            self.with("border-top-left-radius", corners.top_left)
                .with("border-top-right-radius", corners.top_right)
                .with("border-bottom-right-radius", corners.bottom_right)
                .with("border-bottom-left-radius", corners.bottom_left)
        }
    }

    /// Set `transform` unless it is [`Transform::None`].
    #[must_use]
    pub fn with_transform(self, transform: Transform) -> Self {
        match transform {
            Transform::None => self,
            other => self.with("transform", other),
        }
    }

    /// Value of `property`, if declared.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` when nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as a `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Display for Style {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.declarations.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{name}: {value};")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_replace_earlier_ones_in_place() {
        let style = Style::new()
            .with("width", "1px")
            .with("height", "2px")
            .with("width", "3px");
        assert_eq!(style.to_css(), "width: 3px; height: 2px;");
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn auto_insets_are_omitted() {
        let style = Style::new().with_insets(&Insets::top_right(Length::Auto, Length::Px(10.0)));
        assert_eq!(style.to_css(), "right: 10px;");
        assert_eq!(style.get("top"), None);
    }

    #[test]
    fn mixed_corners_expand_to_longhands() {
        let corners = CornerRadii {
            top_left: Length::Px(37.5),
            ..CornerRadii::uniform(Length::ZERO)
        };
        let style = Style::new().with_corners(&corners);
        assert_eq!(style.get("border-top-left-radius"), Some("37.5px"));
        assert_eq!(style.get("border-bottom-right-radius"), Some("0px"));
        assert_eq!(style.get("border-radius"), None);
    }

    #[test]
    fn empty_style_renders_empty_string() {
        let style = Style::new().with_transform(Transform::None);
        assert!(style.is_empty());
        assert_eq!(style.to_css(), "");
    }
}
