//! Tracked style properties, computed-style snapshots, and the edited patch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The visual properties the inspector tracks, edits, and restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleProperty {
    BackgroundColor,
    Background,
    Color,
    FontSize,
    FontWeight,
    Padding,
    Margin,
    BorderRadius,
    Position,
    Top,
    Left,
    Width,
    Height,
    Transform,
}

impl StyleProperty {
    pub const ALL: [Self; 14] = [
        Self::BackgroundColor,
        Self::Background,
        Self::Color,
        Self::FontSize,
        Self::FontWeight,
        Self::Padding,
        Self::Margin,
        Self::BorderRadius,
        Self::Position,
        Self::Top,
        Self::Left,
        Self::Width,
        Self::Height,
        Self::Transform,
    ];

    /// CSS property name as written to an element's inline style.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "background-color",
            Self::Background => "background",
            Self::Color => "color",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::BorderRadius => "border-radius",
            Self::Position => "position",
            Self::Top => "top",
            Self::Left => "left",
            Self::Width => "width",
            Self::Height => "height",
            Self::Transform => "transform",
        }
    }
}

/// Sparse property → value map of the edits made since selection.
///
/// Used to pre-fill controls, not to restore state; restoration goes through
/// the [`StyleSnapshot`] captured at selection time.
pub type StylePatch = HashMap<StyleProperty, String>;

/// The original computed-style values of a selected element.
///
/// Captured exactly once, at selection time; reset writes these values back
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    values: Vec<(StyleProperty, String)>,
}

impl StyleSnapshot {
    /// Capture a snapshot by reading every tracked property through `read`
    /// (in practice: the browser's resolved computed style).
    pub fn capture(mut read: impl FnMut(StyleProperty) -> String) -> Self {
        Self {
            values: StyleProperty::ALL
                .iter()
                .map(|&prop| (prop, read(prop)))
                .collect(),
        }
    }

    pub fn get(&self, prop: StyleProperty) -> &str {
        self.values
            .iter()
            .find(|(p, _)| *p == prop)
            .map_or("", |(_, value)| value.as_str())
    }

    /// The writes needed to restore the element: every recorded property with
    /// a non-empty value, in capture order.
    pub fn restore_entries(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(prop, value)| (*prop, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_reads_every_tracked_property() {
        let snapshot = StyleSnapshot::capture(|prop| format!("v:{}", prop.css_name()));
        for prop in StyleProperty::ALL {
            assert_eq!(snapshot.get(prop), format!("v:{}", prop.css_name()));
        }
    }

    #[test]
    fn test_restore_skips_empty_values() {
        let snapshot = StyleSnapshot::capture(|prop| match prop {
            StyleProperty::Color => "rgb(0, 0, 0)".to_string(),
            StyleProperty::Transform => "none".to_string(),
            _ => String::new(),
        });

        let entries: Vec<_> = snapshot.restore_entries().collect();
        assert_eq!(
            entries,
            vec![
                (StyleProperty::Color, "rgb(0, 0, 0)"),
                (StyleProperty::Transform, "none"),
            ]
        );
    }
}
