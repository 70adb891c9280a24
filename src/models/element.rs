//! The built element tree
//!
//! Classification maps every raw node to one of a closed set of variants.
//! A subtree is constructed once per transform invocation, is immutable
//! afterwards, and is discarded after serialization — no state survives
//! between invocations.

use serde::Serialize;

/// One resolved node of the built tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SceneElement {
    Frame(FrameElement),
    Rectangle(RectangleElement),
    Text(TextElement),
    Unknown(UnknownElement),
}

/// A container node. Defines the local coordinate origin for its
/// descendants; its own `(x, y)` is relative to the *parent* frame, and
/// `(0, 0)` for a transform root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameElement {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub bg_color: String,
    pub corner_radius: i64,
    pub shadow: Option<Shadow>,
    pub children: Vec<SceneElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectangleElement {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub bg_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub text_color: String,
    pub font_name: String,
    pub font_size: f64,
    pub text: String,
}

/// Fallback for node types the classifier does not handle. Carries
/// geometry only and renders as a placeholder box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownElement {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Resolved drop-shadow parameters. Present only when a visible drop
/// shadow was found — never a zeroed struct. Blur and spread are carried
/// unscaled; target renderers apply their own conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shadow {
    pub color: String,
    pub offset_x: i64,
    pub offset_y: i64,
    pub blur: i64,
    pub spread: i64,
}

impl SceneElement {
    /// Child elements, empty for leaf variants
    pub fn children(&self) -> &[SceneElement] {
        match self {
            SceneElement::Frame(frame) => &frame.children,
            _ => &[],
        }
    }

    /// Total number of elements in this subtree, self included. Emission
    /// produces exactly one fragment per counted element.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(SceneElement::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> SceneElement {
        SceneElement::Rectangle(RectangleElement {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
            bg_color: "#FF0000".to_string(),
        })
    }

    #[test]
    fn test_count_covers_nested_frames() {
        let inner = SceneElement::Frame(FrameElement {
            x: 5,
            y: 5,
            width: 50,
            height: 50,
            bg_color: "transparent".to_string(),
            corner_radius: 0,
            shadow: None,
            children: vec![leaf(), leaf()],
        });
        let outer = SceneElement::Frame(FrameElement {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            bg_color: "#FFFFFF".to_string(),
            corner_radius: 0,
            shadow: None,
            children: vec![inner, leaf()],
        });
        assert_eq!(outer.count(), 5);
        assert_eq!(leaf().count(), 1);
    }
}
