//! Flet target renderer
//!
//! Maps each element variant onto a `ft.Container`/`ft.Text` fragment.
//! The generated module is a runnable Flet program: one absolute-positioned
//! stack per transform root inside `main(page)`.

pub mod templates;

use crate::errors::EmitError;
use crate::models::{FrameElement, RectangleElement, Shadow, TextElement, UnknownElement};
use crate::renderers::FragmentRenderer;

use templates::{
    render, ChildContext, FletTemplate, FrameContext, PageContext, RectangleContext,
    ShadowContext, TextContext, UnknownContext,
};

/// Figma blur maps to Flet `blur_radius` at a 5:1 ratio.
const BLUR_DIVISOR: i64 = 5;

/// Renders Flet (Python) source fragments
#[derive(Debug, Default)]
pub struct FletRenderer;

impl FletRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentRenderer for FletRenderer {
    fn frame(&self, frame: &FrameElement, children: Vec<String>) -> Result<String, EmitError> {
        let context = FrameContext {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            corner_radius: frame.corner_radius,
            bg_color: frame.bg_color.clone(),
            shadow: frame.shadow.as_ref().map(shadow_context),
            has_children: !children.is_empty(),
            children: children.into_iter().map(|code| ChildContext { code }).collect(),
        };
        render(FletTemplate::Frame, &context)
    }

    fn rectangle(&self, rectangle: &RectangleElement) -> Result<String, EmitError> {
        let context = RectangleContext {
            x: rectangle.x,
            y: rectangle.y,
            width: rectangle.width,
            height: rectangle.height,
            bg_color: rectangle.bg_color.clone(),
        };
        render(FletTemplate::Rectangle, &context)
    }

    fn text(&self, text: &TextElement) -> Result<String, EmitError> {
        let context = TextContext {
            x: text.x,
            y: text.y,
            width: text.width,
            height: text.height,
            text_color: text.text_color.clone(),
            font_name: text.font_name.clone(),
            font_size: text.font_size,
            text: text.text.clone(),
        };
        render(FletTemplate::Text, &context)
    }

    fn unknown(&self, unknown: &UnknownElement) -> Result<String, EmitError> {
        let context = UnknownContext {
            x: unknown.x,
            y: unknown.y,
            width: unknown.width,
            height: unknown.height,
        };
        render(FletTemplate::Unknown, &context)
    }

    fn page(&self, fragments: Vec<String>) -> Result<String, EmitError> {
        let context = PageContext {
            fragments: fragments.into_iter().map(|code| ChildContext { code }).collect(),
        };
        render(FletTemplate::Page, &context)
    }
}

fn shadow_context(shadow: &Shadow) -> ShadowContext {
    ShadowContext {
        color: shadow.color.clone(),
        offset_x: shadow.offset_x,
        offset_y: shadow.offset_y,
        blur: shadow.blur / BLUR_DIVISOR,
        spread: shadow.spread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SceneElement;
    use crate::renderers::emit;

    fn rectangle(x: i64, y: i64) -> SceneElement {
        SceneElement::Rectangle(RectangleElement {
            x,
            y,
            width: 10,
            height: 10,
            bg_color: "#FF0000".to_string(),
        })
    }

    #[test]
    fn test_one_fragment_per_element() {
        let tree = SceneElement::Frame(FrameElement {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            bg_color: "transparent".to_string(),
            corner_radius: 0,
            shadow: None,
            children: vec![
                rectangle(0, 0),
                SceneElement::Frame(FrameElement {
                    x: 10,
                    y: 10,
                    width: 50,
                    height: 50,
                    bg_color: "#FFFFFF".to_string(),
                    corner_radius: 0,
                    shadow: None,
                    children: vec![rectangle(1, 1)],
                }),
            ],
        });
        let fragment = emit(&tree, &FletRenderer::new()).unwrap();
        // Every variant renders exactly one container.
        assert_eq!(fragment.matches("ft.Container(").count(), tree.count());
    }

    #[test]
    fn test_children_keep_source_order() {
        let tree = SceneElement::Frame(FrameElement {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            bg_color: "transparent".to_string(),
            corner_radius: 0,
            shadow: None,
            children: vec![rectangle(11, 0), rectangle(22, 0), rectangle(33, 0)],
        });
        let fragment = emit(&tree, &FletRenderer::new()).unwrap();
        let first = fragment.find("left=11,").unwrap();
        let second = fragment.find("left=22,").unwrap();
        let third = fragment.find("left=33,").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_shadow_blur_maps_to_flet_ratio() {
        let frame = FrameElement {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            bg_color: "#FFFFFF".to_string(),
            corner_radius: 0,
            shadow: Some(Shadow {
                color: "#A8FF35".to_string(),
                offset_x: 0,
                offset_y: 0,
                blur: 25,
                spread: 0,
            }),
            children: Vec::new(),
        };
        let renderer = FletRenderer::new();
        let fragment = renderer.frame(&frame, Vec::new()).unwrap();
        assert!(fragment.contains("blur_radius=5,"));
    }

    #[test]
    fn test_unknown_renders_placeholder_box() {
        let unknown = UnknownElement { x: 3, y: 4, width: 5, height: 6 };
        let fragment = FletRenderer::new().unknown(&unknown).unwrap();
        assert!(fragment.contains("bgcolor=\"#000000\""));
        assert!(fragment.contains("left=3,"));
    }
}
