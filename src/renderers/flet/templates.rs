//! Flet fragment templates
//!
//! Mustache-based templates for the generated Flet source. Each element
//! variant has one fragment template; `Page` wraps the per-root fragments
//! into the final runnable module.

use serde::Serialize;

use crate::errors::EmitError;

/// Template selection for Flet output
#[derive(Debug, Clone, Copy)]
pub enum FletTemplate {
    /// Outer module: imports, `main(page)`, one stack of root fragments
    Page,
    /// Container with optional shadow and nested child stack
    Frame,
    /// Solid-fill container leaf
    Rectangle,
    /// Container wrapping a text control
    Text,
    /// Placeholder box for unclassified nodes
    Unknown,
}

/// Context for the `Frame` template
#[derive(Debug, Clone, Serialize)]
pub struct FrameContext {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub corner_radius: i64,
    pub bg_color: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowContext>,

    /// A childless frame renders a container with no content stack
    pub has_children: bool,
    pub children: Vec<ChildContext>,
}

/// Context for the `shadow` section of a frame fragment
#[derive(Debug, Clone, Serialize)]
pub struct ShadowContext {
    pub color: String,
    pub offset_x: i64,
    pub offset_y: i64,
    pub blur: i64,
    pub spread: i64,
}

/// One already-rendered nested fragment
#[derive(Debug, Clone, Serialize)]
pub struct ChildContext {
    pub code: String,
}

/// Context for the `Rectangle` template
#[derive(Debug, Clone, Serialize)]
pub struct RectangleContext {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub bg_color: String,
}

/// Context for the `Text` template
#[derive(Debug, Clone, Serialize)]
pub struct TextContext {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub text_color: String,
    pub font_name: String,
    pub font_size: f64,
    pub text: String,
}

/// Context for the `Unknown` template
#[derive(Debug, Clone, Serialize)]
pub struct UnknownContext {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Context for the `Page` template
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub fragments: Vec<ChildContext>,
}

/// Get template content by type
pub fn template_content(template: FletTemplate) -> &'static str {
    match template {
        FletTemplate::Page => include_str!("templates/page.py.mustache"),
        FletTemplate::Frame => include_str!("templates/frame.py.mustache"),
        FletTemplate::Rectangle => include_str!("templates/rectangle.py.mustache"),
        FletTemplate::Text => include_str!("templates/text.py.mustache"),
        FletTemplate::Unknown => include_str!("templates/unknown.py.mustache"),
    }
}

/// Render one fragment from its template and context
pub fn render<C: Serialize>(template: FletTemplate, context: &C) -> Result<String, EmitError> {
    let compiled = mustache::compile_str(template_content(template))?;
    Ok(compiled.render_to_string(context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rectangle_template() {
        let context = RectangleContext {
            x: 10,
            y: 20,
            width: 200,
            height: 100,
            bg_color: "#FF0000".to_string(),
        };
        let rendered = render(FletTemplate::Rectangle, &context).unwrap();
        assert!(rendered.contains("left=10,"));
        assert!(rendered.contains("top=20,"));
        assert!(rendered.contains("bgcolor=\"#FF0000\""));
    }

    #[test]
    fn test_frame_template_omits_absent_shadow() {
        let context = FrameContext {
            x: 0,
            y: 0,
            width: 600,
            height: 400,
            corner_radius: 8,
            bg_color: "transparent".to_string(),
            shadow: None,
            has_children: false,
            children: Vec::new(),
        };
        let rendered = render(FletTemplate::Frame, &context).unwrap();
        assert!(!rendered.contains("BoxShadow"));
        assert!(!rendered.contains("ft.Stack"));
        assert!(rendered.contains("border_radius=8,"));
    }

    #[test]
    fn test_frame_template_renders_shadow_section() {
        let context = FrameContext {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            corner_radius: 0,
            bg_color: "#FFFFFF".to_string(),
            shadow: Some(ShadowContext {
                color: "#A8FF35".to_string(),
                offset_x: 0,
                offset_y: 0,
                blur: 5,
                spread: 0,
            }),
            has_children: false,
            children: Vec::new(),
        };
        let rendered = render(FletTemplate::Frame, &context).unwrap();
        assert!(rendered.contains("shadow=ft.BoxShadow("));
        assert!(rendered.contains("blur_radius=5,"));
        assert!(rendered.contains("color=\"#A8FF35\""));
    }

    #[test]
    fn test_text_template_keeps_raw_content() {
        let context = TextContext {
            x: 10,
            y: 20,
            width: 100,
            height: 30,
            text_color: "#0000FF".to_string(),
            font_name: "Montserrat Regular".to_string(),
            font_size: 15.0,
            text: "Nested Text".to_string(),
        };
        let rendered = render(FletTemplate::Text, &context).unwrap();
        assert!(rendered.contains("value=\"Nested Text\""));
        assert!(rendered.contains("size=15,"));
        assert!(rendered.contains("font_family=\"Montserrat Regular\""));
    }

    #[test]
    fn test_page_template_orders_fragments() {
        let context = PageContext {
            fragments: vec![
                ChildContext { code: "first_fragment".to_string() },
                ChildContext { code: "second_fragment".to_string() },
            ],
        };
        let rendered = render(FletTemplate::Page, &context).unwrap();
        assert!(rendered.contains("import flet as ft"));
        let first = rendered.find("first_fragment").unwrap();
        let second = rendered.find("second_fragment").unwrap();
        assert!(first < second);
    }
}
