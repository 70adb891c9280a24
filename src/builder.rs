//! Classification and tree building
//!
//! `build` drives the whole transform: it classifies each raw node,
//! resolves geometry and style, filters invisible children, and recurses
//! depth-first, threading the nearest enclosing frame's absolute origin
//! down for relative positioning.

use serde_json::Value;

use crate::errors::TransformError;
use crate::figma::{geometry, style, NodeView, Point};
use crate::models::{
    FrameElement, RectangleElement, SceneElement, TextElement, UnknownElement,
};

/// The closed set of element variants a raw node classifies into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Frame,
    Rectangle,
    Text,
    Unknown,
}

/// Classify a raw node by its `type` and `name`, case-normalized.
///
/// The order is a behavioral contract: the frame/group check precedes the
/// name-based rectangle check, so a frame literally named "rectangle"
/// still classifies as a frame. Group, component, and component-set nodes
/// are frames semantically, not separate kinds.
pub fn classify(node: NodeView) -> ElementKind {
    let name = node.name().trim().to_lowercase();
    let node_type = node.node_type().trim().to_lowercase();

    if node_type == "frame" || node_type == "group" {
        ElementKind::Frame
    } else if name == "rectangle" || node_type == "rectangle" {
        ElementKind::Rectangle
    } else if node_type == "text" {
        ElementKind::Text
    } else {
        ElementKind::Unknown
    }
}

/// Build the element subtree rooted at `node`.
///
/// `ancestor` is the absolute origin of the nearest enclosing frame;
/// `None` marks a transform root, which resolves to position (0, 0).
pub fn build(node: NodeView, ancestor: Option<Point>) -> Result<SceneElement, TransformError> {
    match classify(node) {
        ElementKind::Frame => build_frame(node, ancestor),
        ElementKind::Rectangle => {
            let geom = geometry::resolve(node, ancestor)?;
            Ok(SceneElement::Rectangle(RectangleElement {
                x: geom.x,
                y: geom.y,
                width: geom.width,
                height: geom.height,
                bg_color: style::fill_color(node),
            }))
        }
        ElementKind::Text => build_text(node, ancestor),
        ElementKind::Unknown => {
            log::debug!(
                "unhandled node type `{}` on `{}`, emitting placeholder",
                node.node_type(),
                node.name()
            );
            let geom = geometry::resolve(node, ancestor)?;
            Ok(SceneElement::Unknown(UnknownElement {
                x: geom.x,
                y: geom.y,
                width: geom.width,
                height: geom.height,
            }))
        }
    }
}

fn build_frame(node: NodeView, ancestor: Option<Point>) -> Result<SceneElement, TransformError> {
    // The frame's own placement resolves against its parent frame; its
    // children resolve against this frame's absolute origin.
    let geom = geometry::resolve(node, ancestor)?;
    let origin = geometry::absolute_origin(node)?;

    let children = visible_children(node)
        .map(|child| build(child, Some(origin)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SceneElement::Frame(FrameElement {
        x: geom.x,
        y: geom.y,
        width: geom.width,
        height: geom.height,
        bg_color: style::fill_color(node),
        corner_radius: style::corner_radius(node),
        shadow: style::shadow(node),
        children,
    }))
}

fn build_text(node: NodeView, ancestor: Option<Point>) -> Result<SceneElement, TransformError> {
    let geom = geometry::resolve(node, ancestor)?;
    let (font_name, font_size) = style::font_properties(node).unwrap_or_else(|| {
        log::warn!("text node `{}` has no usable style block", node.name());
        (String::new(), 0.0)
    });
    let cased = style::apply_text_case(node.characters(), node.style());

    Ok(SceneElement::Text(TextElement {
        x: geom.x,
        y: geom.y,
        width: geom.width,
        height: geom.height,
        text_color: style::fill_color(node),
        font_name,
        font_size,
        text: style::escape_text(&cased),
    }))
}

/// Transform every visible direct child of the document's first canvas.
///
/// Only the top-level canvas is consulted; further pages are out of
/// scope. Each surviving root builds with no enclosing frame.
pub fn transform_roots(document: &Value) -> Result<Vec<SceneElement>, TransformError> {
    let canvas = document
        .get("document")
        .and_then(|doc| doc.get("children"))
        .and_then(Value::as_array)
        .and_then(|pages| pages.first())
        .ok_or_else(|| TransformError::MalformedDocument("document.children[0]".to_string()))?;

    let roots = canvas
        .get("children")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            TransformError::MalformedDocument("document.children[0].children".to_string())
        })?;

    roots
        .iter()
        .map(NodeView::new)
        .filter(NodeView::visible)
        .map(|root| build(root, None))
        .collect()
}

fn visible_children<'a>(node: NodeView<'a>) -> impl Iterator<Item = NodeView<'a>> {
    node.children()
        .iter()
        .map(NodeView::new)
        .filter(NodeView::visible)
}
