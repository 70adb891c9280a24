//! Geometry resolution
//!
//! Positions in the built tree are relative to the nearest enclosing
//! frame's absolute origin; sizes are the node's absolute dimensions.
//! All values are truncated toward zero to integers.

use crate::errors::TransformError;
use crate::figma::node::NodeView;

/// An absolute origin on the canvas, threaded down from the nearest
/// enclosing frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A node's resolved placement: frame-relative position and truncated size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// A frame's absolute origin, threaded to its children as their
/// coordinate reference.
pub fn absolute_origin(node: NodeView) -> Result<Point, TransformError> {
    let bbox = node
        .bounding_box()
        .ok_or_else(|| TransformError::MissingGeometry {
            id: node.id().to_string(),
            name: node.name().to_string(),
        })?;
    Ok(Point { x: bbox.x, y: bbox.y })
}

/// Resolve a node's geometry against its nearest enclosing frame's
/// absolute origin. A node with no enclosing frame (a transform root)
/// sits at (0, 0) regardless of its true canvas position.
///
/// Known limitation: the relative offset is the *absolute difference* of
/// the two origins, so a child positioned left of or above its container
/// folds into a positive offset instead of a negative one.
pub fn resolve(node: NodeView, ancestor: Option<Point>) -> Result<Geometry, TransformError> {
    let bbox = node
        .bounding_box()
        .ok_or_else(|| TransformError::MissingGeometry {
            id: node.id().to_string(),
            name: node.name().to_string(),
        })?;

    let (x, y) = match ancestor {
        Some(origin) => ((bbox.x - origin.x).abs() as i64, (bbox.y - origin.y).abs() as i64),
        None => (0, 0),
    };

    Ok(Geometry {
        x,
        y,
        width: bbox.width as i64,
        height: bbox.height as i64,
    })
}
