//! Thin typed accessor over a raw Figma node
//!
//! A node arrives as a keyed JSON record owned by the caller. `NodeView`
//! borrows it and exposes the handful of fields the transform reads, with
//! the defaulting the Figma export format implies: an absent `visible`
//! means visible, absent lists read as empty.

use serde_json::Value;

/// A node's absolute bounding box, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Borrowing view over one raw scene-graph node
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    node: &'a Value,
}

static EMPTY: Vec<Value> = Vec::new();

impl<'a> NodeView<'a> {
    pub fn new(node: &'a Value) -> Self {
        Self { node }
    }

    pub fn id(&self) -> &'a str {
        self.str_field("id")
    }

    pub fn name(&self) -> &'a str {
        self.str_field("name")
    }

    pub fn node_type(&self) -> &'a str {
        self.str_field("type")
    }

    /// Absent `visible` means the node is visible
    pub fn visible(&self) -> bool {
        self.node
            .get("visible")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let bbox = self.node.get("absoluteBoundingBox")?;
        Some(BoundingBox {
            x: bbox.get("x")?.as_f64()?,
            y: bbox.get("y")?.as_f64()?,
            width: bbox.get("width")?.as_f64()?,
            height: bbox.get("height")?.as_f64()?,
        })
    }

    pub fn fills(&self) -> &'a [Value] {
        self.list_field("fills")
    }

    pub fn effects(&self) -> &'a [Value] {
        self.list_field("effects")
    }

    pub fn corner_radius(&self) -> Option<f64> {
        self.node.get("cornerRadius").and_then(Value::as_f64)
    }

    /// Per-corner radii. Parsed but not consumed by generation yet; only
    /// the scalar `cornerRadius` feeds emitted code.
    pub fn rectangle_corner_radii(&self) -> Option<[f64; 4]> {
        let radii = self.node.get("rectangleCornerRadii")?.as_array()?;
        match radii.as_slice() {
            [a, b, c, d] => Some([a.as_f64()?, b.as_f64()?, c.as_f64()?, d.as_f64()?]),
            _ => None,
        }
    }

    pub fn characters(&self) -> &'a str {
        self.str_field("characters")
    }

    pub fn style(&self) -> Option<&'a Value> {
        self.node.get("style")
    }

    pub fn children(&self) -> &'a [Value] {
        self.list_field("children")
    }

    fn str_field(&self, key: &str) -> &'a str {
        self.node.get(key).and_then(Value::as_str).unwrap_or("")
    }

    fn list_field(&self, key: &str) -> &'a [Value] {
        self.node
            .get(key)
            .and_then(Value::as_array)
            .unwrap_or(&EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visible_defaults_to_true() {
        let node = json!({ "id": "1", "name": "Frame 1" });
        assert!(NodeView::new(&node).visible());

        let hidden = json!({ "id": "2", "visible": false });
        assert!(!NodeView::new(&hidden).visible());
    }

    #[test]
    fn test_bounding_box_requires_all_fields() {
        let node = json!({
            "absoluteBoundingBox": { "x": 1.5, "y": 2.0, "width": 10.0, "height": 20.0 }
        });
        let bbox = NodeView::new(&node).bounding_box().unwrap();
        assert_eq!(bbox.x, 1.5);
        assert_eq!(bbox.height, 20.0);

        let partial = json!({ "absoluteBoundingBox": { "x": 1.0, "y": 2.0 } });
        assert!(NodeView::new(&partial).bounding_box().is_none());
    }

    #[test]
    fn test_absent_lists_read_as_empty() {
        let node = json!({ "id": "1" });
        let view = NodeView::new(&node);
        assert!(view.fills().is_empty());
        assert!(view.effects().is_empty());
        assert!(view.children().is_empty());
    }

    #[test]
    fn test_rectangle_corner_radii() {
        let node = json!({ "rectangleCornerRadii": [1.0, 2.0, 3.0, 4.0] });
        assert_eq!(
            NodeView::new(&node).rectangle_corner_radii(),
            Some([1.0, 2.0, 3.0, 4.0])
        );

        let short = json!({ "rectangleCornerRadii": [1.0, 2.0] });
        assert_eq!(NodeView::new(&short).rectangle_corner_radii(), None);
    }
}
