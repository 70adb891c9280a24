//! Raw Figma node access and attribute resolution
//!
//! The raw document is kept as `serde_json::Value` and read through the
//! [`NodeView`] accessor; `geometry` and `style` resolve a node's visual
//! attributes into the values carried by the built element tree.

pub mod geometry;
pub mod node;
pub mod style;

pub use geometry::{Geometry, Point};
pub use node::{BoundingBox, NodeView};
