//! Data models for the built element tree

pub mod element;

pub use element::{
    FrameElement, RectangleElement, SceneElement, Shadow, TextElement, UnknownElement,
};
