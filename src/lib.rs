//! Figma design-to-code generator
//!
//! Transforms a Figma file's scene graph (frames, groups, rectangles, text)
//! into nested declarative layout code. The transform itself is a pure
//! function of the input tree; fetching the document and writing the
//! generated artifact happen at the collaborator boundaries in [`api`].

pub mod api;
pub mod builder;
pub mod errors;
pub mod figma;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use builder::{build, classify, transform_roots, ElementKind};
pub use errors::{EmitError, GenerateError, TransformError};
pub use models::{FrameElement, RectangleElement, SceneElement, Shadow, TextElement, UnknownElement};
pub use renderers::{emit, FragmentRenderer};
