//! Fragment emission
//!
//! Serializes a built element tree into nested textual layout
//! declarations. The core is template-engine-agnostic: a
//! [`FragmentRenderer`] turns one element into one fragment, and a frame's
//! fragment wraps the ordered fragments of its children. The Flet target
//! under [`flet`] is the reference implementation.

pub mod flet;

use crate::errors::EmitError;
use crate::models::{FrameElement, RectangleElement, SceneElement, TextElement, UnknownElement};

pub use flet::FletRenderer;

/// Renders one fragment per element variant, plus the outer artifact.
///
/// `children` arrives already rendered and in source order; a frame
/// renderer substitutes the fragments into its container slot without
/// reordering, dropping, or duplicating them.
pub trait FragmentRenderer {
    fn frame(&self, frame: &FrameElement, children: Vec<String>) -> Result<String, EmitError>;
    fn rectangle(&self, rectangle: &RectangleElement) -> Result<String, EmitError>;
    fn text(&self, text: &TextElement) -> Result<String, EmitError>;
    fn unknown(&self, unknown: &UnknownElement) -> Result<String, EmitError>;

    /// Compose the top-level fragments (one per transform root) into the
    /// final generated artifact.
    fn page(&self, fragments: Vec<String>) -> Result<String, EmitError>;
}

/// Recursively emit the fragment for an element subtree.
///
/// Depth-first, pure over the tree, exactly one fragment per element. The
/// exhaustive match is the guarantee that every classifier variant has an
/// emitter counterpart.
pub fn emit(element: &SceneElement, renderer: &dyn FragmentRenderer) -> Result<String, EmitError> {
    match element {
        SceneElement::Frame(frame) => {
            let children = frame
                .children
                .iter()
                .map(|child| emit(child, renderer))
                .collect::<Result<Vec<_>, _>>()?;
            renderer.frame(frame, children)
        }
        SceneElement::Rectangle(rectangle) => renderer.rectangle(rectangle),
        SceneElement::Text(text) => renderer.text(text),
        SceneElement::Unknown(unknown) => renderer.unknown(unknown),
    }
}
