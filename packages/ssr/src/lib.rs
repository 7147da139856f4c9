//! Serialize a [`Document`](domkit_native_dom::Document) to HTML.

pub mod renderer;

use domkit_native_dom::{Document, NodeId};

pub use crate::renderer::Renderer;

/// A convenience function to render a whole document to a string
pub fn render(doc: &Document) -> String {
    Renderer::new().render(doc, doc.root())
}

/// A convenience function to render a single node (and everything below it) to a string
pub fn render_node(doc: &Document, node: NodeId) -> String {
    Renderer::new().render(doc, node)
}

/// A convenience function to render only what is inside a node, like `innerHTML`
pub fn render_inner(doc: &Document, node: NodeId) -> String {
    Renderer::new().render_inner(doc, node)
}
