//! Rendering a hand-written element description into the page's `#root` container.

use domkit_core::{render, ElementDescription, NodeId, RenderError};
use domkit_native_dom::Document;

/// The link the exercise renders.
pub fn link() -> ElementDescription {
    ElementDescription::new("a")
        .attr("href", "https://google.com")
        .attr("target", "_blank")
        .text("Click me to visit Google")
}

/// Render [`link`] into the document's mount point.
pub fn mount(doc: &mut Document) -> Result<NodeId, RenderError> {
    let container = doc.mount();
    render(link(), container, doc)
}
