//! # domkit-core
//!
//! Plain descriptions of UI nodes and the renderer that turns them into real nodes.
//!
//! An [`ElementDescription`] names a tag, a set of attributes and some content. [`render`] takes
//! one of these, builds the concrete node inside any display tree implementing [`WriteTree`] and
//! appends it to the parent you point it at. There is no diffing and no update path: every call
//! produces fresh nodes.
//!
//! ```rust
//! use domkit_core::{render, ElementDescription, Mutations, NodeId};
//!
//! let link = ElementDescription::new("a")
//!     .attr("href", "https://example.com")
//!     .text("go");
//!
//! let mut edits = Mutations::default();
//! render(link, NodeId::ROOT, &mut edits).unwrap();
//! // create, set attribute, create text, append text, append link
//! assert_eq!(edits.edits.len(), 5);
//! ```

#![warn(missing_docs)]

mod description;
mod error;
mod mutations;
mod render;
mod write;

pub(crate) mod innerlude {
    pub use crate::description::*;
    pub use crate::error::*;
    pub use crate::mutations::*;
    pub use crate::render::*;
    pub use crate::write::*;
}

pub use crate::innerlude::{
    render, Attributes, Content, ElementDescription, Mutation, Mutations, NodeId, RenderError,
    WriteTree,
};
