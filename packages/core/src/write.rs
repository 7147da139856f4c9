use crate::innerlude::RenderError;
use std::fmt::{Display, Formatter};

/// An opaque handle to a node in a display tree.
///
/// Trees may reuse the storage of removed nodes. The generation tells a stale handle apart
/// from the node that took over its slot, so a handle never silently points somewhere else.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// The root of a display tree. Trees hand this out for the node everything else hangs off.
    pub const ROOT: NodeId = NodeId::new(0);

    /// A first-generation handle for `index`.
    pub const fn new(index: usize) -> Self {
        Self::with_generation(index, 0)
    }

    pub const fn with_generation(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The storage slot this handle refers to.
    pub const fn index(self) -> usize {
        self.index
    }

    /// How many times the slot had been reused when this handle was issued.
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.generation {
            0 => write!(f, "#{}", self.index),
            generation => write!(f, "#{}v{}", self.index, generation),
        }
    }
}

/// A display tree the renderer can build into.
///
/// Nodes are created detached, filled in, and only then attached to a parent. Implementations
/// decide which tag and attribute names they accept and report rejections through
/// [`RenderError`].
pub trait WriteTree {
    /// Create a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> Result<NodeId, RenderError>;

    /// Create a detached text node.
    fn create_text_node(&mut self, text: &str) -> NodeId;

    /// Set an attribute on an element, replacing any previous value.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), RenderError>;

    /// Append a detached node as the last child of `parent`.
    ///
    /// `parent` itself may still be detached; this is how subtrees are assembled off-tree.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError>;

    /// Check that `parent` is part of the live tree and can hold children.
    fn can_append_to(&self, parent: NodeId) -> bool;

    /// Drop a node and everything below it. Handles into the dropped subtree stop being valid.
    fn discard(&mut self, node: NodeId);
}

impl<T: WriteTree + ?Sized> WriteTree for &mut T {
    fn create_element(&mut self, tag: &str) -> Result<NodeId, RenderError> {
        (**self).create_element(tag)
    }

    fn create_text_node(&mut self, text: &str) -> NodeId {
        (**self).create_text_node(text)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), RenderError> {
        (**self).set_attribute(node, name, value)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        (**self).append_child(parent, child)
    }

    fn can_append_to(&self, parent: NodeId) -> bool {
        (**self).can_append_to(parent)
    }

    fn discard(&mut self, node: NodeId) {
        (**self).discard(node)
    }
}
