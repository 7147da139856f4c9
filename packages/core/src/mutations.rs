//! A display tree that only writes down what was asked of it.
//!
//! Handy for checking the exact sequence of calls a render makes without standing up a real
//! document.

use crate::innerlude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// One call made against a [`WriteTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum Mutation {
    /// A detached element was created.
    CreateElement {
        /// The requested tag.
        tag: String,
        /// The handle assigned to it.
        id: NodeId,
    },

    /// A detached text node was created.
    CreateTextNode {
        /// The text of the node.
        value: String,
        /// The handle assigned to it.
        id: NodeId,
    },

    /// An attribute was set on an element.
    SetAttribute {
        /// The attribute name.
        name: String,
        /// The attribute value.
        value: String,
        /// The element it was set on.
        id: NodeId,
    },

    /// A node was appended to a parent.
    AppendChild {
        /// The new parent.
        parent: NodeId,
        /// The node that was appended.
        child: NodeId,
    },

    /// A detached node was thrown away.
    Discard {
        /// The dropped node.
        id: NodeId,
    },
}

/// A [`WriteTree`] that accepts every tag and attribute and records each call in order.
///
/// Handles are handed out sequentially starting after [`NodeId::ROOT`].
#[derive(Debug, Default)]
pub struct Mutations {
    /// The calls made so far, oldest first.
    pub edits: Vec<Mutation>,

    created: usize,
    children: FxHashMap<NodeId, Vec<NodeId>>,
    discarded: FxHashSet<NodeId>,
}

impl Mutations {
    /// Take the recorded edits, leaving the recorder empty but keeping its handle counter.
    pub fn take(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.edits)
    }

    fn next_id(&mut self) -> NodeId {
        self.created += 1;
        NodeId::new(self.created)
    }

    fn is_live(&self, id: NodeId) -> bool {
        id == NodeId::ROOT
            || (id.generation() == 0
                && id.index() <= self.created
                && !self.discarded.contains(&id))
    }
}

impl WriteTree for Mutations {
    fn create_element(&mut self, tag: &str) -> Result<NodeId, RenderError> {
        let id = self.next_id();
        self.edits.push(Mutation::CreateElement {
            tag: tag.to_string(),
            id,
        });
        Ok(id)
    }

    fn create_text_node(&mut self, text: &str) -> NodeId {
        let id = self.next_id();
        self.edits.push(Mutation::CreateTextNode {
            value: text.to_string(),
            id,
        });
        id
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), RenderError> {
        if !self.is_live(node) {
            return Err(RenderError::attribute(name, format!("node {node} does not exist")));
        }
        self.edits.push(Mutation::SetAttribute {
            name: name.to_string(),
            value: value.to_string(),
            id: node,
        });
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        if !self.is_live(parent) {
            return Err(RenderError::InvalidParent { parent });
        }
        if child == NodeId::ROOT || !self.is_live(child) {
            return Err(RenderError::InvalidChild { child });
        }
        self.children.entry(parent).or_default().push(child);
        self.edits.push(Mutation::AppendChild { parent, child });
        Ok(())
    }

    fn can_append_to(&self, parent: NodeId) -> bool {
        self.is_live(parent)
    }

    fn discard(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(next) = stack.pop() {
            if self.discarded.insert(next) {
                stack.extend(self.children.remove(&next).unwrap_or_default());
            }
        }
        self.edits.push(Mutation::Discard { id: node });
    }
}
