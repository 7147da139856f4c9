use crate::names::{
    attribute_name_problem, attribute_value_problem, is_valid_element_name, is_void_element,
};
use domkit_core::{Attributes, NodeId, RenderError, WriteTree};
use slab::Slab;

/// The data carried by an element node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    /// The lowercased tag name.
    pub tag: String,
    /// The element's attributes, keyed by lowercased name.
    pub attributes: Attributes,
}

/// What kind of node this is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    /// The document node at the top of the tree.
    Root,
    /// An element.
    Element(ElementData),
    /// A run of text.
    Text(String),
}

/// A node in a [`Document`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn element_data(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Text nodes and void elements cannot hold children.
    pub fn can_have_children(&self) -> bool {
        match &self.data {
            NodeData::Root => true,
            NodeData::Element(data) => !is_void_element(&data.tag),
            NodeData::Text(_) => false,
        }
    }
}

/// An in-memory display tree.
///
/// Nodes live in a slab and refer to each other by [`NodeId`]. New nodes start out detached and
/// only become part of the visible tree once they are appended below the root.
///
/// Slots are reused after [`Document::remove`], but every reuse bumps the slot's generation, so
/// handles to removed nodes keep resolving to nothing.
#[derive(Debug)]
pub struct Document {
    nodes: Slab<Node>,
    generations: Vec<u32>,
    mount: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document containing only its root node.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Slab::new(),
            generations: Vec::new(),
            mount: None,
        };
        let id = doc.insert(NodeData::Root);
        debug_assert_eq!(id, NodeId::ROOT);

        doc
    }

    /// A document with an `html`/`head`/`body` skeleton and a `<div id="{mount_id}">` in the body
    /// for applications to render into.
    pub fn with_mount(mount_id: &str) -> Self {
        let mut doc = Self::new();

        let html = doc.insert_element("html", Attributes::new());
        doc.link(NodeId::ROOT, html);

        let head = doc.insert_element("head", Attributes::new());
        doc.link(html, head);

        let body = doc.insert_element("body", Attributes::new());
        doc.link(html, body);

        let mount = doc.insert_element("div", Attributes::from([("id", mount_id)]));
        doc.link(body, mount);

        doc.mount = Some(mount);
        doc
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The mount point created by [`Document::with_mount`], or the root if there is none.
    pub fn mount(&self) -> NodeId {
        self.mount.unwrap_or(NodeId::ROOT)
    }

    /// Resolve a handle. Handles to removed nodes resolve to `None`.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).filter(|node| node.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index()).filter(|node| node.id == id)
    }

    /// The number of nodes, detached ones and the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The children of `id`, or nothing if it does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.element_data().map(|data| data.tag.as_str())
    }

    pub fn attributes(&self, id: NodeId) -> Option<&Attributes> {
        Some(&self.get(id)?.element_data()?.attributes)
    }

    /// Look up an attribute. Names are matched case-insensitively, like in an HTML document.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)?.get(&name.to_ascii_lowercase())
    }

    /// All the text below `id`, concatenated in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.traverse_depth_first(id, |node| {
            if let NodeData::Text(value) = &node.data {
                text.push_str(value);
            }
        });
        text
    }

    /// Check whether `id` is reachable from the root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.ancestors(id).any(|ancestor| ancestor == NodeId::ROOT)
    }

    /// The first connected element whose `id` attribute equals `value`.
    pub fn find_by_id(&self, value: &str) -> Option<NodeId> {
        let mut found = None;
        self.traverse_depth_first(NodeId::ROOT, |node| {
            if found.is_none()
                && node
                    .element_data()
                    .is_some_and(|data| data.attributes.get("id") == Some(value))
            {
                found = Some(node.id);
            }
        });
        found
    }

    /// Visit `from` and everything below it in document order.
    pub fn traverse_depth_first(&self, from: NodeId, mut f: impl FnMut(&Node)) {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                f(node);
                stack.extend(node.children.iter().copied().rev());
            }
        }
    }

    /// Walk from `id` up to the top of its tree, `id` included.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.contains(id).then_some(id);
        std::iter::from_fn(move || {
            let id = current?;
            current = self.parent(id);
            Some(id)
        })
    }

    /// Detach `id` from its parent and free it along with all of its descendants.
    ///
    /// The root cannot be removed. Returns whether anything was removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == NodeId::ROOT {
            return false;
        }
        let Some(node) = self.free(id) else {
            return false;
        };

        if let Some(parent) = node.parent.and_then(|parent| self.get_mut(parent)) {
            parent.children.retain(|child| *child != id);
        }

        let mut stack = node.children;
        while let Some(next) = stack.pop() {
            if let Some(node) = self.free(next) {
                stack.extend(node.children);
            }
        }

        if self.mount.is_some_and(|mount| !self.contains(mount)) {
            self.mount = None;
        }

        tracing::trace!(node = %id, "removed subtree");
        true
    }

    /// A readable outline of the connected tree, one node per line.
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };

            out.push_str(&"  ".repeat(depth));
            match &node.data {
                NodeData::Root => out.push_str("#document"),
                NodeData::Text(text) => out.push_str(&format!("{text:?}")),
                NodeData::Element(data) => {
                    out.push('<');
                    out.push_str(&data.tag);
                    for (name, value) in data.attributes.iter() {
                        out.push_str(&format!(" {name}={value:?}"));
                    }
                    out.push('>');
                }
            }
            out.push('\n');

            stack.extend(node.children.iter().rev().map(|child| (*child, depth + 1)));
        }
        out
    }

    /// Log the tree at debug level.
    pub fn print_tree(&self) {
        tracing::debug!("document tree:\n{}", self.tree_string());
    }

    fn insert(&mut self, data: NodeData) -> NodeId {
        let entry = self.nodes.vacant_entry();
        let slot = entry.key();
        if slot == self.generations.len() {
            self.generations.push(0);
        }
        let id = NodeId::with_generation(slot, self.generations[slot]);
        entry.insert(Node {
            id,
            parent: None,
            children: Vec::new(),
            data,
        });
        id
    }

    /// Take a node out of its slot and retire the handle that pointed at it.
    fn free(&mut self, id: NodeId) -> Option<Node> {
        if !self.contains(id) {
            return None;
        }
        let node = self.nodes.try_remove(id.index())?;
        let generation = &mut self.generations[id.index()];
        *generation = generation.wrapping_add(1);
        Some(node)
    }

    fn insert_element(&mut self, tag: &str, attributes: Attributes) -> NodeId {
        self.insert(NodeData::Element(ElementData {
            tag: tag.to_string(),
            attributes,
        }))
    }

    /// Link two nodes that are already known to be compatible.
    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }
}

impl WriteTree for Document {
    fn create_element(&mut self, tag: &str) -> Result<NodeId, RenderError> {
        if !is_valid_element_name(tag) {
            tracing::warn!(tag, "rejected element name");
            return Err(RenderError::InvalidTag {
                tag: tag.to_string(),
            });
        }

        let id = self.insert_element(&tag.to_ascii_lowercase(), Attributes::new());
        tracing::trace!(node = %id, tag, "created element");
        Ok(id)
    }

    fn create_text_node(&mut self, text: &str) -> NodeId {
        let id = self.insert(NodeData::Text(text.to_string()));
        tracing::trace!(node = %id, "created text node");
        id
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), RenderError> {
        let reject = |reason: &str| {
            tracing::warn!(node = %node, name, reason, "rejected attribute");
            Err(RenderError::Attribute {
                key: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if let Some(reason) = attribute_name_problem(name).or_else(|| attribute_value_problem(value))
        {
            return reject(reason);
        }

        let Some(NodeData::Element(data)) = self.get_mut(node).map(|node| &mut node.data) else {
            return reject("target is not an element");
        };

        data.attributes.insert(name.to_ascii_lowercase(), value);
        tracing::trace!(node = %node, name, value, "set attribute");
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        if !self.get(parent).is_some_and(Node::can_have_children) {
            return Err(RenderError::InvalidParent { parent });
        }

        let detached = child != NodeId::ROOT && self.get(child).is_some_and(|c| c.parent.is_none());
        if !detached || self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(RenderError::InvalidChild { child });
        }

        self.link(parent, child);
        tracing::trace!(parent = %parent, child = %child, "appended child");
        Ok(())
    }

    fn can_append_to(&self, parent: NodeId) -> bool {
        self.get(parent).is_some_and(Node::can_have_children) && self.is_connected(parent)
    }

    fn discard(&mut self, node: NodeId) {
        self.remove(node);
    }
}
