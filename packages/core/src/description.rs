//! The declarative side of rendering: what a node should look like before it exists.

use std::collections::BTreeMap;

/// The attributes of an element, keyed by name.
///
/// Names are unique. Inserting a name that is already present replaces the old value, so when a
/// description is assembled from several sources the last write wins. Iteration is ordered by
/// name, which keeps serialized output stable even though the order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// An empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Look up the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Remove `name`, returning its value if it was set.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Check whether `name` is set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// What goes inside an element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Content {
    /// A literal string, shown as a single text node. Empty text produces no node.
    Text(String),

    /// Nested descriptions, rendered in order as children of the element.
    Children(Vec<ElementDescription>),
}

impl Content {
    /// Check if rendering this content would produce no child nodes.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Children(children) => children.is_empty(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<ElementDescription>> for Content {
    fn from(children: Vec<ElementDescription>) -> Self {
        Content::Children(children)
    }
}

/// A declarative description of one UI node: its tag, attributes and content.
///
/// Descriptions are values. They are assembled with the builder methods below, handed to
/// [`render`](crate::render) once, and dropped. The tag is not checked here; the display tree
/// decides whether it can construct it.
///
/// ```rust
/// use domkit_core::{Content, ElementDescription};
///
/// let list = ElementDescription::new("ul")
///     .attr("class", "menu")
///     .child(ElementDescription::new("li").text("one"))
///     .child(ElementDescription::new("li").text("two"));
///
/// assert_eq!(list.tag(), "ul");
/// assert!(matches!(list.content(), Content::Children(items) if items.len() == 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct ElementDescription {
    tag: String,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "Attributes::is_empty")
    )]
    attributes: Attributes,

    #[cfg_attr(feature = "serialize", serde(default))]
    content: Content,
}

impl ElementDescription {
    /// Describe an element with the given tag, no attributes and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            content: Content::default(),
        }
    }

    /// Set an attribute. Setting the same name twice keeps the later value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Set several attributes at once.
    pub fn attrs<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.extend(attributes);
        self
    }

    /// Replace the content with a literal string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Append a nested description.
    ///
    /// Any text content is replaced: an element holds either text or children.
    pub fn child(mut self, child: ElementDescription) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(_) => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Append several nested descriptions.
    pub fn children(self, children: impl IntoIterator<Item = ElementDescription>) -> Self {
        children.into_iter().fold(self, Self::child)
    }

    /// The content to place inside the element.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The tag of the element to create.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The attributes to apply to the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Split the description into its tag, attributes and content.
    pub fn into_parts(self) -> (String, Attributes, Content) {
        (self.tag, self.attributes, self.content)
    }
}
