//! Turning descriptions into nodes.

use crate::innerlude::*;

/// Materialize `description` and append it as the last child of `parent`.
///
/// The element is created detached, given its attributes and content, and attached only once all
/// of that succeeded. If anything fails the partial subtree is discarded and `parent` is left
/// exactly as it was.
///
/// Rendering the same description twice produces two sibling nodes. Nothing is ever updated in
/// place.
///
/// Returns the handle of the new element.
pub fn render(
    description: ElementDescription,
    parent: NodeId,
    tree: &mut impl WriteTree,
) -> Result<NodeId, RenderError> {
    if !tree.can_append_to(parent) {
        tracing::debug!(%parent, "refusing to render into an unusable parent");
        return Err(RenderError::InvalidParent { parent });
    }

    tracing::debug!(tag = description.tag(), %parent, "rendering element");

    let node = build(description, tree)?;
    attach(tree, parent, node)?;

    Ok(node)
}

/// Create a detached element with all of its attributes and content.
fn build(description: ElementDescription, tree: &mut impl WriteTree) -> Result<NodeId, RenderError> {
    let (tag, attributes, content) = description.into_parts();

    let node = tree.create_element(&tag)?;

    if let Err(err) = fill(tree, node, attributes, content) {
        tree.discard(node);
        return Err(err);
    }

    Ok(node)
}

fn fill(
    tree: &mut impl WriteTree,
    node: NodeId,
    attributes: Attributes,
    content: Content,
) -> Result<(), RenderError> {
    for (name, value) in attributes.iter() {
        tree.set_attribute(node, name, value)?;
    }

    match content {
        Content::Text(text) if text.is_empty() => {}
        Content::Text(text) => {
            let text = tree.create_text_node(&text);
            attach(tree, node, text)?;
        }
        Content::Children(children) => {
            for child in children {
                let child = build(child, tree)?;
                attach(tree, node, child)?;
            }
        }
    }

    Ok(())
}

/// Attach a detached node, dropping it if the tree refuses.
fn attach(tree: &mut impl WriteTree, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
    tree.append_child(parent, child).inspect_err(|_| tree.discard(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Wraps the recorder and rejects one attribute name.
    struct Picky {
        inner: Mutations,
        forbidden: &'static str,
    }

    impl WriteTree for Picky {
        fn create_element(&mut self, tag: &str) -> Result<NodeId, RenderError> {
            self.inner.create_element(tag)
        }

        fn create_text_node(&mut self, text: &str) -> NodeId {
            self.inner.create_text_node(text)
        }

        fn set_attribute(
            &mut self,
            node: NodeId,
            name: &str,
            value: &str,
        ) -> Result<(), RenderError> {
            if name == self.forbidden {
                return Err(RenderError::attribute(name, "forbidden"));
            }
            self.inner.set_attribute(node, name, value)
        }

        fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
            self.inner.append_child(parent, child)
        }

        fn can_append_to(&self, parent: NodeId) -> bool {
            self.inner.can_append_to(parent)
        }

        fn discard(&mut self, node: NodeId) {
            self.inner.discard(node)
        }
    }

    #[test]
    fn construction_order() {
        let mut edits = Mutations::default();
        let link = ElementDescription::new("a")
            .attr("href", "https://example.com")
            .text("go");

        let id = render(link, NodeId::ROOT, &mut edits).unwrap();

        assert_eq!(id, NodeId::new(1));
        assert_eq!(
            edits.edits,
            [
                Mutation::CreateElement {
                    tag: "a".to_string(),
                    id: NodeId::new(1)
                },
                Mutation::SetAttribute {
                    name: "href".to_string(),
                    value: "https://example.com".to_string(),
                    id: NodeId::new(1)
                },
                Mutation::CreateTextNode {
                    value: "go".to_string(),
                    id: NodeId::new(2)
                },
                Mutation::AppendChild {
                    parent: NodeId::new(1),
                    child: NodeId::new(2)
                },
                Mutation::AppendChild {
                    parent: NodeId::ROOT,
                    child: NodeId::new(1)
                },
            ]
        );
    }

    #[test]
    fn empty_text_creates_no_node() {
        let mut edits = Mutations::default();
        render(ElementDescription::new("div"), NodeId::ROOT, &mut edits).unwrap();

        assert_eq!(
            edits.edits,
            [
                Mutation::CreateElement {
                    tag: "div".to_string(),
                    id: NodeId::new(1)
                },
                Mutation::AppendChild {
                    parent: NodeId::ROOT,
                    child: NodeId::new(1)
                },
            ]
        );
    }

    #[test]
    fn children_are_built_before_the_parent_is_attached() {
        let mut edits = Mutations::default();
        let list = ElementDescription::new("ul")
            .child(ElementDescription::new("li").text("one"))
            .child(ElementDescription::new("li"));

        render(list, NodeId::ROOT, &mut edits).unwrap();

        let appends: Vec<_> = edits
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::AppendChild { parent, child } => {
                    Some((parent.index(), child.index()))
                }
                _ => None,
            })
            .collect();

        // ul = 1, first li = 2 with text 3, second li = 4
        assert_eq!(appends, [(2, 3), (1, 2), (1, 4), (0, 1)]);
    }

    #[test]
    fn unknown_parent_is_rejected_before_anything_is_created() {
        let mut edits = Mutations::default();
        let missing = NodeId::new(42);
        let err = render(ElementDescription::new("div"), missing, &mut edits).unwrap_err();

        assert_eq!(err, RenderError::InvalidParent { parent: missing });
        assert!(edits.edits.is_empty());
    }

    #[test]
    fn failed_attribute_discards_the_detached_node() {
        let mut tree = Picky {
            inner: Mutations::default(),
            forbidden: "onclick",
        };
        let button = ElementDescription::new("button")
            .attr("class", "primary")
            .attr("onclick", "alert(1)")
            .text("press");

        let err = render(button, NodeId::ROOT, &mut tree).unwrap_err();

        assert!(matches!(err, RenderError::Attribute { ref key, .. } if key == "onclick"));
        assert_eq!(
            tree.inner.edits.last(),
            Some(&Mutation::Discard { id: NodeId::new(1) })
        );
        assert!(!tree
            .inner
            .edits
            .iter()
            .any(|edit| matches!(edit, Mutation::AppendChild { .. })));
    }

    #[test]
    fn failure_deep_in_the_tree_discards_from_the_top() {
        let mut tree = Picky {
            inner: Mutations::default(),
            forbidden: "bad",
        };
        let nested = ElementDescription::new("section").child(
            ElementDescription::new("div").child(ElementDescription::new("span").attr("bad", "")),
        );

        render(nested, NodeId::ROOT, &mut tree).unwrap_err();

        let discarded: Vec<_> = tree
            .inner
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::Discard { id } => Some(id.index()),
                _ => None,
            })
            .collect();

        // span (3), then div (2), then section (1)
        assert_eq!(discarded, [3, 2, 1]);
    }
}
