use crate::innerlude::NodeId;

/// Why a description could not be rendered.
///
/// Every variant is reported synchronously from [`render`](crate::render). Nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The display tree cannot construct an element with this tag.
    #[error("`{tag}` is not a valid element name")]
    InvalidTag {
        /// The rejected tag name.
        tag: String,
    },

    /// The parent handle does not point at a node that can hold children.
    #[error("node {parent} does not exist in the tree or cannot hold children")]
    InvalidParent {
        /// The rejected parent handle.
        parent: NodeId,
    },

    /// A node could not be attached because it is missing or already has a parent.
    #[error("node {child} cannot be attached")]
    InvalidChild {
        /// The rejected child handle.
        child: NodeId,
    },

    /// Applying an attribute failed.
    #[error("failed to set attribute `{key}`: {reason}")]
    Attribute {
        /// The name of the offending attribute.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl RenderError {
    pub(crate) fn attribute(key: &str, reason: impl Into<String>) -> Self {
        RenderError::Attribute {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
