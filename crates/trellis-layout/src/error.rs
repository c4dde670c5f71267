use thiserror::Error;
use trellis_units::LengthError;

use crate::tree::NodeId;

/// A configuration document that could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the expected shape.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// The update interval must be a positive, finite number of time units.
    #[error("update interval must be positive, got {0}")]
    InvalidInterval(f64),
    /// The scrollbar thickness must be a non-negative, finite number of pixels.
    #[error("scrollbar thickness must be non-negative, got {0}")]
    InvalidScrollbarThickness(f64),
    /// A scroll step is not a valid length.
    #[error("invalid scroll step: {0}")]
    InvalidScrollStep(#[from] LengthError),
}

/// A structural operation on a [`LayoutTree`](crate::LayoutTree) that the
/// tree's shape does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No node with this id exists.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
    /// Only containers can own children.
    #[error("cannot attach children to leaf {0:?}")]
    LeafParent(NodeId),
    /// The child is already attached somewhere.
    #[error("node {child:?} already has parent {parent:?}")]
    AlreadyAttached {
        /// The node being attached.
        child: NodeId,
        /// Its current parent.
        parent: NodeId,
    },
    /// Attaching would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// The node being attached.
        child: NodeId,
        /// The requested parent.
        parent: NodeId,
    },
}

/// A scene description that could not be turned into a tree.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The document is not valid scene JSON.
    #[error("malformed scene: {0}")]
    Json(#[from] serde_json::Error),
    /// Building the tree failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
