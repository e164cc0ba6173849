//! Errors raised while assembling a tree.

use crate::NodeId;

/// Structural problems detected by [`crate::TreeBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("behavior tree has no nodes")]
    Empty,

    #[error("root {root} is outside the arena of {len} nodes")]
    UnknownRoot { root: NodeId, len: usize },

    #[error("node {parent} references {child}, which is not an earlier node")]
    ForwardReference { parent: NodeId, child: NodeId },
}
