use thiserror::Error;

use crate::node::NodeId;

/// Structural errors raised by [`crate::tree::UiTree`] edits.
///
/// Lookups never fail this way; they return `Option` / empty `Vec` instead.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {0:?} is not part of this tree")]
    UnknownNode(NodeId),

    #[error("node {0:?} cannot hold children")]
    NotComposite(NodeId),

    #[error("both slots of split view {0:?} are occupied")]
    SlotsFull(NodeId),

    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}
