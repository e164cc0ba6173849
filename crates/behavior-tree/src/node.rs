//! Node variants stored in a tree arena.
//!
//! The node set is closed: a pair-sequence, a binary conditional, a guarded
//! conditional and an action leaf. Children are referenced by [`NodeId`]
//! into the owning [`crate::BehaviorTree`] arena.

use core::fmt;

/// Index of a node inside a tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single behavior tree node.
///
/// # Semantics
///
/// - [`Node::Sequence2`]: runs the first child; only when it returns
///   `Success` is the second child initialized and run. `Failure` or
///   `Running` from either child short-circuits and propagates.
/// - [`Node::Conditional`]: evaluates the predicate and routes to exactly
///   one of its two children.
/// - [`Node::Guard`]: evaluates the predicate; on `false` returns `Success`
///   without touching the child.
/// - [`Node::Action`]: hands the action tag to the blackboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<P, A> {
    Sequence2 {
        children: [NodeId; 2],
    },
    Conditional {
        predicate: P,
        when_true: NodeId,
        when_false: NodeId,
    },
    Guard {
        predicate: P,
        child: NodeId,
    },
    Action(A),
}

impl<P, A> Node<P, A> {
    /// Returns the children referenced by this node, in evaluation order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        let (first, second) = match self {
            Node::Sequence2 { children } => (Some(children[0]), Some(children[1])),
            Node::Conditional {
                when_true,
                when_false,
                ..
            } => (Some(*when_true), Some(*when_false)),
            Node::Guard { child, .. } => (Some(*child), None),
            Node::Action(_) => (None, None),
        };
        first.into_iter().chain(second)
    }

    /// Short label used in logs and error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Node::Sequence2 { .. } => "sequence2",
            Node::Conditional { .. } => "conditional",
            Node::Guard { .. } => "guard",
            Node::Action(_) => "action",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_follow_evaluation_order() {
        let node: Node<(), ()> = Node::Conditional {
            predicate: (),
            when_true: NodeId(3),
            when_false: NodeId(1),
        };
        let children: Vec<_> = node.children().collect();
        assert_eq!(children, vec![NodeId(3), NodeId(1)]);

        let leaf: Node<(), ()> = Node::Action(());
        assert_eq!(leaf.children().count(), 0);
    }
}
