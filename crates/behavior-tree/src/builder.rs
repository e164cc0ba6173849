//! Builder utilities for ergonomic behavior tree construction.
//!
//! Nodes are appended bottom-up: a parent can only reference nodes that
//! were created before it, so every tree built here is acyclic. The builder
//! hands out [`NodeId`]s and [`TreeBuilder::build`] checks that every id
//! refers to a node of the same arena.

use crate::{BehaviorTree, Node, NodeId, TreeError};

/// Incrementally assembles a [`BehaviorTree`].
#[derive(Debug)]
pub struct TreeBuilder<P, A> {
    nodes: Vec<Node<P, A>>,
}

impl<P, A> Default for TreeBuilder<P, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, A> TreeBuilder<P, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a raw node and returns its id.
    pub fn push(&mut self, node: Node<P, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Creates a pair-sequence node.
    #[inline]
    pub fn sequence2(&mut self, first: NodeId, second: NodeId) -> NodeId {
        self.push(Node::Sequence2 {
            children: [first, second],
        })
    }

    /// Creates a binary conditional node.
    #[inline]
    pub fn conditional(&mut self, predicate: P, when_true: NodeId, when_false: NodeId) -> NodeId {
        self.push(Node::Conditional {
            predicate,
            when_true,
            when_false,
        })
    }

    /// Creates a guarded conditional node.
    #[inline]
    pub fn guard(&mut self, predicate: P, child: NodeId) -> NodeId {
        self.push(Node::Guard { predicate, child })
    }

    /// Creates an action leaf.
    #[inline]
    pub fn action(&mut self, action: A) -> NodeId {
        self.push(Node::Action(action))
    }

    /// Validates the arena and freezes it into a tree rooted at `root`.
    pub fn build(self, root: NodeId) -> Result<BehaviorTree<P, A>, TreeError> {
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }
        if root.0 >= self.nodes.len() {
            return Err(TreeError::UnknownRoot {
                root,
                len: self.nodes.len(),
            });
        }

        for (index, node) in self.nodes.iter().enumerate() {
            for child in node.children() {
                if child.0 >= index {
                    return Err(TreeError::ForwardReference {
                        parent: NodeId(index),
                        child,
                    });
                }
            }
        }

        Ok(BehaviorTree::from_parts(self.nodes, root))
    }
}
