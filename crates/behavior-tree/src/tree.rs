//! Arena-backed tree and its evaluator.

use crate::{Blackboard, Node, NodeId, Status};

/// A validated behavior tree.
///
/// Nodes live in a flat arena; the only mutable evaluation state is one
/// cursor per [`Node::Sequence2`]. [`BehaviorTree::init`] re-arms every
/// cursor reachable from the root, so calling `init` before `process`
/// guarantees nothing leaks from one evaluation into the next.
///
/// Build trees with [`crate::TreeBuilder`].
#[derive(Clone, Debug)]
pub struct BehaviorTree<P, A> {
    nodes: Vec<Node<P, A>>,
    cursors: Vec<u8>,
    root: NodeId,
}

impl<P, A> BehaviorTree<P, A> {
    pub(crate) fn from_parts(nodes: Vec<Node<P, A>>, root: NodeId) -> Self {
        let cursors = vec![0; nodes.len()];
        Self {
            nodes,
            cursors,
            root,
        }
    }

    /// Root node of the tree.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node<P, A>> {
        self.nodes.get(id.0)
    }

    /// Resets the internal cursors of the whole tree.
    pub fn init(&mut self) {
        self.init_node(self.root);
    }

    /// Evaluates the tree from the root.
    pub fn process<B>(&mut self, blackboard: &mut B) -> Status
    where
        B: Blackboard<P, A>,
    {
        self.process_node(self.root, blackboard)
    }

    /// Runs `init` followed by `process`: one fresh, full evaluation.
    pub fn evaluate<B>(&mut self, blackboard: &mut B) -> Status
    where
        B: Blackboard<P, A>,
    {
        self.init();
        self.process(blackboard)
    }

    fn init_node(&mut self, id: NodeId) {
        match &self.nodes[id.0] {
            Node::Sequence2 { children } => {
                // Only the first child is armed; the second is initialized
                // when the first one succeeds.
                let first = children[0];
                self.cursors[id.0] = 0;
                self.init_node(first);
            }
            Node::Conditional {
                when_true,
                when_false,
                ..
            } => {
                let (when_true, when_false) = (*when_true, *when_false);
                self.init_node(when_true);
                self.init_node(when_false);
            }
            Node::Guard { child, .. } => {
                let child = *child;
                self.init_node(child);
            }
            Node::Action(_) => {}
        }
    }

    fn process_node<B>(&mut self, id: NodeId, blackboard: &mut B) -> Status
    where
        B: Blackboard<P, A>,
    {
        let next = match &self.nodes[id.0] {
            Node::Sequence2 { children } => {
                let children = *children;
                return self.process_pair(id, children, blackboard);
            }
            Node::Conditional {
                predicate,
                when_true,
                when_false,
            } => {
                if blackboard.check(predicate) {
                    *when_true
                } else {
                    *when_false
                }
            }
            Node::Guard { predicate, child } => {
                if !blackboard.check(predicate) {
                    return Status::Success;
                }
                *child
            }
            Node::Action(action) => return blackboard.perform(action),
        };

        self.process_node(next, blackboard)
    }

    fn process_pair<B>(&mut self, id: NodeId, children: [NodeId; 2], blackboard: &mut B) -> Status
    where
        B: Blackboard<P, A>,
    {
        let mut cursor = self.cursors[id.0] as usize;
        if cursor >= children.len() {
            return Status::Success;
        }

        let status = self.process_node(children[cursor], blackboard);
        if status != Status::Success {
            return status;
        }

        cursor += 1;
        self.cursors[id.0] = cursor as u8;
        if cursor >= children.len() {
            return Status::Success;
        }

        let next = children[cursor];
        self.init_node(next);
        self.process_node(next, blackboard)
    }
}
