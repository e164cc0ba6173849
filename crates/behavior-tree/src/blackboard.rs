//! Core blackboard trait.
//!
//! Nodes in this crate carry only data: a predicate tag or an action tag.
//! The [`Blackboard`] gives those tags meaning. It is the one place where a
//! tree touches the outside world, so the tree itself stays plain data and
//! can be inspected, cloned, and evaluated without virtual dispatch.

use crate::Status;

/// Context a tree is evaluated against.
///
/// `P` is the predicate tag stored in conditional nodes and `A` the action
/// tag stored in leaves.
pub trait Blackboard<P, A> {
    /// Evaluates a predicate against the current context.
    fn check(&self, predicate: &P) -> bool;

    /// Performs an action leaf.
    ///
    /// Leaves may mutate the blackboard (e.g. to store the chosen move) and
    /// report `Success`, `Failure` or `Running`.
    fn perform(&mut self, action: &A) -> Status;
}
