//! Lightweight behavior tree library for turn-based games.
//!
//! Trees are plain data: nodes live in an arena, reference their children by
//! index, and carry only a predicate tag or an action tag. A [`Blackboard`]
//! interprets those tags during evaluation, so the whole tree is evaluated
//! with a single `match` instead of virtual calls.
//!
//! - **Closed node set**: [`Node::Sequence2`], [`Node::Conditional`],
//!   [`Node::Guard`], [`Node::Action`]
//! - **Three outcomes**: [`Status::Running`], [`Status::Success`],
//!   [`Status::Failure`]
//! - **Explicit reset**: [`BehaviorTree::init`] re-arms every composite
//!   before [`BehaviorTree::process`]
//!
//! # Architecture
//!
//! - [`Blackboard`]: trait giving meaning to predicate and action tags
//! - [`TreeBuilder`]: bottom-up construction with validation
//! - [`BehaviorTree`]: validated arena plus evaluator

pub mod blackboard;
pub mod builder;
pub mod error;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use blackboard::Blackboard;
pub use builder::TreeBuilder;
pub use error::TreeError;
pub use node::{Node, NodeId};
pub use status::Status;
pub use tree::BehaviorTree;
