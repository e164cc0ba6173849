//! Runtime glue between a host loop and the combat engine.
//!
//! The host calls [`CombatDriver::tick`] once per frame. Input producers hold
//! an [`InputHandle`] and never touch the battle directly; effects leave
//! through the [`CueSink`] and [`SceneSink`] seams.
//!
//! Modules are organized by responsibility:
//! - [`driver`] owns the battle session and the per-tick pipeline
//! - [`input`] decodes menu clicks and gestures into commands
//! - [`sink`] defines the outbound seams
//! - [`events`] provides a topic-based bus implementing both sinks
pub mod driver;
pub mod error;
pub mod events;
pub mod input;
pub mod sink;

pub use driver::CombatDriver;
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, Topic};
pub use input::{GestureKind, InputEvent, InputHandle, Intent, MenuButton, MenuState, Point};
pub use sink::{CueSink, NullSink, RecordingSink, SceneReturn, SceneSink};
