//! Topic-based event bus for battle events.
//!
//! The bus implements both sinks, so a host can hand it to the driver and
//! let any number of consumers subscribe to just the topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
