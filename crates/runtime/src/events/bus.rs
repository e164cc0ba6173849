//! Topic-based event bus implementation.

use combat_core::CombatEffect;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::sink::{CueSink, SceneReturn, SceneSink};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Cues, visuals and health changes during a battle
    Combat,
    /// Battle endings
    Scene,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Effect(CombatEffect),
    SceneReturn(SceneReturn),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Effect(_) => Topic::Combat,
            Event::SceneReturn(_) => Topic::Scene,
        }
    }
}

/// Topic-based event bus
///
/// Publishing is best-effort: events sent while nobody listens are dropped.
#[derive(Debug, Clone)]
pub struct EventBus {
    combat: broadcast::Sender<Event>,
    scene: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            combat: broadcast::channel(capacity).0,
            scene: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Scene => &self.scene,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!(?topic, "no subscribers");
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl CueSink for EventBus {
    fn emit(&mut self, effect: &CombatEffect) {
        self.publish(Event::Effect(effect.clone()));
    }
}

impl SceneSink for EventBus {
    fn return_to_overworld(&mut self, request: SceneReturn) {
        self.publish(Event::SceneReturn(request));
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{AudioCue, BattleOutcome, EntityId};

    use super::*;

    #[test]
    fn subscribers_only_see_their_topic() {
        let mut bus = EventBus::new();
        let mut combat = bus.subscribe(Topic::Combat);
        let mut scene = bus.subscribe(Topic::Scene);

        bus.emit(&CombatEffect::Cue(AudioCue::Attack));
        bus.return_to_overworld(SceneReturn {
            outcome: BattleOutcome::Win,
            enemy: EntityId(1),
            counterpart: EntityId(2),
            remove_counterpart: true,
            score: 1,
        });

        assert_eq!(
            combat.try_recv().ok(),
            Some(Event::Effect(CombatEffect::Cue(AudioCue::Attack)))
        );
        assert!(combat.try_recv().is_err());
        assert!(matches!(scene.try_recv(), Ok(Event::SceneReturn(r)) if r.score == 1));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::with_capacity(4);
        bus.publish(Event::Effect(CombatEffect::Cue(AudioCue::Death)));
    }
}
