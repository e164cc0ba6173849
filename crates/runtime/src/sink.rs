//! Outbound seams to the host: audio/visual cues and scene changes.

use combat_core::{BattleOutcome, CombatEffect, EntityId};
use serde::{Deserialize, Serialize};

/// Request to leave the battle scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneReturn {
    pub outcome: BattleOutcome,
    pub enemy: EntityId,
    pub counterpart: EntityId,
    /// Whether the overworld counterpart should be removed. Only a win does.
    pub remove_counterpart: bool,
    /// Score after the battle was settled.
    pub score: u32,
}

/// Receives cues and visuals. Fire-and-forget: a sink never reports failure
/// back into combat.
pub trait CueSink {
    fn emit(&mut self, effect: &CombatEffect);
}

/// Receives scene-transition requests when a battle ends.
pub trait SceneSink {
    fn return_to_overworld(&mut self, request: SceneReturn);
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl CueSink for NullSink {
    fn emit(&mut self, _effect: &CombatEffect) {}
}

impl SceneSink for NullSink {
    fn return_to_overworld(&mut self, _request: SceneReturn) {}
}

impl<T: CueSink + ?Sized> CueSink for Box<T> {
    fn emit(&mut self, effect: &CombatEffect) {
        (**self).emit(effect);
    }
}

impl<T: SceneSink + ?Sized> SceneSink for Box<T> {
    fn return_to_overworld(&mut self, request: SceneReturn) {
        (**self).return_to_overworld(request);
    }
}

/// Sink that keeps everything it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub effects: Vec<CombatEffect>,
    pub returns: Vec<SceneReturn>,
}

impl CueSink for RecordingSink {
    fn emit(&mut self, effect: &CombatEffect) {
        self.effects.push(effect.clone());
    }
}

impl SceneSink for RecordingSink {
    fn return_to_overworld(&mut self, request: SceneReturn) {
        self.returns.push(request);
    }
}
