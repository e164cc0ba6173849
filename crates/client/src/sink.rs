//! Sinks that report battle output through tracing.
use combat_core::CombatEffect;
use combat_runtime::{CueSink, SceneReturn, SceneSink};

#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn emit(&mut self, effect: &CombatEffect) {
        match effect {
            CombatEffect::Cue(cue) => tracing::info!(?cue, "cue"),
            CombatEffect::HealthChanged { side, health, .. } => {
                tracing::info!(?side, health, "health changed")
            }
            CombatEffect::EnemyMoveChosen(chosen) => tracing::info!(%chosen, "enemy move"),
            other => tracing::debug!(?other, "effect"),
        }
    }
}

impl SceneSink for LogSink {
    fn return_to_overworld(&mut self, request: SceneReturn) {
        tracing::info!(
            outcome = %request.outcome,
            remove_counterpart = request.remove_counterpart,
            score = request.score,
            "returning to overworld"
        );
    }
}
