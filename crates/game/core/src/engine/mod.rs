//! The battle session and its phase state machine.
//!
//! A [`Battle`] is driven one tick at a time by [`Battle::step`], which runs
//! two passes in order:
//!
//! 1. **resolve**: applies the effects of being in the current phase
//!    (health changes, cues, the enemy's decision) and returns them as a
//!    [`Resolution`]
//! 2. **advance**: records the current phase as the previous one and moves
//!    to the next phase
//!
//! Player input reaches the battle only through [`Battle::submit`], which
//! fills the single pending-action slot read by the WAIT phase.

mod advance;
mod effects;
mod history;
mod phase;
mod resolve;

pub use effects::{AudioCue, BattleOutcome, CombatEffect, Resolution, Side, VisualEffect};
pub use history::{EnemyHistory, MoveRecord};
pub use phase::CombatPhase;

use core::time::Duration;

use crate::action::{Move, PlayerAction, PlayerCommand, default_repertoire};
use crate::config::CombatConfig;
use crate::decision::{DecisionOverrides, EnemyBrain, enemy_brain};
use crate::error::CombatError;
use crate::state::{
    EncounterMultipliers, EntityId, Fighter, HealthBar, PathogenKind, Sickman, scale_damage,
};

/// Everything needed to open a battle.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleSetup {
    pub enemy: EntityId,
    /// Overworld entity that started the encounter.
    pub counterpart: EntityId,
    pub player: Fighter,
    /// Enemy repertoire. Empty means the default repertoire.
    pub moves: Vec<Move>,
    pub multipliers: EncounterMultipliers,
    pub pathogen: PathogenKind,
}

impl BattleSetup {
    pub fn new(enemy: EntityId, counterpart: EntityId, player: Fighter) -> Self {
        Self {
            enemy,
            counterpart,
            player,
            moves: Vec::new(),
            multipliers: EncounterMultipliers::default(),
            pathogen: PathogenKind::default(),
        }
    }

    #[must_use]
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    #[must_use]
    pub fn with_multipliers(mut self, multipliers: EncounterMultipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    #[must_use]
    pub fn with_pathogen(mut self, pathogen: PathogenKind) -> Self {
        self.pathogen = pathogen;
        self
    }
}

/// One player-versus-enemy battle.
#[derive(Clone, Debug)]
pub struct Battle {
    enemy: EntityId,
    counterpart: EntityId,

    current: CombatPhase,
    prev: CombatPhase,
    pending_action: PlayerAction,
    staged_move: Option<Move>,

    all_moves: Vec<Move>,
    /// Untried offence moves; popped from the back.
    moves_remaining: Vec<Move>,
    history: EnemyHistory,
    current_enemy_move: Option<Move>,
    current_player_move: Option<Move>,

    player: Fighter,
    enemy_fighter: Fighter,
    player_bar: HealthBar,
    enemy_bar: HealthBar,
    sickman: Sickman,
    damage_reduction: f32,

    cooldown_remaining: Duration,
    /// Set while the defeated enemy's particles are still playing.
    particles_remaining: Option<Duration>,

    config: CombatConfig,
    brain: EnemyBrain,
}

impl Battle {
    /// Opens a battle in the WAIT phase.
    pub fn start(setup: BattleSetup, config: CombatConfig) -> Result<Self, CombatError> {
        let BattleSetup {
            enemy,
            counterpart,
            player,
            moves,
            multipliers,
            pathogen,
        } = setup;

        let all_moves = if moves.is_empty() {
            tracing::warn!(%enemy, "encounter has no moves, using default repertoire");
            default_repertoire()
        } else {
            moves
        };
        let moves_remaining = all_moves.iter().filter(|m| m.is_offence()).cloned().collect();

        let enemy_health = scale_damage(config.max_health, multipliers.health_multiplier);
        let enemy_fighter = Fighter {
            health: enemy_health,
            max_health: enemy_health,
            damage_multiplier: multipliers.damage_multiplier,
        };

        let brain = enemy_brain()?;

        tracing::info!(
            %enemy,
            %counterpart,
            %pathogen,
            player_health = player.health,
            enemy_health,
            moves = all_moves.len(),
            "battle started"
        );

        Ok(Self {
            enemy,
            counterpart,
            current: CombatPhase::Wait,
            prev: CombatPhase::Wait,
            pending_action: PlayerAction::Idle,
            staged_move: None,
            all_moves,
            moves_remaining,
            history: EnemyHistory::new(),
            current_enemy_move: None,
            current_player_move: None,
            player_bar: HealthBar::for_fighter(&player, config.health_bar_scale),
            enemy_bar: HealthBar::for_fighter(&enemy_fighter, config.health_bar_scale),
            player,
            enemy_fighter,
            sickman: Sickman::new(pathogen),
            damage_reduction: multipliers.damage_reduction,
            cooldown_remaining: Duration::ZERO,
            particles_remaining: None,
            config,
            brain,
        })
    }

    /// Offers a player command to the pending-action slot.
    ///
    /// Commands are only accepted while the battle waits for the player.
    /// Attacks, items and swaps need an empty slot; running away always
    /// replaces whatever is pending. Returns whether the command was taken.
    pub fn submit(&mut self, command: PlayerCommand) -> bool {
        if self.current != CombatPhase::Wait {
            tracing::debug!(phase = %self.current, ?command, "input outside WAIT dropped");
            return false;
        }

        match command {
            PlayerCommand::Run => {
                self.pending_action = PlayerAction::Run;
                true
            }
            _ if self.pending_action != PlayerAction::Idle => false,
            PlayerCommand::Attack(attack) => {
                self.staged_move = Some(attack);
                self.pending_action = PlayerAction::Attack;
                true
            }
            PlayerCommand::UseItem => {
                self.pending_action = PlayerAction::UseItem;
                true
            }
            PlayerCommand::Swap => {
                self.pending_action = PlayerAction::Swap;
                true
            }
        }
    }

    /// Runs one tick: resolve the current phase, then advance.
    pub fn step(
        &mut self,
        elapsed: Duration,
        overrides: DecisionOverrides,
    ) -> Result<Resolution, CombatError> {
        let resolution = self.resolve(elapsed, overrides)?;
        self.advance();
        Ok(resolution)
    }

    #[cfg(test)]
    pub(crate) fn set_phase(&mut self, current: CombatPhase, prev: CombatPhase) {
        self.current = current;
        self.prev = prev;
    }

    pub fn enemy(&self) -> EntityId {
        self.enemy
    }

    pub fn counterpart(&self) -> EntityId {
        self.counterpart
    }

    pub fn phase(&self) -> CombatPhase {
        self.current
    }

    pub fn prev_phase(&self) -> CombatPhase {
        self.prev
    }

    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    pub fn pending_action(&self) -> PlayerAction {
        self.pending_action
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn enemy_fighter(&self) -> &Fighter {
        &self.enemy_fighter
    }

    pub fn player_bar(&self) -> &HealthBar {
        &self.player_bar
    }

    pub fn enemy_bar(&self) -> &HealthBar {
        &self.enemy_bar
    }

    pub fn sickman(&self) -> &Sickman {
        &self.sickman
    }

    pub fn all_moves(&self) -> &[Move] {
        &self.all_moves
    }

    pub fn moves_remaining(&self) -> &[Move] {
        &self.moves_remaining
    }

    pub fn history(&self) -> &EnemyHistory {
        &self.history
    }

    pub fn current_enemy_move(&self) -> Option<&Move> {
        self.current_enemy_move.as_ref()
    }

    pub fn current_player_move(&self) -> Option<&Move> {
        self.current_player_move.as_ref()
    }

    pub fn cooldown_remaining(&self) -> Duration {
        self.cooldown_remaining
    }

    pub fn particles_remaining(&self) -> Option<Duration> {
        self.particles_remaining
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }
}
