//! Phase transitions.

use super::{Battle, CombatPhase};
use crate::action::PlayerAction;

impl Battle {
    /// Moves to the next phase and remembers the current one as previous.
    pub fn advance(&mut self) -> CombatPhase {
        let from = self.current;
        let prev = self.prev;
        let next = self.next_phase(from, prev);

        if next == CombatPhase::EnemyAttack && from != CombatPhase::EnemyAttack {
            self.cooldown_remaining = self.config.enemy_pacing();
            self.current_enemy_move = None;
        }

        self.prev = from;
        self.current = next;
        if from != next {
            tracing::debug!(%from, to = %next, "combat phase advanced");
        }
        next
    }

    fn next_phase(&self, current: CombatPhase, prev: CombatPhase) -> CombatPhase {
        use CombatPhase::*;

        match current {
            Wait => {
                if self.player.is_defeated() {
                    return ReturnLoss;
                }
                match self.pending_action {
                    PlayerAction::Attack => Attack,
                    PlayerAction::UseItem => UseItem,
                    PlayerAction::Swap => Swap,
                    PlayerAction::Run => ReturnLoss,
                    PlayerAction::Idle => Wait,
                }
            }
            Attack => UpdateEnemyStats,
            UseItem => UpdatePlayerStats,
            Swap => EnemyWait,
            UpdatePlayerStats if prev == UseItem => EnemyWait,
            UpdatePlayerStats => Wait,
            UpdateEnemyStats if prev == EnemyAttack => Wait,
            UpdateEnemyStats => EnemyWait,
            EnemyWait if self.enemy_fighter.is_defeated() => Particles,
            EnemyWait => EnemyAttack,
            EnemyAttack => match &self.current_enemy_move {
                None => EnemyAttack,
                Some(chosen) if chosen.is_offence() => UpdatePlayerStats,
                Some(_) => UpdateEnemyStats,
            },
            Particles if self.particles_remaining.is_some() => Particles,
            Particles => ReturnWin,
            ReturnWin => ReturnWin,
            ReturnLoss => ReturnLoss,
        }
    }
}
