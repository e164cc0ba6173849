//! Phase effects.

use core::time::Duration;

use super::{
    AudioCue, Battle, BattleOutcome, CombatEffect, CombatPhase, Resolution, Side, VisualEffect,
};
use crate::action::{MoveKind, PlayerAction};
use crate::decision::{DecisionContext, DecisionOverrides, decide};
use crate::error::CombatError;
use crate::state::scale_damage;

impl Battle {
    /// Applies the effects of the current phase.
    ///
    /// `elapsed` is the host time since the previous tick; it only drives
    /// the enemy pacing and particles timers.
    pub fn resolve(
        &mut self,
        elapsed: Duration,
        overrides: DecisionOverrides,
    ) -> Result<Resolution, CombatError> {
        let mut out = Resolution::default();

        match self.current {
            CombatPhase::Wait => {}
            CombatPhase::Attack => {
                self.pending_action = PlayerAction::Idle;
                let attack = self.staged_move.take().ok_or(CombatError::MissingPlayerMove)?;
                tracing::debug!(%attack, "player attacks");
                self.current_player_move = Some(attack);
                out.cue(AudioCue::Attack);
            }
            CombatPhase::UseItem => {
                self.pending_action = PlayerAction::Idle;
                out.cue(AudioCue::Heal);
            }
            CombatPhase::Swap => {
                self.pending_action = PlayerAction::Idle;
            }
            CombatPhase::UpdatePlayerStats => self.resolve_player_stats(&mut out),
            CombatPhase::UpdateEnemyStats => self.resolve_enemy_stats(&mut out)?,
            CombatPhase::EnemyWait => {
                if self.enemy_fighter.is_defeated() && self.particles_remaining.is_none() {
                    self.particles_remaining = Some(self.config.particles_delay());
                    out.push(CombatEffect::Spawn(VisualEffect::Particles));
                }
            }
            CombatPhase::EnemyAttack => self.resolve_enemy_attack(elapsed, overrides, &mut out)?,
            CombatPhase::Particles => {
                if let Some(remaining) = self.particles_remaining {
                    let remaining = remaining.saturating_sub(elapsed);
                    self.particles_remaining = (!remaining.is_zero()).then_some(remaining);
                }
            }
            CombatPhase::ReturnWin => {
                out.cue(AudioCue::Pickup);
                out.outcome = Some(BattleOutcome::Win);
            }
            CombatPhase::ReturnLoss => {
                if self.player.is_defeated() {
                    out.cue(AudioCue::Death);
                }
                out.outcome = Some(BattleOutcome::Loss);
            }
        }

        Ok(out)
    }

    fn resolve_player_stats(&mut self, out: &mut Resolution) {
        if self.prev != CombatPhase::EnemyAttack {
            return;
        }
        let Some(attack) = self.current_enemy_move.as_ref().filter(|m| m.is_offence()) else {
            return;
        };

        let damage = self.enemy_fighter.outgoing_damage(attack.base_damage());
        self.player.take_damage(damage);
        self.player_bar.shrink(damage, self.player.health);
        self.history.record(attack.clone(), damage);
        tracing::debug!(%attack, damage, player_health = self.player.health, "player hit");

        out.push(CombatEffect::HealthChanged {
            side: Side::Player,
            health: self.player.health,
            bar: self.player_bar,
        });
    }

    fn resolve_enemy_stats(&mut self, out: &mut Resolution) -> Result<(), CombatError> {
        match self.prev {
            CombatPhase::Attack => {
                let attack = self
                    .current_player_move
                    .as_ref()
                    .ok_or(CombatError::MissingPlayerMove)?;

                if let Some(visual) = self.sickman.react_to(attack.name()) {
                    out.push(CombatEffect::Spawn(visual));
                }
                if attack.is_offence() {
                    let dealt = self.player.outgoing_damage(attack.base_damage());
                    let damage = scale_damage(dealt, self.damage_reduction);
                    self.enemy_fighter.take_damage(damage);
                    self.enemy_bar.shrink(damage, self.enemy_fighter.health);
                    tracing::debug!(
                        %attack,
                        damage,
                        enemy_health = self.enemy_fighter.health,
                        "enemy hit"
                    );
                }
                if self.enemy_fighter.is_defeated() {
                    self.sickman.mark_dead();
                }

                out.push(CombatEffect::Flags(self.sickman.flags));
                out.push(CombatEffect::HealthChanged {
                    side: Side::Enemy,
                    health: self.enemy_fighter.health,
                    bar: self.enemy_bar,
                });
            }
            CombatPhase::EnemyAttack => {
                let healing = self
                    .current_enemy_move
                    .as_ref()
                    .is_some_and(|m| m.kind() == MoveKind::Healing);
                if healing {
                    let restored = self.enemy_fighter.heal(self.config.enemy_heal_amount);
                    self.enemy_bar.grow(restored);
                    tracing::debug!(
                        restored,
                        enemy_health = self.enemy_fighter.health,
                        "enemy healed"
                    );
                    out.push(CombatEffect::HealthChanged {
                        side: Side::Enemy,
                        health: self.enemy_fighter.health,
                        bar: self.enemy_bar,
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn resolve_enemy_attack(
        &mut self,
        elapsed: Duration,
        overrides: DecisionOverrides,
        out: &mut Resolution,
    ) -> Result<(), CombatError> {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(elapsed);
        if !self.cooldown_remaining.is_zero() || self.current_enemy_move.is_some() {
            return Ok(());
        }

        let mut ctx = DecisionContext::new(
            overrides,
            self.player.health,
            self.enemy_fighter.health,
            self.config.defensive_threshold,
            &self.all_moves,
            &mut self.moves_remaining,
            &self.history,
        );
        let chosen = decide(&mut self.brain, &mut ctx)?;

        out.cue(match chosen.kind() {
            MoveKind::Offence => AudioCue::EnemyAttack,
            MoveKind::Defence => AudioCue::Defend,
            MoveKind::Healing => AudioCue::Heal,
        });
        out.push(CombatEffect::EnemyMoveChosen(chosen.clone()));
        self.current_enemy_move = Some(chosen);
        Ok(())
    }
}
