use behavior_tree::{Blackboard, Status};

use super::{Decision, DecisionOverrides, Predicate};
use crate::action::{Move, MoveKind};
use crate::engine::EnemyHistory;

/// Everything the enemy tree may read or write during one evaluation.
///
/// Populated once per enemy decision from the battle and the caller's
/// overrides. The only battle state it can change is `moves_remaining`;
/// the chosen move is left in `selected`.
#[derive(Debug)]
pub struct DecisionContext<'a> {
    heal_mode: bool,
    defend_mode: bool,
    fight_mode: bool,
    pub player_health: i32,
    pub enemy_health: i32,
    pub defensive_threshold: i32,
    pub all_moves: &'a [Move],
    pub moves_remaining: &'a mut Vec<Move>,
    pub history: &'a EnemyHistory,
    pub selected: Option<Move>,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        overrides: DecisionOverrides,
        player_health: i32,
        enemy_health: i32,
        defensive_threshold: i32,
        all_moves: &'a [Move],
        moves_remaining: &'a mut Vec<Move>,
        history: &'a EnemyHistory,
    ) -> Self {
        Self {
            heal_mode: overrides.heal,
            defend_mode: overrides.defend,
            fight_mode: overrides.fight,
            player_health,
            enemy_health,
            defensive_threshold,
            all_moves,
            moves_remaining,
            history,
            selected: None,
        }
    }

    fn has_kind(&self, kind: MoveKind) -> bool {
        self.all_moves.iter().any(|m| m.kind() == kind)
    }

    fn is_defensive(&self) -> bool {
        self.player_health > self.defensive_threshold
            && self.enemy_health <= self.defensive_threshold
    }

    fn set_mode(&mut self, kind: MoveKind) {
        self.heal_mode = kind == MoveKind::Healing;
        self.defend_mode = kind == MoveKind::Defence;
        self.fight_mode = kind == MoveKind::Offence;
    }

    fn use_new_move(&mut self) -> Option<Move> {
        match self.moves_remaining.pop() {
            Some(next) => Some(next),
            None => {
                tracing::debug!("offence pool exhausted, reusing from history");
                self.use_strongest_move()
            }
        }
    }

    fn use_strongest_move(&self) -> Option<Move> {
        self.history
            .reuse_pick()
            .or_else(|| self.all_moves.iter().find(|m| m.is_offence()))
            .or_else(|| self.all_moves.first())
            .cloned()
    }

    fn use_kind(&mut self, kind: MoveKind) -> Option<Move> {
        match self.all_moves.iter().find(|m| m.kind() == kind) {
            Some(found) => Some(found.clone()),
            None => {
                tracing::debug!(%kind, "no move of forced kind, choosing offence instead");
                self.select_offence()
            }
        }
    }

    /// Offence sub-decision used when a forced kind is unavailable.
    fn select_offence(&mut self) -> Option<Move> {
        if !self.history.is_empty() && self.moves_remaining.is_empty() {
            self.use_strongest_move()
        } else {
            self.use_new_move()
        }
    }
}

impl Blackboard<Predicate, Decision> for DecisionContext<'_> {
    fn check(&self, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::NoOverride => !(self.heal_mode || self.defend_mode || self.fight_mode),
            Predicate::HealMode => self.heal_mode,
            Predicate::DefendMode => self.defend_mode,
            Predicate::FightMode => self.fight_mode,
            Predicate::IsDefensive => self.is_defensive(),
            Predicate::CanDefend => self.has_kind(MoveKind::Defence),
            Predicate::CanHeal => self.has_kind(MoveKind::Healing),
            Predicate::AttackedBefore => !self.history.is_empty(),
            Predicate::MovesRemaining => !self.moves_remaining.is_empty(),
        }
    }

    fn perform(&mut self, decision: &Decision) -> Status {
        let chosen = match *decision {
            Decision::SetMode(kind) => {
                self.set_mode(kind);
                return Status::Success;
            }
            Decision::UseKind(kind) => self.use_kind(kind),
            Decision::UseNewMove => self.use_new_move(),
            Decision::UseStrongestMove => self.use_strongest_move(),
        };

        match chosen {
            Some(selected) => {
                self.selected = Some(selected);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}
