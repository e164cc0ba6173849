//! Predicate and action tags of the enemy tree, and the tree itself.

use behavior_tree::{BehaviorTree, TreeBuilder, TreeError};

use crate::action::MoveKind;

/// Questions the enemy tree asks its [`super::DecisionContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// No heal, defend or fight mode has been forced.
    NoOverride,
    HealMode,
    DefendMode,
    FightMode,
    /// Player is healthy while the enemy is at or below the threshold.
    IsDefensive,
    CanDefend,
    CanHeal,
    AttackedBefore,
    MovesRemaining,
}

/// Side effects the enemy tree can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Clears every mode and enables the one for this kind.
    SetMode(MoveKind),
    /// Selects the first repertoire move of this kind.
    UseKind(MoveKind),
    /// Pops the next untried offence move.
    UseNewMove,
    /// Reuses the move picked from the history.
    UseStrongestMove,
}

pub type EnemyBrain = BehaviorTree<Predicate, Decision>;

/// Builds the enemy decision tree.
///
/// ```text
/// Sequence2
/// ├── Guard(NoOverride)
/// │   └── IsDefensive ? (CanDefend ? SetMode(defence) : SetMode(offence))
/// │                   : (CanHeal ? SetMode(healing) : SetMode(offence))
/// └── HealMode ? UseKind(healing)
///     : DefendMode ? UseKind(defence)
///     : Guard(FightMode)
///       └── AttackedBefore ? (MovesRemaining ? UseNewMove : UseStrongestMove)
///                          : UseNewMove
/// ```
pub fn enemy_brain() -> Result<EnemyBrain, TreeError> {
    let mut b = TreeBuilder::new();

    let set_defence = b.action(Decision::SetMode(MoveKind::Defence));
    let set_offence = b.action(Decision::SetMode(MoveKind::Offence));
    let set_healing = b.action(Decision::SetMode(MoveKind::Healing));
    let defend_or_fight = b.conditional(Predicate::CanDefend, set_defence, set_offence);
    let heal_or_fight = b.conditional(Predicate::CanHeal, set_healing, set_offence);
    let pick_mode = b.conditional(Predicate::IsDefensive, defend_or_fight, heal_or_fight);
    let choose_mode = b.guard(Predicate::NoOverride, pick_mode);

    let use_new = b.action(Decision::UseNewMove);
    let use_strongest = b.action(Decision::UseStrongestMove);
    let new_or_strongest = b.conditional(Predicate::MovesRemaining, use_new, use_strongest);
    let offence = b.conditional(Predicate::AttackedBefore, new_or_strongest, use_new);
    let fight = b.guard(Predicate::FightMode, offence);

    let use_defence = b.action(Decision::UseKind(MoveKind::Defence));
    let defend_or_rest = b.conditional(Predicate::DefendMode, use_defence, fight);
    let use_healing = b.action(Decision::UseKind(MoveKind::Healing));
    let execute = b.conditional(Predicate::HealMode, use_healing, defend_or_rest);

    let root = b.sequence2(choose_mode, execute);
    b.build(root)
}

#[cfg(test)]
mod tests {
    use behavior_tree::Node;

    use super::*;

    #[test]
    fn brain_builds_with_sequence_root() {
        let brain = enemy_brain().expect("tree is well formed");
        assert!(matches!(
            brain.node(brain.root()),
            Some(Node::Sequence2 { .. })
        ));
        assert_eq!(brain.len(), 17);
    }
}
