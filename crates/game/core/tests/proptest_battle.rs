// Property-based tests over random input and timing sequences.
use std::time::Duration;

use combat_core::{
    Battle, BattleSetup, CombatConfig, CombatPhase, DecisionOverrides, EncounterMultipliers,
    EntityId, Fighter, MoveKind, PlayerCommand, Technique,
};
use proptest::prelude::*;

fn command(code: u8) -> Option<PlayerCommand> {
    match code {
        1 => Some(Technique::Punch.command()),
        2 => Some(Technique::Shoot.command()),
        3 => Some(Technique::Heat.command()),
        4 => Some(PlayerCommand::UseItem),
        5 => Some(PlayerCommand::Swap),
        6 => Some(PlayerCommand::Run),
        _ => None,
    }
}

fn battle(health_multiplier: f32) -> Battle {
    let setup = BattleSetup::new(EntityId(1), EntityId(2), Fighter::new(100)).with_multipliers(
        EncounterMultipliers {
            health_multiplier,
            ..Default::default()
        },
    );
    Battle::start(setup, CombatConfig::default()).expect("battle starts")
}

fn inputs() -> impl Strategy<Value = Vec<(u8, u64)>> {
    // Run is rare so most sequences reach the enemy's turn.
    prop::collection::vec((prop_oneof![20 => 0u8..6, 1 => Just(6u8)], 0u64..2000), 0..120)
}

proptest! {
    #[test]
    fn proptest_prev_tracks_current_and_phase_stays_known(
        seq in inputs(),
        health in 0.1f32..2.0,
    ) {
        let mut battle = battle(health);
        for (code, ms) in seq {
            if let Some(cmd) = command(code) {
                battle.submit(cmd);
            }
            let before = battle.phase();
            battle
                .step(Duration::from_millis(ms), DecisionOverrides::NONE)
                .expect("tick succeeds");
            prop_assert_eq!(battle.prev_phase(), before);
            prop_assert_eq!(CombatPhase::try_from(battle.phase().as_u8()), Ok(battle.phase()));
            if before.is_terminal() {
                prop_assert_eq!(battle.phase(), before);
            }
        }
    }

    #[test]
    fn proptest_health_only_rises_through_enemy_healing(
        seq in inputs(),
        health in 0.1f32..2.0,
    ) {
        let mut battle = battle(health);
        for (code, ms) in seq {
            if let Some(cmd) = command(code) {
                battle.submit(cmd);
            }
            let player_before = battle.player().health;
            let enemy_before = battle.enemy_fighter().health;
            let healing_resolves = battle.phase() == CombatPhase::UpdateEnemyStats
                && battle.prev_phase() == CombatPhase::EnemyAttack
                && battle.current_enemy_move().map(|m| m.kind()) == Some(MoveKind::Healing);

            battle
                .step(Duration::from_millis(ms), DecisionOverrides::NONE)
                .expect("tick succeeds");

            prop_assert!(battle.player().health <= player_before);
            if battle.enemy_fighter().health > enemy_before {
                prop_assert!(healing_resolves);
                prop_assert!(battle.enemy_fighter().health <= battle.enemy_fighter().max_health);
            }
        }
    }

    #[test]
    fn proptest_offence_pool_only_shrinks(
        seq in inputs(),
    ) {
        let mut battle = battle(1.0);
        let mut remaining = battle.moves_remaining().len();
        for (code, ms) in seq {
            if let Some(cmd) = command(code) {
                battle.submit(cmd);
            }
            battle
                .step(Duration::from_millis(ms), DecisionOverrides::NONE)
                .expect("tick succeeds");
            let now = battle.moves_remaining().len();
            prop_assert!(now <= remaining);
            prop_assert!(remaining - now <= 1);
            remaining = now;
        }
    }
}
