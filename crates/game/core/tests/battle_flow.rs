use std::time::Duration;

use combat_core::{
    AudioCue, Battle, BattleOutcome, BattleSetup, CombatConfig, CombatEffect, CombatPhase,
    DecisionOverrides, EncounterMultipliers, EntityId, Fighter, Move, MoveKind, PlayerAction,
    PlayerCommand, Resolution, Technique, VisualEffect, VisualFlags,
};

const ENEMY: EntityId = EntityId(10);
const COUNTERPART: EntityId = EntityId(11);

fn setup() -> BattleSetup {
    BattleSetup::new(ENEMY, COUNTERPART, Fighter::new(100))
}

fn offence_and_defence() -> Vec<Move> {
    vec![
        Move::offence("Infect", 20),
        Move::offence("Poison", 15),
        Move::offence("Neural Damage", 25),
        Move::defence("Mutate"),
    ]
}

fn with_enemy_health(setup: BattleSetup, fraction: f32) -> BattleSetup {
    setup.with_multipliers(EncounterMultipliers {
        health_multiplier: fraction,
        ..Default::default()
    })
}

fn start(setup: BattleSetup) -> Battle {
    Battle::start(setup, CombatConfig::instant()).expect("battle starts")
}

fn tick(battle: &mut Battle) -> Resolution {
    battle
        .step(Duration::ZERO, DecisionOverrides::NONE)
        .expect("tick succeeds")
}

/// Lets the enemy act once by swapping, ending back in WAIT.
fn enemy_turn(battle: &mut Battle) -> Vec<Resolution> {
    assert!(battle.submit(PlayerCommand::Swap));
    let mut resolutions = Vec::new();
    for _ in 0..6 {
        resolutions.push(tick(battle));
        if battle.phase() == CombatPhase::Wait {
            break;
        }
    }
    assert_eq!(battle.phase(), CombatPhase::Wait);
    resolutions
}

fn chosen_moves(resolutions: &[Resolution]) -> Vec<Move> {
    resolutions
        .iter()
        .flat_map(|r| r.effects.iter())
        .filter_map(|effect| match effect {
            CombatEffect::EnemyMoveChosen(chosen) => Some(chosen.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn wait_transitions_follow_pending_action() {
    let cases = [
        (None, CombatPhase::Wait),
        (Some(Technique::Punch.command()), CombatPhase::Attack),
        (Some(PlayerCommand::UseItem), CombatPhase::UseItem),
        (Some(PlayerCommand::Swap), CombatPhase::Swap),
        (Some(PlayerCommand::Run), CombatPhase::ReturnLoss),
    ];

    for (command, expected) in cases {
        let mut battle = start(setup());
        if let Some(command) = command {
            assert!(battle.submit(command));
        }
        tick(&mut battle);
        assert_eq!(battle.phase(), expected);
        assert_eq!(battle.prev_phase(), CombatPhase::Wait);
    }
}

#[test]
fn defeated_player_loses_from_wait_even_with_pending_attack() {
    let mut battle = start(BattleSetup::new(
        ENEMY,
        COUNTERPART,
        Fighter::new(100).with_health(0),
    ));
    assert!(battle.submit(Technique::Punch.command()));
    tick(&mut battle);
    assert_eq!(battle.phase(), CombatPhase::ReturnLoss);

    let end = tick(&mut battle);
    assert_eq!(end.outcome, Some(BattleOutcome::Loss));
    assert_eq!(end.cues().collect::<Vec<_>>(), [AudioCue::Death]);
}

#[test]
fn running_away_loses_without_death_cue() {
    let mut battle = start(setup());
    battle.submit(PlayerCommand::Run);
    tick(&mut battle);
    let end = tick(&mut battle);
    assert_eq!(end.outcome, Some(BattleOutcome::Loss));
    assert_eq!(end.cues().count(), 0);
    assert_eq!(battle.phase(), CombatPhase::ReturnLoss);
}

#[test]
fn finishing_blow_kills_enemy_and_plays_particles() {
    let mut battle = start(with_enemy_health(setup(), 0.2));
    assert_eq!(battle.enemy_fighter().health, 20);

    assert!(battle.submit(Technique::Punch.command()));
    tick(&mut battle);
    assert_eq!(battle.phase(), CombatPhase::Attack);

    let attack = tick(&mut battle);
    assert_eq!(attack.cues().collect::<Vec<_>>(), [AudioCue::Attack]);
    assert_eq!(battle.pending_action(), PlayerAction::Idle);
    assert_eq!(battle.phase(), CombatPhase::UpdateEnemyStats);

    tick(&mut battle);
    assert_eq!(battle.enemy_fighter().health, -5);
    assert!(battle.sickman().is_dead());
    assert!(battle.sickman().flags.contains(VisualFlags::KICK));
    assert_eq!(battle.enemy_bar().width, 0.0);
    assert_eq!(battle.phase(), CombatPhase::EnemyWait);

    let wait = tick(&mut battle);
    assert!(
        wait.effects
            .contains(&CombatEffect::Spawn(VisualEffect::Particles))
    );
    assert_eq!(battle.phase(), CombatPhase::Particles);

    tick(&mut battle);
    assert_eq!(battle.phase(), CombatPhase::ReturnWin);
    let end = tick(&mut battle);
    assert_eq!(end.outcome, Some(BattleOutcome::Win));
    assert_eq!(end.cues().collect::<Vec<_>>(), [AudioCue::Pickup]);
}

#[test]
fn player_multiplier_applies_before_encounter_reduction() {
    let player = Fighter::new(100).with_damage_multiplier(2.0);
    let mut battle = start(
        BattleSetup::new(ENEMY, COUNTERPART, player).with_multipliers(EncounterMultipliers {
            damage_reduction: 0.5,
            ..Default::default()
        }),
    );
    assert!(battle.submit(Technique::Shoot.command()));
    for _ in 0..3 {
        tick(&mut battle);
    }
    // SHOOT 35, doubled to 70, halved to 35.
    assert_eq!(battle.enemy_fighter().health, 65);
}

#[test]
fn particles_hold_until_the_timer_runs_out() {
    let config = CombatConfig {
        particles_delay_ms: 300,
        ..CombatConfig::instant()
    };
    let mut battle =
        Battle::start(with_enemy_health(setup(), 0.2), config).expect("battle starts");
    battle.submit(Technique::Shoot.command());
    for _ in 0..4 {
        tick(&mut battle);
    }
    assert_eq!(battle.phase(), CombatPhase::Particles);
    assert_eq!(battle.particles_remaining(), Some(Duration::from_millis(300)));

    battle
        .step(Duration::from_millis(200), DecisionOverrides::NONE)
        .expect("tick");
    assert_eq!(battle.phase(), CombatPhase::Particles);
    battle
        .step(Duration::from_millis(200), DecisionOverrides::NONE)
        .expect("tick");
    assert_eq!(battle.particles_remaining(), None);
    assert_eq!(battle.phase(), CombatPhase::ReturnWin);
}

#[test]
fn enemy_waits_for_pacing_cooldown() {
    let mut battle =
        Battle::start(setup().with_moves(offence_and_defence()), CombatConfig::default())
            .expect("battle starts");
    battle.submit(PlayerCommand::Swap);
    for _ in 0..3 {
        tick(&mut battle);
    }
    assert_eq!(battle.phase(), CombatPhase::EnemyAttack);
    assert_eq!(battle.cooldown_remaining(), Duration::from_millis(1500));

    let early = battle
        .step(Duration::from_millis(1000), DecisionOverrides::NONE)
        .expect("tick");
    assert!(early.is_empty());
    assert_eq!(battle.phase(), CombatPhase::EnemyAttack);
    assert!(battle.current_enemy_move().is_none());

    let late = battle
        .step(Duration::from_millis(500), DecisionOverrides::NONE)
        .expect("tick");
    assert_eq!(late.cues().collect::<Vec<_>>(), [AudioCue::EnemyAttack]);
    assert_eq!(battle.phase(), CombatPhase::UpdatePlayerStats);
}

#[test]
fn enemy_offence_damages_player_and_is_recorded() {
    let mut battle = start(
        setup()
            .with_moves(offence_and_defence())
            .with_multipliers(EncounterMultipliers {
                damage_multiplier: 2.0,
                ..Default::default()
            }),
    );
    enemy_turn(&mut battle);

    // Neural Damage (25) is last in the pool and doubled.
    assert_eq!(battle.player().health, 50);
    assert_eq!(battle.player_bar().width, 75.0);
    assert_eq!(battle.history().len(), 1);
    assert_eq!(battle.history().records()[0].damage, 50);
    assert_eq!(battle.moves_remaining().len(), 2);
}

#[test]
fn healthy_enemy_without_heal_pops_from_pool() {
    let moves = vec![
        Move::offence("Infect", 20),
        Move::offence("Poison", 15),
        Move::defence("Mutate"),
    ];
    let mut battle = start(with_enemy_health(setup(), 0.5).with_moves(moves));
    assert_eq!(battle.enemy_fighter().health, 50);

    let turn = enemy_turn(&mut battle);
    let chosen = chosen_moves(&turn);
    assert_eq!(chosen.len(), 1);
    assert_eq!(chosen[0].name(), "Poison");
    assert_eq!(battle.moves_remaining().len(), 1);
    assert_eq!(battle.player().health, 85);
}

#[test]
fn exhausted_pool_reuses_last_damaging_history_entry() {
    let moves = vec![Move::offence("B", 30), Move::offence("A", 10)];
    let mut battle = start(setup().with_moves(moves));

    enemy_turn(&mut battle);
    enemy_turn(&mut battle);
    assert!(battle.moves_remaining().is_empty());
    let names: Vec<_> = battle
        .history()
        .records()
        .iter()
        .map(|r| (r.attack.name().to_owned(), r.damage))
        .collect();
    assert_eq!(names, [("A".to_owned(), 10), ("B".to_owned(), 30)]);

    let turn = enemy_turn(&mut battle);
    assert_eq!(chosen_moves(&turn)[0].name(), "B");
    assert_eq!(battle.player().health, 100 - 10 - 30 - 30);
}

#[test]
fn single_history_entry_is_reused_once_pool_is_empty() {
    let mut battle = start(setup().with_moves(vec![Move::offence("Infect", 20)]));
    enemy_turn(&mut battle);
    let turn = enemy_turn(&mut battle);
    assert_eq!(chosen_moves(&turn)[0].name(), "Infect");
    assert_eq!(battle.history().len(), 2);
}

#[test]
fn hurt_enemy_heals_itself() {
    let mut battle = start(setup());
    battle.submit(Technique::Punch.command());
    for _ in 0..3 {
        tick(&mut battle);
    }
    assert_eq!(battle.enemy_fighter().health, 75);
    assert_eq!(battle.phase(), CombatPhase::EnemyWait);

    tick(&mut battle);
    let decision = tick(&mut battle);
    assert_eq!(decision.cues().collect::<Vec<_>>(), [AudioCue::Heal]);
    assert_eq!(battle.phase(), CombatPhase::UpdateEnemyStats);

    tick(&mut battle);
    assert_eq!(battle.enemy_fighter().health, 85);
    assert_eq!(battle.phase(), CombatPhase::Wait);
    assert!(battle.history().is_empty());
}

#[test]
fn enemy_at_full_health_still_picks_its_healing_move() {
    let mut battle = start(setup());
    assert!(battle.submit(PlayerCommand::Swap));
    for _ in 0..3 {
        tick(&mut battle);
    }
    assert_eq!(battle.phase(), CombatPhase::EnemyAttack);

    let decision = tick(&mut battle);
    assert_eq!(decision.cues().collect::<Vec<_>>(), [AudioCue::Heal]);
    assert_eq!(
        battle.current_enemy_move().map(Move::kind),
        Some(MoveKind::Healing)
    );
    assert_eq!(battle.moves_remaining().len(), 3);

    tick(&mut battle);
    assert_eq!(battle.enemy_fighter().health, 100);
    assert_eq!(battle.enemy_bar().width, 150.0);
    assert_eq!(battle.phase(), CombatPhase::Wait);
    assert!(battle.history().is_empty());
}

#[test]
fn losing_enemy_defends_without_changing_health() {
    let mut battle = start(setup().with_multipliers(EncounterMultipliers {
        damage_reduction: 3.0,
        ..Default::default()
    }));
    battle.submit(Technique::Punch.command());
    for _ in 0..4 {
        tick(&mut battle);
    }
    assert_eq!(battle.enemy_fighter().health, 25);

    let decision = tick(&mut battle);
    assert_eq!(decision.cues().collect::<Vec<_>>(), [AudioCue::Defend]);
    assert_eq!(
        battle.current_enemy_move().map(Move::kind),
        Some(MoveKind::Defence)
    );
    tick(&mut battle);
    assert_eq!(battle.enemy_fighter().health, 25);
    assert_eq!(battle.player().health, 100);
}

#[test]
fn forced_heal_falls_back_to_offence_without_healing_move() {
    let mut battle = start(setup().with_moves(vec![Move::offence("Infect", 20)]));
    battle.submit(PlayerCommand::Swap);
    for _ in 0..3 {
        tick(&mut battle);
    }
    let decision = battle
        .step(Duration::ZERO, DecisionOverrides::heal())
        .expect("tick");
    assert_eq!(decision.cues().collect::<Vec<_>>(), [AudioCue::EnemyAttack]);
    assert_eq!(battle.phase(), CombatPhase::UpdatePlayerStats);
}

#[test]
fn using_an_item_hands_the_turn_to_the_enemy() {
    let mut battle = start(setup());
    battle.submit(PlayerCommand::UseItem);
    let path: Vec<_> = (0..4)
        .map(|_| {
            let resolution = tick(&mut battle);
            (battle.phase(), resolution)
        })
        .collect();

    let phases: Vec<_> = path.iter().map(|(phase, _)| *phase).collect();
    assert_eq!(
        phases,
        [
            CombatPhase::UseItem,
            CombatPhase::UpdatePlayerStats,
            CombatPhase::EnemyWait,
            CombatPhase::EnemyAttack,
        ]
    );
    assert_eq!(path[1].1.cues().collect::<Vec<_>>(), [AudioCue::Heal]);
    assert_eq!(battle.player().health, 100);
}
