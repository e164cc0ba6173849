use std::fs;

use combat_content::{
    ConfigLoader, ContentFactory, EncounterPosition, EncounterSetup, LevelLoader,
};
use combat_core::{CombatConfig, MoveKind, PathogenKind};

const LEVEL: &str = r#"
(
    enemies: [
        (
            position: (x: 120.0, y: 80.0),
            pathogen: "fungus",
            multipliers: (damage_reduction: 0.5, damage_multiplier: 2.0, health_multiplier: 1.5),
            attacks: [
                (kind: "offence", name: "Spore Burst", damage: 22),
                (kind: "healing", name: "Mycelium Mend", damage: -1),
            ],
        ),
        (
            position: (x: 300.0, y: 80.0),
            attacks: [],
        ),
    ],
)
"#;

#[test]
fn factory_loads_config_and_levels_from_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("levels")).expect("levels dir");
    fs::write(dir.path().join("levels/lung.ron"), LEVEL).expect("write level");
    fs::write(
        dir.path().join("config.toml"),
        "enemy_pacing_ms = 0\nenemy_heal_amount = 15\n",
    )
    .expect("write config");

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().expect("config loads");
    assert_eq!(config.enemy_pacing_ms, 0);
    assert_eq!(config.enemy_heal_amount, 15);
    assert_eq!(config.max_health, CombatConfig::DEFAULT_MAX_HEALTH);

    let table = factory.load_level("lung").expect("level loads");
    assert_eq!(table.len(), 2);

    let fungus = table.resolve(EncounterPosition::new(120.0, 80.0));
    assert_eq!(fungus.pathogen, PathogenKind::Fungus);
    assert_eq!(fungus.multipliers.damage_multiplier, 2.0);
    assert_eq!(fungus.moves[1].kind(), MoveKind::Healing);

    let bare = table.resolve(EncounterPosition::new(300.0, 80.0));
    assert_eq!(bare.moves.len(), 5);
}

#[test]
fn unreadable_files_degrade_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(enemies: [ not ron").expect("write");

    assert!(LevelLoader::load(&broken).is_err());
    let table = LevelLoader::load_or_default(&broken);
    assert!(table.is_empty());
    assert_eq!(
        table.resolve(EncounterPosition::new(0.0, 0.0)),
        EncounterSetup::default()
    );

    let missing = dir.path().join("config.toml");
    assert_eq!(ConfigLoader::load_or_default(&missing), CombatConfig::default());
}
