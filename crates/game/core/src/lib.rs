//! Deterministic turn-based combat rules.
//!
//! `combat-core` owns the battle state machine, the enemy's decision policy
//! and the data they operate on. It performs no I/O: every tick returns a
//! [`Resolution`] listing the cues, visuals and health changes the host
//! should present. All battle mutation flows through [`Battle::submit`] and
//! [`Battle::step`].
pub mod action;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{Move, MoveKind, PlayerAction, PlayerCommand, Technique, default_repertoire};
pub use config::CombatConfig;
pub use decision::{DecisionContext, DecisionOverrides, EnemyBrain, enemy_brain};
pub use engine::{
    AudioCue, Battle, BattleOutcome, BattleSetup, CombatEffect, CombatPhase, EnemyHistory,
    MoveRecord, Resolution, Side, VisualEffect,
};
pub use error::{CombatError, ErrorSeverity, GameError};
pub use state::{
    EncounterMultipliers, EntityId, Fighter, HealthBar, PathogenKind, Sickman, VisualFlags,
};
