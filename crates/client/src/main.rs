//! Headless battle simulator.
//!
//! Loads a level, resolves the encounter at the given position and plays
//! one or more battles against it, feeding a scripted sequence of menu
//! presses whenever the battle waits for the player.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p combat-client -- --script fight,punch,heat --battles 3
//! ```

mod config;
mod script;
mod sink;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use combat_content::{ConfigLoader, EncounterPosition, LevelLoader};
use combat_core::{CombatConfig, CombatPhase, EntityId, PlayerAction};
use combat_runtime::{CombatDriver, InputHandle, SceneReturn};

use config::SimConfig;
use script::ScriptStep;
use sink::LogSink;

type Driver = CombatDriver<LogSink, LogSink>;

#[derive(Debug, Parser)]
#[command(name = "combat-sim", version, about = "Play scripted battles without a window")]
struct Args {
    /// Level file (RON). The bundled level is used when omitted.
    #[arg(long)]
    level: Option<PathBuf>,

    /// Combat configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overworld x position of the enemy.
    #[arg(long, default_value_t = 400.0)]
    x: f32,

    /// Overworld y position of the enemy.
    #[arg(long, default_value_t = 300.0)]
    y: f32,

    /// Comma-separated menu presses, replayed in a loop.
    #[arg(long, value_delimiter = ',', default_value = "punch")]
    script: Vec<ScriptStep>,

    /// Number of consecutive battles.
    #[arg(long, default_value_t = 1)]
    battles: u32,

    /// Skip enemy pacing and particle delays.
    #[arg(long)]
    instant: bool,

    /// Milliseconds per tick; overrides SIM_TICK_MS.
    #[arg(long)]
    tick_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut sim = SimConfig::from_env();
    if let Some(tick_ms) = args.tick_ms {
        sim.tick_ms = tick_ms;
    }

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_or_default(path),
        None => CombatConfig::default(),
    };
    if args.instant {
        config.enemy_pacing_ms = 0;
        config.particles_delay_ms = 0;
    }

    let table = match &args.level {
        Some(path) => LevelLoader::load(path)
            .with_context(|| format!("failed to load level {}", path.display()))?,
        None => LevelLoader::embedded()?,
    };
    let position = EncounterPosition::new(args.x, args.y);
    tracing::info!(?position, encounters = table.len(), "level loaded");

    let mut driver = CombatDriver::new(config, LogSink, LogSink);
    let input = driver.input_handle();
    let mut script = args.script.iter().copied().cycle();

    for round in 1..=args.battles {
        driver.start_battle(EntityId(1), EntityId(2), table.resolve(position))?;

        let Some(ended) = run_battle(&mut driver, &input, &mut script, &sim).await? else {
            bail!("battle {round} did not end within {} ticks", sim.max_ticks);
        };
        println!(
            "battle {round}: {} (score {}, player health {})",
            ended.outcome,
            ended.score,
            driver.player().health
        );
    }

    Ok(())
}

/// Ticks the driver until the battle ends or the tick limit is reached.
async fn run_battle(
    driver: &mut Driver,
    input: &InputHandle,
    script: &mut impl Iterator<Item = ScriptStep>,
    sim: &SimConfig,
) -> Result<Option<SceneReturn>> {
    let elapsed = Duration::from_millis(sim.tick_ms);
    let mut interval = tokio::time::interval(elapsed.max(Duration::from_millis(1)));

    for _ in 0..sim.max_ticks {
        if sim.realtime {
            interval.tick().await;
        }

        let awaiting_player = driver.battle().is_some_and(|battle| {
            battle.phase() == CombatPhase::Wait && battle.pending_action() == PlayerAction::Idle
        });
        if awaiting_player && let Some(step) = script.next() {
            tracing::debug!(?step, "scripted input");
            input.click(step.button())?;
        }

        if let Some(ended) = driver.tick(elapsed)? {
            return Ok(Some(ended));
        }
    }

    Ok(None)
}
