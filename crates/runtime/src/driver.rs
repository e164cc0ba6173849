//! Per-tick entry point for battles.
//!
//! [`CombatDriver`] owns at most one [`Battle`] at a time. Each call to
//! [`CombatDriver::tick`]:
//!
//! 1. drains every queued input event into the battle's pending-action slot
//! 2. resolves and advances the battle once
//! 3. forwards the produced effects to the cue sink
//! 4. on a terminal phase, settles the score, asks the scene sink to return
//!    to the overworld and tears the battle down

use core::time::Duration;

use combat_content::EncounterSetup;
use combat_core::{
    Battle, BattleOutcome, CombatConfig, CombatError, CombatPhase, DecisionOverrides, EntityId,
    Fighter,
};
use tokio::sync::mpsc;

use crate::error::Result;
use crate::input::{InputEvent, InputHandle, MenuState};
use crate::sink::{CueSink, SceneReturn, SceneSink};

pub struct CombatDriver<C, S> {
    config: CombatConfig,
    battle: Option<Battle>,
    /// Player state carried from one battle to the next.
    player: Fighter,
    score: u32,
    menu: MenuState,
    overrides: DecisionOverrides,
    input_tx: mpsc::UnboundedSender<InputEvent>,
    input_rx: mpsc::UnboundedReceiver<InputEvent>,
    cues: C,
    scene: S,
}

impl<C: CueSink, S: SceneSink> CombatDriver<C, S> {
    pub fn new(config: CombatConfig, cues: C, scene: S) -> Self {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        Self {
            player: Fighter::new(config.max_health),
            config,
            battle: None,
            score: 0,
            menu: MenuState::None,
            overrides: DecisionOverrides::NONE,
            input_tx,
            input_rx,
            cues,
            scene,
        }
    }

    /// Returns a sender producers can use from anywhere.
    pub fn input_handle(&self) -> InputHandle {
        InputHandle::new(self.input_tx.clone())
    }

    /// Opens a battle against `enemy`.
    ///
    /// Fails if a battle is already running. Input queued before the battle
    /// started is discarded.
    pub fn start_battle(
        &mut self,
        enemy: EntityId,
        counterpart: EntityId,
        encounter: EncounterSetup,
    ) -> Result<()> {
        if self.battle.is_some() {
            return Err(CombatError::SessionAlreadyActive.into());
        }

        let stale = self.discard_input();
        if stale > 0 {
            tracing::debug!(stale, "discarded input queued before battle start");
        }

        let setup = encounter.into_battle(enemy, counterpart, self.player);
        self.battle = Some(Battle::start(setup, self.config.clone())?);
        self.menu = MenuState::Main;
        Ok(())
    }

    /// Forces enemy decision modes for subsequent ticks.
    pub fn set_overrides(&mut self, overrides: DecisionOverrides) {
        self.overrides = overrides;
    }

    /// Advances the running battle by one tick.
    ///
    /// Returns the scene transition when this tick ended the battle. Without
    /// a battle the tick only discards queued input.
    pub fn tick(&mut self, elapsed: Duration) -> Result<Option<SceneReturn>> {
        let Some(battle) = self.battle.as_mut() else {
            self.discard_input();
            return Ok(None);
        };

        while let Ok(event) = self.input_rx.try_recv() {
            Self::apply_input(battle, &mut self.menu, event);
        }

        let resolution = battle.step(elapsed, self.overrides)?;
        for effect in &resolution.effects {
            self.cues.emit(effect);
        }

        let Some(outcome) = resolution.outcome else {
            return Ok(None);
        };
        match self.battle.take() {
            Some(finished) => Ok(Some(self.finish(finished, outcome))),
            None => Ok(None),
        }
    }

    fn apply_input(battle: &mut Battle, menu: &mut MenuState, event: InputEvent) {
        if battle.phase() != CombatPhase::Wait {
            tracing::trace!(?event, phase = %battle.phase(), "input dropped outside WAIT");
            return;
        }

        let intent = event.intent();
        let accepted = match intent.command {
            Some(command) => battle.submit(command),
            None => true,
        };
        if accepted && let Some(next) = intent.menu {
            *menu = next;
        }
    }

    fn finish(&mut self, battle: Battle, outcome: BattleOutcome) -> SceneReturn {
        let discarded = self.discard_input();
        let defeated = battle.player().is_defeated();

        match outcome {
            BattleOutcome::Win => self.score += 1,
            BattleOutcome::Loss if defeated => self.score = 0,
            BattleOutcome::Loss => {}
        }

        self.player = if defeated {
            Fighter::new(battle.player().max_health)
        } else {
            *battle.player()
        };

        let request = SceneReturn {
            outcome,
            enemy: battle.enemy(),
            counterpart: battle.counterpart(),
            remove_counterpart: outcome == BattleOutcome::Win,
            score: self.score,
        };
        tracing::info!(
            %outcome,
            enemy = %request.enemy,
            score = self.score,
            discarded,
            "battle ended"
        );

        self.scene.return_to_overworld(request);
        self.menu = MenuState::None;
        request
    }

    fn discard_input(&mut self) -> usize {
        let mut count = 0;
        while self.input_rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.battle.is_some()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn cues(&self) -> &C {
        &self.cues
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }
}
