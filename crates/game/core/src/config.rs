use core::time::Duration;

/// Tunable battle parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Delay before the enemy acts once ENEMY_ATTACK is entered.
    pub enemy_pacing_ms: u64,
    /// How long the defeated enemy's particles play before the battle is won.
    pub particles_delay_ms: u64,
    /// Health boundary used by the enemy's defensive check.
    pub defensive_threshold: i32,
    pub max_health: i32,
    /// Health restored by an enemy healing move.
    pub enemy_heal_amount: i32,
    /// Health-bar width per point of health.
    pub health_bar_scale: f32,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENEMY_PACING_MS: u64 = 1500;
    pub const DEFAULT_PARTICLES_DELAY_MS: u64 = 5000;
    pub const DEFAULT_DEFENSIVE_THRESHOLD: i32 = 30;
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_ENEMY_HEAL_AMOUNT: i32 = 10;
    pub const DEFAULT_HEALTH_BAR_SCALE: f32 = 1.5;

    pub fn new() -> Self {
        Self {
            enemy_pacing_ms: Self::DEFAULT_ENEMY_PACING_MS,
            particles_delay_ms: Self::DEFAULT_PARTICLES_DELAY_MS,
            defensive_threshold: Self::DEFAULT_DEFENSIVE_THRESHOLD,
            max_health: Self::DEFAULT_MAX_HEALTH,
            enemy_heal_amount: Self::DEFAULT_ENEMY_HEAL_AMOUNT,
            health_bar_scale: Self::DEFAULT_HEALTH_BAR_SCALE,
        }
    }

    /// Removes both delays; handy for tests and headless runs.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            enemy_pacing_ms: 0,
            particles_delay_ms: 0,
            ..Self::new()
        }
    }

    pub fn enemy_pacing(&self) -> Duration {
        Duration::from_millis(self.enemy_pacing_ms)
    }

    pub fn particles_delay(&self) -> Duration {
        Duration::from_millis(self.particles_delay_ms)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
