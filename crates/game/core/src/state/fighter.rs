//! Combatant health and the health-bar geometry shown for it.

/// Health and damage scaling for one side of a battle.
///
/// Health is deliberately not clamped at zero: a finishing blow may leave it
/// negative, and everything downstream treats `health <= 0` as defeated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub health: i32,
    pub max_health: i32,
    /// Factor applied to the base damage of every offence move this fighter uses.
    pub damage_multiplier: f32,
}

impl Fighter {
    /// Creates a fighter at full health with a neutral damage multiplier.
    pub fn new(max_health: i32) -> Self {
        Self {
            health: max_health,
            max_health,
            damage_multiplier: 1.0,
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_damage_multiplier(mut self, damage_multiplier: f32) -> Self {
        self.damage_multiplier = damage_multiplier;
        self
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Scales a move's base damage by this fighter's multiplier.
    ///
    /// Never negative, so a malformed offence move cannot heal its target.
    pub fn outgoing_damage(&self, base_damage: i32) -> i32 {
        scale_damage(base_damage, self.damage_multiplier)
    }

    /// Subtracts `amount` from health.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount.max(0);
    }

    /// Restores up to `amount` health without exceeding `max_health`.
    ///
    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let missing = (self.max_health - self.health).max(0);
        let restored = amount.max(0).min(missing);
        self.health += restored;
        restored
    }
}

/// Applies a multiplier to a base damage value, rounding to the nearest point.
pub fn scale_damage(base_damage: i32, factor: f32) -> i32 {
    ((base_damage as f32) * factor).round().max(0.0) as i32
}

/// Per-encounter scaling read from level data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterMultipliers {
    /// Scales damage the player deals to the enemy.
    pub damage_reduction: f32,
    /// Scales damage the enemy deals to the player.
    pub damage_multiplier: f32,
    /// Scales the enemy's starting health.
    pub health_multiplier: f32,
}

impl Default for EncounterMultipliers {
    fn default() -> Self {
        Self {
            damage_reduction: 1.0,
            damage_multiplier: 1.0,
            health_multiplier: 1.0,
        }
    }
}

/// Visible health-bar geometry for the renderer.
///
/// The bar starts `max_health * scale` wide. Each point of damage shrinks it
/// by `scale` and shifts it left by half of that so it drains toward its
/// anchor; a defeated fighter's bar collapses to zero width.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthBar {
    /// Horizontal offset from the bar's anchor.
    pub offset: f32,
    pub width: f32,
    pub full_width: f32,
    pub scale: f32,
}

impl HealthBar {
    pub fn new(max_health: i32, scale: f32) -> Self {
        let full_width = max_health.max(0) as f32 * scale;
        Self {
            offset: 0.0,
            width: full_width,
            full_width,
            scale,
        }
    }

    /// Bar for a fighter that may already be hurt.
    pub fn for_fighter(fighter: &Fighter, scale: f32) -> Self {
        let mut bar = Self::new(fighter.max_health, scale);
        bar.shrink(fighter.max_health - fighter.health, fighter.health);
        bar
    }

    /// Shrinks the bar after `amount` damage left the fighter at `health`.
    pub fn shrink(&mut self, amount: i32, health: i32) {
        if health > 0 {
            let delta = amount.max(0) as f32 * self.scale;
            self.offset -= delta / 2.0;
            self.width = (self.width - delta).max(0.0);
        } else {
            self.width = 0.0;
        }
    }

    /// Grows the bar after `amount` health was restored, capped at full width.
    pub fn grow(&mut self, amount: i32) {
        let target = (self.width + amount.max(0) as f32 * self.scale).min(self.full_width);
        let delta = target - self.width;
        self.offset += delta / 2.0;
        self.width = target;
    }
}
