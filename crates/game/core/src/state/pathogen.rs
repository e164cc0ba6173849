//! Visual identity of the enemy pathogen.
//!
//! The flags here are purely presentational: combat resolution updates them
//! and forwards them to the renderer, but no decision ever reads them back.

use bitflags::bitflags;

use crate::engine::VisualEffect;

bitflags! {
    /// Sprite layers toggled on the enemy during a battle.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct VisualFlags: u8 {
        const SICK = 1 << 0;
        const KICK = 1 << 1;
        const FIRE = 1 << 2;
        const DEAD = 1 << 3;
    }
}

/// Broad family of the pathogen an encounter spawns.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PathogenKind {
    Virus,
    Bacteria,
    Fungus,
    #[default]
    Unknown,
}

/// The enemy's on-screen body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sickman {
    pub flags: VisualFlags,
    pub pathogen: PathogenKind,
}

impl Sickman {
    pub fn new(pathogen: PathogenKind) -> Self {
        Self {
            flags: VisualFlags::SICK,
            pathogen,
        }
    }

    /// Updates the sprite layers for a player technique landing on the enemy.
    ///
    /// Returns the one-shot visual spawned by the technique, if any. Unknown
    /// move names leave the flags untouched.
    pub fn react_to(&mut self, move_name: &str) -> Option<VisualEffect> {
        match move_name {
            "PUNCH" => {
                self.flags.insert(VisualFlags::SICK | VisualFlags::KICK);
                self.flags.remove(VisualFlags::FIRE);
                None
            }
            "HEAT" => {
                self.flags.insert(VisualFlags::SICK | VisualFlags::FIRE);
                self.flags.remove(VisualFlags::KICK);
                Some(VisualEffect::Fireball)
            }
            "SHOOT" => {
                self.flags
                    .remove(VisualFlags::SICK | VisualFlags::KICK | VisualFlags::FIRE);
                Some(VisualEffect::Vaccine)
            }
            _ => None,
        }
    }

    pub fn mark_dead(&mut self) {
        self.flags.insert(VisualFlags::DEAD);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.flags.contains(VisualFlags::DEAD)
    }
}

impl Default for Sickman {
    fn default() -> Self {
        Self::new(PathogenKind::default())
    }
}
