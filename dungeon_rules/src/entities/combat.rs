//! The combat capability shared by the player and enemies.

use serde::{Deserialize, Serialize};

use crate::mechanics::Dice;

/// Fighting stats held by every combat participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatProfile {
    /// May drop below zero for enemies; anything `<= 0` counts as dead.
    pub hit_points: i32,
    /// Damage dealt on a successful hit.
    pub attack_damage: i32,
    /// Hit chance in percent, `0..=100`.
    pub chance_of_attack: u8,
    pub weapon: String,
}

/// Result of resolving one attack. Resolution never applies the damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// The percentile draw, `1..=100`.
    pub roll: u32,
    pub hit: bool,
    pub damage: i32,
}

impl CombatProfile {
    pub fn new(
        hit_points: i32,
        attack_damage: i32,
        chance_of_attack: u8,
        weapon: impl Into<String>,
    ) -> Self {
        Self {
            hit_points,
            attack_damage,
            chance_of_attack,
            weapon: weapon.into(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Resolve one attack: a roll at or under the hit chance deals the full
    /// attack damage, anything above it misses.
    pub fn attack(&self, dice: &mut impl Dice) -> AttackOutcome {
        let roll = dice.percentile();
        let hit = u32::from(self.chance_of_attack) >= roll;
        AttackOutcome {
            roll,
            hit,
            damage: if hit { self.attack_damage } else { 0 },
        }
    }

    /// Subtract damage without a floor and return the remaining hit points.
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        self.hit_points -= damage;
        self.hit_points
    }
}
