//! Enemy definitions.

use serde::{Deserialize, Serialize};

use super::{CombatProfile, EntityId};

/// A hostile creature living in exactly one room until it is defeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub name: String,
    pub profile: CombatProfile,
}

impl Enemy {
    /// Create a new enemy with a fresh id.
    pub fn new(
        name: impl Into<String>,
        hit_points: i32,
        attack_damage: i32,
        chance_of_attack: u8,
        weapon: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            profile: CombatProfile::new(hit_points, attack_damage, chance_of_attack, weapon),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.profile.is_alive()
    }

    pub fn hit_points(&self) -> i32 {
        self.profile.hit_points
    }
}
