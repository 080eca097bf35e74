//! The player character.

use serde::{Deserialize, Serialize};

use super::CombatProfile;
use crate::world_state::RoomId;

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_PLAYER_WEAPON: &str = "Sharp sword";

/// The single user-controlled fighter and its position in the dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub profile: CombatProfile,
    pub current_room: RoomId,
}

impl Player {
    /// Create a player standing in `room`.
    pub fn new(room: RoomId, hit_points: i32, attack_damage: i32, chance_of_attack: u8) -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            profile: CombatProfile::new(
                hit_points.max(0),
                attack_damage,
                chance_of_attack,
                DEFAULT_PLAYER_WEAPON,
            ),
            current_room: room,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_weapon(mut self, weapon: impl Into<String>) -> Self {
        self.profile.weapon = weapon.into();
        self
    }

    /// Move without any adjacency check.
    pub fn set_current_room(&mut self, room: RoomId) {
        self.current_room = room;
    }

    pub fn hit_points(&self) -> i32 {
        self.profile.hit_points
    }

    /// Take damage, flooring hit points at zero. Returns what is left.
    pub fn absorb(&mut self, damage: i32) -> i32 {
        self.profile.hit_points = (self.profile.hit_points - damage).max(0);
        self.profile.hit_points
    }

    pub fn is_defeated(&self) -> bool {
        !self.profile.is_alive()
    }
}
