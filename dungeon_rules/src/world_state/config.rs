//! Declarative world description, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Room, RoomId, World};
use crate::entities::{Enemy, Player, DEFAULT_PLAYER_NAME, DEFAULT_PLAYER_WEAPON};
use crate::error::ConfigError;

const REFERENCE_WORLD: &str = include_str!("reference_world.toml");

/// Tunable behaviour of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Whether a spotted enemy attacks the player every time they look
    /// around a populated room.
    pub ambush_on_look: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            ambush_on_look: true,
        }
    }
}

/// Starting stats and position of the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_name")]
    pub name: String,
    pub start_room: String,
    pub hit_points: i32,
    pub attack_damage: i32,
    pub chance_of_attack: u8,
    #[serde(default = "default_player_weapon")]
    pub weapon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub name: String,
    pub hit_points: i32,
    pub attack_damage: i32,
    pub chance_of_attack: u8,
    pub weapon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Names of rooms reachable from this one. One-way.
    #[serde(default)]
    pub exits: Vec<String>,
    #[serde(default)]
    pub enemies: Vec<EnemyConfig>,
}

/// The full description of a dungeon, as written in a world file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub victory_room: String,
    pub player: PlayerConfig,
    #[serde(default)]
    pub rules: GameRules,
    #[serde(default)]
    pub rooms: Vec<RoomConfig>,
}

/// Everything the game loop needs to start a session.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub world: World,
    pub player: Player,
    pub victory_room: RoomId,
    pub rules: GameRules,
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_player_weapon() -> String {
    DEFAULT_PLAYER_WEAPON.to_string()
}

fn check_stats(
    owner: &str,
    hit_points: i32,
    attack_damage: i32,
    chance: u8,
) -> Result<(), ConfigError> {
    let negative = [("hit points", hit_points), ("attack damage", attack_damage)]
        .into_iter()
        .find(|(_, value)| *value < 0);
    if let Some((field, value)) = negative {
        return Err(ConfigError::NegativeStat {
            owner: owner.to_string(),
            field,
            value,
        });
    }
    if chance > 100 {
        return Err(ConfigError::ChanceOutOfRange {
            owner: owner.to_string(),
            chance,
        });
    }
    Ok(())
}

impl EnemyConfig {
    fn to_enemy(&self) -> Result<Enemy, ConfigError> {
        check_stats(
            &self.name,
            self.hit_points,
            self.attack_damage,
            self.chance_of_attack,
        )?;
        Ok(Enemy::new(
            &self.name,
            self.hit_points,
            self.attack_damage,
            self.chance_of_attack,
            &self.weapon,
        ))
    }
}

impl WorldConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The three-room dungeon of Lord Object Orientus, ending at the
    /// glowing portal.
    pub fn reference() -> Result<Self, ConfigError> {
        Self::from_toml_str(REFERENCE_WORLD)
    }

    /// Validate the description and wire up the room graph.
    ///
    /// Exits are added exactly as written; nothing is made two-way
    /// implicitly.
    pub fn build(&self) -> Result<GameSetup, ConfigError> {
        let mut world = World::new();
        let mut ids: HashMap<&str, RoomId> = HashMap::new();
        let mut built: Vec<(RoomId, &RoomConfig)> = Vec::with_capacity(self.rooms.len());

        for config in &self.rooms {
            if ids.contains_key(config.name.as_str()) {
                return Err(ConfigError::DuplicateRoom(config.name.clone()));
            }
            let mut room = Room::new(&config.name, &config.description);
            let enemies = config
                .enemies
                .iter()
                .map(EnemyConfig::to_enemy)
                .collect::<Result<Vec<_>, _>>()?;
            room.add_enemies(enemies);

            let id = world.add_room(room);
            ids.insert(&config.name, id);
            built.push((id, config));
        }

        for (id, config) in built {
            let exits = config
                .exits
                .iter()
                .map(|exit| {
                    ids.get(exit.as_str())
                        .copied()
                        .ok_or_else(|| ConfigError::UnknownExit {
                            room: config.name.clone(),
                            exit: exit.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(room) = world.room_mut(id) {
                room.add_accessible_rooms(exits);
            }
        }

        let player = &self.player;
        let start = ids
            .get(player.start_room.as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnknownStartRoom(player.start_room.clone()))?;
        let victory_room = ids
            .get(self.victory_room.as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnknownVictoryRoom(self.victory_room.clone()))?;
        check_stats(
            &player.name,
            player.hit_points,
            player.attack_damage,
            player.chance_of_attack,
        )?;

        Ok(GameSetup {
            world,
            player: Player::new(
                start,
                player.hit_points,
                player.attack_damage,
                player.chance_of_attack,
            )
            .with_name(&player.name)
            .with_weapon(&player.weapon),
            victory_room,
            rules: self.rules,
        })
    }
}
