//! World state: the room graph and the enemies living in it.

mod config;

pub use config::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::{Enemy, EntityId};

/// Unique identifier for rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the dungeon graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Empty means there is nothing to see when looking around.
    pub description: String,
    /// Directed edges, in the order they were declared.
    pub accessible_rooms: Vec<RoomId>,
    pub enemies: Vec<Enemy>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(),
            name: name.into(),
            description: description.into(),
            accessible_rooms: Vec::new(),
            enemies: Vec::new(),
        }
    }

    pub fn is_described(&self) -> bool {
        !self.description.is_empty()
    }

    /// Append enemies. Duplicates are not checked.
    pub fn add_enemies(&mut self, enemies: impl IntoIterator<Item = Enemy>) {
        self.enemies.extend(enemies);
    }

    /// Append one-way exits. The reverse direction must be added on the
    /// other room.
    pub fn add_accessible_rooms(&mut self, rooms: impl IntoIterator<Item = RoomId>) {
        self.accessible_rooms.extend(rooms);
    }

    pub fn has_enemies(&self) -> bool {
        !self.enemies.is_empty()
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    /// Remove an enemy for good, keeping the order of the others.
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        Some(self.enemies.remove(index))
    }
}

/// All rooms of one dungeon.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room to the world.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id;
        self.rooms.insert(id, room);
        id
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    /// Look a room up by its display name.
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms().find(|room| room.name == name)
    }

    /// Rooms reachable from `id`, in exit order. Dangling exits are skipped.
    pub fn exits_from(&self, id: RoomId) -> Vec<&Room> {
        self.room(id)
            .map(|room| {
                room.accessible_rooms
                    .iter()
                    .filter_map(|exit| self.room(*exit))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
