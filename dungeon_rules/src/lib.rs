//! # Dungeon Rules
//!
//! The rules crate for the Orientus dungeon: rooms and their one-way exits,
//! enemies, the player, attack resolution, and the TOML world description.
//! It holds no game loop and does no I/O beyond parsing.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
