//! # Dungeon Engine
//!
//! Runs a session of the Orientus dungeon on top of `dungeon_rules`.
//!
//! ## Core Components
//!
//! - **state**: The `GameState` threaded through every turn and its end status
//! - **controller**: Player operations: moving, looking around, fighting
//! - **turn_loop**: Asks for an action, dispatches it, checks win and loss
//! - **choice**: The choice provider seam the loop blocks on
//! - **events**: Typed game events and the sinks that receive them
//! - **console**: Stdin/stdout adapters for the `dungeon` binary
//!
//! ## Design Philosophy
//!
//! - **Single-threaded**: One mutator, one world, no locks; the loop only waits on a choice
//! - **Injectable**: Randomness, input and output all come in through traits
//! - **Inspectable**: State is an explicit value, so every turn can be checked in tests

pub mod choice;
pub mod console;
pub mod controller;
pub mod error;
pub mod events;
pub mod state;
pub mod turn_loop;

pub use choice::*;
pub use console::*;
pub use error::*;
pub use events::*;
pub use state::*;
pub use turn_loop::*;
