//! Game events: everything the player gets to read, in order.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DOORWAY_MESSAGE: &str = "There are doorways leading to:";
const SEPARATOR: &str = "-----------------------";

/// One observable thing that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// The player surveyed a described room.
    LookedAround {
        room: String,
        description: String,
        exits: Vec<String>,
    },
    /// An enemy was picked out of the room's occupants.
    EnemySpotted { enemy: String },
    /// Closes a look-around, after any encounter it started.
    LookFinished,
    AttackLaunched {
        attacker: String,
        target: String,
        weapon: String,
    },
    AttackHit {
        attacker: String,
        target: String,
        damage: i32,
    },
    AttackMissed { attacker: String },
    PlayerWounded { player: String, hit_points: i32 },
    EnemyDefeated { enemy: String },
    PlayerDefeated { player: String },
    Moved { room: String },
    NoEnemyToAttack,
    NoExits,
    Victory,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookedAround {
                room,
                description,
                exits,
            } => {
                writeln!(f, "{SEPARATOR}")?;
                writeln!(f, "You look around")?;
                writeln!(f, "You are in the {room} and {description}")?;
                writeln!(f)?;
                write!(f, "{DOORWAY_MESSAGE}")?;
                for exit in exits {
                    write!(f, "\n{exit}")?;
                }
                Ok(())
            }
            Self::EnemySpotted { enemy } => write!(f, "You see a {enemy}"),
            Self::LookFinished => write!(f, "\n{SEPARATOR}"),
            Self::AttackLaunched {
                attacker,
                target,
                weapon,
            } => write!(f, "{attacker} attacks {target} with its {weapon}"),
            Self::AttackHit {
                attacker,
                target,
                damage,
            } => write!(f, "{attacker} hits {target} with {damage} points!"),
            Self::AttackMissed { attacker } => write!(f, "{attacker} attack misses!"),
            Self::PlayerWounded { player, hit_points } => {
                write!(f, "{player} is hit and has {hit_points} hitpoints remaining")
            }
            Self::EnemyDefeated { enemy } => write!(f, "{enemy} is defeated!"),
            Self::PlayerDefeated { player } => write!(f, "{player} has fallen. Game over."),
            Self::Moved { room } => write!(f, "You move to {room}"),
            Self::NoEnemyToAttack => write!(f, "No enemy in the room to attack!"),
            Self::NoExits => write!(f, "There is no way out of here!"),
            Self::Victory => write!(f, "Congratulations, you made through the dungeons!"),
        }
    }
}

/// Receiver of game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
