//! Error types for world configuration.

/// Errors raised while loading or validating a world.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a world description.
    #[error("failed to parse world configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two rooms share a name, so exits would be ambiguous.
    #[error("room {0:?} is declared more than once")]
    DuplicateRoom(String),

    #[error("room {room:?} has an exit to unknown room {exit:?}")]
    UnknownExit { room: String, exit: String },

    #[error("player start room {0:?} does not exist")]
    UnknownStartRoom(String),

    #[error("victory room {0:?} does not exist")]
    UnknownVictoryRoom(String),

    #[error("{owner}: chance of attack {chance} is above 100")]
    ChanceOutOfRange { owner: String, chance: u8 },

    #[error("{owner}: {field} must not be negative (got {value})")]
    NegativeStat {
        owner: String,
        field: &'static str,
        value: i32,
    },
}
