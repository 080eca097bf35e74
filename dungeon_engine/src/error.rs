//! Error types for the engine.

use dungeon_rules::RoomId;

/// Errors raised by a choice provider.
#[derive(Debug, thiserror::Error)]
pub enum ChoiceError {
    /// Nothing was offered, so nothing can be chosen.
    #[error("no options to choose from for {prompt:?}")]
    NoOptions { prompt: String },

    /// The provider has no more answers (end of input, exhausted script).
    #[error("no selection available for {prompt:?}")]
    InputClosed { prompt: String },

    /// A scripted answer named an option that was not offered.
    #[error("{label:?} is not one of the options for {prompt:?}")]
    UnknownOption { prompt: String, label: String },

    #[error("failed to read selection: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that stop the turn loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Choice(#[from] ChoiceError),

    /// The player or an exit points at a room the world does not hold.
    #[error("room {0} does not exist in this world")]
    UnknownRoom(RoomId),
}
