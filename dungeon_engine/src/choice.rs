//! Choice providers: where the turn loop gets its decisions from.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::ChoiceError;

pub const CHOOSE_ACTION: &str = "Choose your action";
pub const ROOM_TO_GO: &str = "Which room you want to go to?";
pub const ENEMY_TO_ATTACK: &str = "Which enemy you want to attack?";

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Something that picks exactly one of the offered options.
///
/// The turn loop blocks on this call; it is the only suspension point of
/// a game.
pub trait ChoiceProvider {
    fn choose<'a, T>(
        &mut self,
        prompt: &str,
        options: &'a [Choice<T>],
    ) -> Result<&'a T, ChoiceError>;
}

impl<P: ChoiceProvider> ChoiceProvider for &mut P {
    fn choose<'a, T>(
        &mut self,
        prompt: &str,
        options: &'a [Choice<T>],
    ) -> Result<&'a T, ChoiceError> {
        (**self).choose(prompt, options)
    }
}

/// The four things a player can do on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    LookAround,
    GoToRoom,
    Attack,
    Exit,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::LookAround,
        Action::GoToRoom,
        Action::Attack,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::LookAround => "Look around",
            Action::GoToRoom => "Go to Room",
            Action::Attack => "Attack",
            Action::Exit => "Exit game",
        }
    }

    /// The top-level action menu, in display order.
    pub fn menu() -> Vec<Choice<Action>> {
        Self::ALL
            .into_iter()
            .map(|action| Choice::new(action.label(), action))
            .collect()
    }
}

/// Answers prompts from a fixed list of option labels.
///
/// Every prompt it was asked is recorded, which lets tests check that a
/// menu was never shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedChoices {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose<'a, T>(
        &mut self,
        prompt: &str,
        options: &'a [Choice<T>],
    ) -> Result<&'a T, ChoiceError> {
        self.prompts.push(prompt.to_string());
        if options.is_empty() {
            return Err(ChoiceError::NoOptions {
                prompt: prompt.to_string(),
            });
        }
        let label = self
            .answers
            .pop_front()
            .ok_or_else(|| ChoiceError::InputClosed {
                prompt: prompt.to_string(),
            })?;
        options
            .iter()
            .find(|option| option.label == label)
            .map(|option| &option.value)
            .ok_or_else(|| ChoiceError::UnknownOption {
                prompt: prompt.to_string(),
                label,
            })
    }
}
