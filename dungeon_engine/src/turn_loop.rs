//! The turn loop: ask for an action, dispatch it, check the end conditions.

use dungeon_rules::{Dice, EntityId, RoomId};

use crate::choice::{Action, Choice, ChoiceProvider, CHOOSE_ACTION, ENEMY_TO_ATTACK, ROOM_TO_GO};
use crate::error::EngineError;
use crate::events::{EventSink, GameEvent};
use crate::state::{GameState, GameStatus};

/// Drives a [`GameState`] one turn at a time.
///
/// - `P`: where decisions come from (console, script)
/// - `D`: the random source for encounters and attacks
/// - `S`: where events go
#[derive(Debug)]
pub struct TurnLoop<P, D, S> {
    provider: P,
    dice: D,
    sink: S,
}

impl<P, D, S> TurnLoop<P, D, S>
where
    P: ChoiceProvider,
    D: Dice,
    S: EventSink,
{
    pub fn new(provider: P, dice: D, sink: S) -> Self {
        Self {
            provider,
            dice,
            sink,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (P, D, S) {
        (self.provider, self.dice, self.sink)
    }

    /// Play turns until the game is won, lost or quit.
    pub fn run(&mut self, state: &mut GameState) -> Result<GameStatus, EngineError> {
        let mut turns = 0u64;
        while !state.status().is_finished() {
            self.play_turn(state)?;
            turns += 1;
        }
        tracing::info!(status = ?state.status(), turns, "game finished");
        Ok(state.status())
    }

    /// Play a single turn. A finished game is left untouched.
    pub fn play_turn(&mut self, state: &mut GameState) -> Result<GameStatus, EngineError> {
        if state.status().is_finished() {
            return Ok(state.status());
        }

        let menu = Action::menu();
        let action = *self.provider.choose(CHOOSE_ACTION, &menu)?;
        tracing::debug!(?action, "action chosen");

        match action {
            Action::LookAround => state.look_around(&mut self.dice, &mut self.sink)?,
            Action::GoToRoom => self.go_to_room(state)?,
            Action::Attack => self.attack(state)?,
            Action::Exit => state.quit(),
        }

        Ok(state.evaluate(&mut self.sink))
    }

    fn go_to_room(&mut self, state: &mut GameState) -> Result<(), EngineError> {
        let here = state.current_room()?.id;
        let options: Vec<Choice<RoomId>> = state
            .world()
            .exits_from(here)
            .into_iter()
            .map(|room| Choice::new(&room.name, room.id))
            .collect();
        if options.is_empty() {
            self.sink.emit(GameEvent::NoExits);
            return Ok(());
        }

        let destination = *self.provider.choose(ROOM_TO_GO, &options)?;
        state.set_current_room(destination)?;
        self.sink.emit(GameEvent::Moved {
            room: state.current_room()?.name.clone(),
        });
        state.look_around(&mut self.dice, &mut self.sink)
    }

    fn attack(&mut self, state: &mut GameState) -> Result<(), EngineError> {
        let options: Vec<Choice<EntityId>> = state
            .current_room()?
            .enemies
            .iter()
            .map(|enemy| Choice::new(&enemy.name, enemy.id))
            .collect();
        if options.is_empty() {
            self.sink.emit(GameEvent::NoEnemyToAttack);
            return Ok(());
        }

        let target = *self.provider.choose(ENEMY_TO_ATTACK, &options)?;
        state.attack_on_enemy(target, &mut self.dice, &mut self.sink)?;
        Ok(())
    }
}
