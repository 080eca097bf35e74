//! The session state threaded through the turn loop.

use dungeon_rules::{GameRules, GameSetup, Player, Room, RoomId, World};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::events::{EventSink, GameEvent};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// The player reached the victory room alive.
    Won,
    /// The player ran out of hit points.
    Lost,
    /// The player chose to exit.
    Quit,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The whole mutable world of one session: rooms, enemies, the player and
/// how the game ended, if it has.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) world: World,
    pub(crate) player: Player,
    victory_room: RoomId,
    pub(crate) rules: GameRules,
    status: GameStatus,
}

impl GameState {
    pub fn new(world: World, player: Player, victory_room: RoomId) -> Self {
        Self {
            world,
            player,
            victory_room,
            rules: GameRules::default(),
            status: GameStatus::InProgress,
        }
    }

    pub fn from_setup(setup: GameSetup) -> Self {
        Self::new(setup.world, setup.player, setup.victory_room).with_rules(setup.rules)
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn victory_room(&self) -> RoomId {
        self.victory_room
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_room(&self) -> Result<&Room, EngineError> {
        let id = self.player.current_room;
        self.world.room(id).ok_or(EngineError::UnknownRoom(id))
    }

    pub(crate) fn quit(&mut self) {
        if !self.status.is_finished() {
            tracing::info!("player left the dungeon");
            self.status = GameStatus::Quit;
        }
    }

    /// Check the end conditions after a turn.
    ///
    /// Defeat wins over victory: reaching the victory room only counts with
    /// hit points left.
    pub fn evaluate(&mut self, sink: &mut impl EventSink) -> GameStatus {
        if self.status.is_finished() {
            return self.status;
        }
        if self.player.is_defeated() {
            tracing::info!(player = %self.player.name, "player defeated");
            sink.emit(GameEvent::PlayerDefeated {
                player: self.player.name.clone(),
            });
            self.status = GameStatus::Lost;
        } else if self.player.current_room == self.victory_room {
            tracing::info!(room = %self.victory_room, "victory room reached");
            sink.emit(GameEvent::Victory);
            self.status = GameStatus::Won;
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> (GameState, RoomId, RoomId) {
        let mut world = World::new();
        let start = world.add_room(Room::new("Cell", "a bare cell"));
        let exit = world.add_room(Room::new("Gate", ""));
        let state = GameState::new(world, Player::new(start, 10, 2, 75), exit);
        (state, start, exit)
    }

    #[test]
    fn test_new_state_is_in_progress() {
        let (mut state, _, _) = two_rooms();
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(state.evaluate(&mut events), GameStatus::InProgress);
        assert!(events.is_empty());
        assert_eq!(state.current_room().unwrap().name, "Cell");
    }

    #[test]
    fn test_victory_room_wins() {
        let (mut state, _, exit) = two_rooms();
        state.player_mut().set_current_room(exit);
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(state.evaluate(&mut events), GameStatus::Won);
        assert_eq!(events, vec![GameEvent::Victory]);

        // Already finished: no second announcement.
        assert_eq!(state.evaluate(&mut events), GameStatus::Won);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_defeat_beats_victory() {
        let (mut state, _, exit) = two_rooms();
        state.player_mut().set_current_room(exit);
        state.player_mut().absorb(10);
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(state.evaluate(&mut events), GameStatus::Lost);
        assert!(matches!(events[0], GameEvent::PlayerDefeated { .. }));
    }

    #[test]
    fn test_quit_is_final() {
        let (mut state, _, exit) = two_rooms();
        state.quit();
        state.player_mut().set_current_room(exit);
        assert_eq!(state.evaluate(&mut Vec::<GameEvent>::new()), GameStatus::Quit);
        assert!(state.status().is_finished());
    }

    #[test]
    fn test_unknown_current_room() {
        let (mut state, _, _) = two_rooms();
        let ghost = RoomId::new();
        state.player_mut().set_current_room(ghost);
        assert!(matches!(
            state.current_room(),
            Err(EngineError::UnknownRoom(id)) if id == ghost
        ));
    }
}
