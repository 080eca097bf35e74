//! Player controller: moving, looking around and fighting.

use dungeon_rules::{AttackOutcome, Dice, EntityId, RoomId};

use crate::error::EngineError;
use crate::events::{EventSink, GameEvent};
use crate::state::GameState;

fn narrate_attack(
    sink: &mut impl EventSink,
    attacker: &str,
    target: &str,
    weapon: &str,
    outcome: &AttackOutcome,
) {
    sink.emit(GameEvent::AttackLaunched {
        attacker: attacker.to_string(),
        target: target.to_string(),
        weapon: weapon.to_string(),
    });
    if outcome.hit {
        sink.emit(GameEvent::AttackHit {
            attacker: attacker.to_string(),
            target: target.to_string(),
            damage: outcome.damage,
        });
    } else {
        sink.emit(GameEvent::AttackMissed {
            attacker: attacker.to_string(),
        });
    }
}

impl GameState {
    /// Put the player in `room`. Adjacency is not checked; only existence.
    pub fn set_current_room(&mut self, room: RoomId) -> Result<(), EngineError> {
        if self.world.room(room).is_none() {
            return Err(EngineError::UnknownRoom(room));
        }
        self.player.set_current_room(room);
        tracing::debug!(%room, "player changed room");
        Ok(())
    }

    /// Survey the current room.
    ///
    /// Undescribed rooms yield nothing. Otherwise the room and its exits are
    /// reported, and if enemies are present one of them is picked at random
    /// and, when ambushes are on, attacks the player. Every call draws a new
    /// enemy. The report ends with `LookFinished`, after the encounter.
    pub fn look_around(
        &mut self,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> Result<(), EngineError> {
        let room = self.current_room()?;
        if !room.is_described() {
            return Ok(());
        }

        let exits = self
            .world
            .exits_from(room.id)
            .into_iter()
            .map(|exit| exit.name.clone())
            .collect();
        sink.emit(GameEvent::LookedAround {
            room: room.name.clone(),
            description: room.description.clone(),
            exits,
        });

        self.spot_enemy(dice, sink)?;
        sink.emit(GameEvent::LookFinished);
        Ok(())
    }

    fn spot_enemy(
        &mut self,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> Result<(), EngineError> {
        let room = self.current_room()?;
        if !room.has_enemies() {
            return Ok(());
        }
        let pick = dice.pick(room.enemies.len());
        let Some(enemy) = room.enemies.get(pick) else {
            return Ok(());
        };
        let enemy_id = enemy.id;
        sink.emit(GameEvent::EnemySpotted {
            enemy: enemy.name.clone(),
        });

        if self.rules.ambush_on_look {
            self.attack_by_enemy(enemy_id, dice, sink)?;
        }
        Ok(())
    }

    /// Let an enemy of the current room attack the player.
    ///
    /// Does nothing when the enemy is gone or already dead. Hit points
    /// floor at zero.
    pub fn attack_by_enemy(
        &mut self,
        enemy: EntityId,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> Result<Option<AttackOutcome>, EngineError> {
        let room = self.current_room()?;
        let Some(enemy) = room.enemy(enemy).filter(|enemy| enemy.is_alive()) else {
            return Ok(None);
        };

        let outcome = enemy.profile.attack(dice);
        narrate_attack(
            sink,
            &enemy.name,
            &self.player.name,
            &enemy.profile.weapon,
            &outcome,
        );

        let remaining = self.player.absorb(outcome.damage);
        if outcome.damage > 0 {
            sink.emit(GameEvent::PlayerWounded {
                player: self.player.name.clone(),
                hit_points: remaining,
            });
        }
        Ok(Some(outcome))
    }

    /// Attack an enemy of the current room, removing it once its hit points
    /// drop to zero or below.
    ///
    /// Does nothing when the enemy is gone or already dead.
    pub fn attack_on_enemy(
        &mut self,
        enemy: EntityId,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> Result<Option<AttackOutcome>, EngineError> {
        let room_id = self.player.current_room;
        let room = self
            .world
            .room_mut(room_id)
            .ok_or(EngineError::UnknownRoom(room_id))?;
        let Some(target) = room.enemy_mut(enemy).filter(|target| target.is_alive()) else {
            return Ok(None);
        };

        let outcome = self.player.profile.attack(dice);
        narrate_attack(
            sink,
            &self.player.name,
            &target.name,
            &self.player.profile.weapon,
            &outcome,
        );

        if target.profile.take_damage(outcome.damage) <= 0 {
            let name = target.name.clone();
            room.remove_enemy(enemy);
            tracing::debug!(enemy = %name, room = %room.name, "enemy removed");
            sink.emit(GameEvent::EnemyDefeated { enemy: name });
        }
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_rules::{Enemy, GameRules, Player, Room, ScriptedDice, World};

    struct Fixture {
        state: GameState,
        cell: RoomId,
        hall: RoomId,
        rat: EntityId,
    }

    fn fixture() -> Fixture {
        let mut world = World::new();
        let mut cell = Room::new("Cell", "a bare cell");
        let mut hall = Room::new("Hall", "a draughty hall");
        let rat = Enemy::new("Rat", 2, 1, 50, "Sharp teeths");
        let rat_id = rat.id;
        hall.add_enemies([rat]);
        cell.add_accessible_rooms([hall.id]);
        hall.add_accessible_rooms([cell.id]);
        let cell = world.add_room(cell);
        let hall = world.add_room(hall);
        let portal = world.add_room(Room::new("Portal", ""));
        let state = GameState::new(world, Player::new(cell, 10, 2, 75), portal);
        Fixture {
            state,
            cell,
            hall,
            rat: rat_id,
        }
    }

    #[test]
    fn test_set_current_room_rejects_unknown_rooms() {
        let Fixture { mut state, cell, .. } = fixture();
        assert!(state.set_current_room(RoomId::new()).is_err());
        assert_eq!(state.player().current_room, cell);
    }

    #[test]
    fn test_look_around_empty_room_lists_exits() {
        let Fixture { mut state, .. } = fixture();
        let mut dice = ScriptedDice::new();
        let mut events: Vec<GameEvent> = Vec::new();
        state.look_around(&mut dice, &mut events).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::LookedAround {
                    room: "Cell".into(),
                    description: "a bare cell".into(),
                    exits: vec!["Hall".into()],
                },
                GameEvent::LookFinished,
            ]
        );
    }

    #[test]
    fn test_look_around_undescribed_room_is_silent() {
        let Fixture { mut state, .. } = fixture();
        let portal = state.victory_room();
        state.set_current_room(portal).unwrap();
        let mut dice = ScriptedDice::new().rolls([1]).picks([0]);
        let mut events: Vec<GameEvent> = Vec::new();
        state.look_around(&mut dice, &mut events).unwrap();
        assert!(events.is_empty());
        assert_eq!(dice.remaining(), 2);
    }

    #[test]
    fn test_look_around_undescribed_room_holds_its_enemies_back() {
        let Fixture { mut state, .. } = fixture();
        let mut den = Room::new("Den", "");
        den.add_enemies([Enemy::new("Lurker", 5, 9, 100, "Claws")]);
        let den = state.world_mut().add_room(den);
        state.set_current_room(den).unwrap();

        let mut dice = ScriptedDice::new().rolls([1]).picks([0]);
        let mut events: Vec<GameEvent> = Vec::new();
        state.look_around(&mut dice, &mut events).unwrap();
        assert!(events.is_empty());
        assert_eq!(state.player().hit_points(), 10);
        assert_eq!(dice.remaining(), 2);
        assert_eq!(state.world().room(den).unwrap().enemies.len(), 1);
    }

    #[test]
    fn test_look_around_triggers_ambush() {
        let Fixture { mut state, hall, .. } = fixture();
        state.set_current_room(hall).unwrap();
        let mut dice = ScriptedDice::new().rolls([10]);
        let mut events: Vec<GameEvent> = Vec::new();
        state.look_around(&mut dice, &mut events).unwrap();

        assert_eq!(state.player().hit_points(), 9);
        assert_eq!(
            events[1..],
            [
                GameEvent::EnemySpotted {
                    enemy: "Rat".into(),
                },
                GameEvent::AttackLaunched {
                    attacker: "Rat".into(),
                    target: "Player".into(),
                    weapon: "Sharp teeths".into(),
                },
                GameEvent::AttackHit {
                    attacker: "Rat".into(),
                    target: "Player".into(),
                    damage: 1,
                },
                GameEvent::PlayerWounded {
                    player: "Player".into(),
                    hit_points: 9,
                },
                GameEvent::LookFinished,
            ]
        );
    }

    #[test]
    fn test_look_around_without_ambush_only_spots() {
        let Fixture { state, hall, .. } = fixture();
        let mut state = state.with_rules(GameRules {
            ambush_on_look: false,
        });
        state.set_current_room(hall).unwrap();
        let mut dice = ScriptedDice::new().rolls([1]);
        let mut events: Vec<GameEvent> = Vec::new();
        state.look_around(&mut dice, &mut events).unwrap();
        assert_eq!(state.player().hit_points(), 10);
        assert_eq!(
            events[1..],
            [
                GameEvent::EnemySpotted {
                    enemy: "Rat".into(),
                },
                GameEvent::LookFinished,
            ]
        );
    }

    #[test]
    fn test_missed_ambush_reports_no_wound() {
        let Fixture { mut state, hall, rat, .. } = fixture();
        state.set_current_room(hall).unwrap();
        let mut dice = ScriptedDice::new().rolls([51]);
        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = state.attack_by_enemy(rat, &mut dice, &mut events).unwrap();
        assert_eq!(outcome.map(|o| o.hit), Some(false));
        assert_eq!(state.player().hit_points(), 10);
        assert_eq!(
            events.last(),
            Some(&GameEvent::AttackMissed {
                attacker: "Rat".into(),
            })
        );
    }

    #[test]
    fn test_hit_points_never_drop_below_zero() {
        let Fixture { mut state, hall, .. } = fixture();
        let brute = Enemy::new("Brute", 5, 7, 100, "Club");
        let brute_id = brute.id;
        state.world_mut().room_mut(hall).unwrap().add_enemies([brute]);
        state.set_current_room(hall).unwrap();

        let mut dice = ScriptedDice::new().rolls([1, 1, 1]);
        let mut events: Vec<GameEvent> = Vec::new();
        for _ in 0..3 {
            state.attack_by_enemy(brute_id, &mut dice, &mut events).unwrap();
            assert!(state.player().hit_points() >= 0);
        }
        assert_eq!(state.player().hit_points(), 0);
    }

    #[test]
    fn test_killing_blow_removes_enemy() {
        let Fixture { mut state, hall, rat, .. } = fixture();
        state.set_current_room(hall).unwrap();

        // 75% chance: 80 misses, 75 hits for 2 against 2 hit points.
        let mut dice = ScriptedDice::new().rolls([80, 75]);
        let mut events: Vec<GameEvent> = Vec::new();
        let miss = state.attack_on_enemy(rat, &mut dice, &mut events).unwrap();
        assert_eq!(miss.map(|o| o.damage), Some(0));
        assert_eq!(state.world().room(hall).unwrap().enemies.len(), 1);

        let hit = state.attack_on_enemy(rat, &mut dice, &mut events).unwrap();
        assert_eq!(hit.map(|o| o.damage), Some(2));
        assert!(state.world().room(hall).unwrap().enemies.is_empty());
        assert_eq!(
            events.last(),
            Some(&GameEvent::EnemyDefeated {
                enemy: "Rat".into(),
            })
        );

        // Stale id: nothing happens and no dice are used.
        let mut dice = ScriptedDice::new().rolls([1]);
        let again = state.attack_on_enemy(rat, &mut dice, &mut events).unwrap();
        assert!(again.is_none());
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn test_enemy_in_another_room_is_out_of_reach() {
        let Fixture { mut state, rat, .. } = fixture();
        let mut dice = ScriptedDice::new().rolls([1]);
        let mut events: Vec<GameEvent> = Vec::new();
        assert!(state.attack_on_enemy(rat, &mut dice, &mut events).unwrap().is_none());
        assert!(state.attack_by_enemy(rat, &mut dice, &mut events).unwrap().is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn test_dead_enemy_does_not_attack() {
        let Fixture { mut state, hall, rat, .. } = fixture();
        state.set_current_room(hall).unwrap();
        if let Some(enemy) = state.world_mut().room_mut(hall).unwrap().enemy_mut(rat) {
            enemy.profile.hit_points = 0;
        }
        let mut dice = ScriptedDice::new().rolls([1]);
        let mut events: Vec<GameEvent> = Vec::new();
        assert!(state.attack_by_enemy(rat, &mut dice, &mut events).unwrap().is_none());
        assert_eq!(state.player().hit_points(), 10);
    }
}
