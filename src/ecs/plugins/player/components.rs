use bevy::prelude::*;
use std::collections::HashMap;

use crate::ecs::core::Position;
use crate::ecs::plugins::collision::components::CollisionState;
use crate::ecs::plugins::input::components::MoveInput;
use crate::ecs::plugins::movement::components::{MovementConfig, MovementState, Velocity};

#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    pub id: u32,
}

/// Everything a controllable player entity carries: the movement controller's
/// config and state, its sensors, and the owned physics-body state.
#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub position: Position,
    pub velocity: Velocity,
    pub input: MoveInput,
    pub state: MovementState,
    pub config: MovementConfig,
    pub collision: CollisionState,
}

impl PlayerBundle {
    pub fn new(player_id: u32, spawn: Vec2) -> Self {
        Self::with_config(player_id, spawn, MovementConfig::default())
    }

    pub fn with_config(player_id: u32, spawn: Vec2, config: MovementConfig) -> Self {
        Self {
            player: Player { id: player_id },
            position: Position {
                x: spawn.x,
                y: spawn.y,
            },
            velocity: Velocity::default(),
            input: MoveInput::default(),
            state: MovementState::default(),
            config,
            collision: CollisionState::default(),
        }
    }
}

#[derive(Event)]
pub struct PlayerSpawnEvent {
    pub player_id: u32,
    /// Movement tuning to spawn with (defaults or a loaded tuning file).
    pub config: MovementConfig,
}

#[derive(Event)]
pub struct PlayerDespawnEvent {
    pub player_id: u32,
}

#[derive(Resource, Default)]
pub struct PlayerRegistry {
    pub players: HashMap<u32, Entity>,
}

impl PlayerRegistry {
    pub fn register_player(&mut self, player_id: u32, entity: Entity) {
        self.players.insert(player_id, entity);
    }

    pub fn unregister_player(&mut self, player_id: u32) -> Option<Entity> {
        self.players.remove(&player_id)
    }

    pub fn get_player_entity(&self, player_id: u32) -> Option<Entity> {
        self.players.get(&player_id).copied()
    }
}
