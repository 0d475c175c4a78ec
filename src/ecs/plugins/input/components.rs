use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputCommand {
    Move { direction: Vec2 },
    Jump,
    Stop,
}

#[derive(Event)]
pub struct InputCommandEvent {
    pub player_id: u32,
    pub command: InputCommand,
}

/// Commands received this frame, queued per player until the processing
/// system folds them into each player's [`MoveInput`].
#[derive(Resource, Default)]
pub struct InputBuffer {
    pub commands: HashMap<u32, Vec<InputCommand>>,
}

/// Input sensor read by the movement controller.
///
/// `jump_pressed` is a one-shot: it stays latched until the frame tick
/// consumes it, whether or not a jump actually fires.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub move_axis: Vec2,
    pub jump_pressed: bool,
}
