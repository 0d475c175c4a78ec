/*!
# Debug Systems

Development tools for watching the controller state while the headless sim
runs. All debug output can be safely removed in production builds.
*/

use bevy::prelude::*;

use crate::ecs::core::Position;
use crate::ecs::plugins::collision::components::CollisionState;
use crate::ecs::plugins::movement::components::{MovementState, Velocity};
use crate::ecs::plugins::movement::step;
use crate::ecs::plugins::player::components::Player;

/// How often to print debug information (in seconds)
const DEBUG_PRINT_INTERVAL: f32 = 1.0;

/// Resource to track when we last printed debug info
#[derive(Resource, Default)]
pub struct DebugTimer {
    last_print_time: f32,
}

/// Prints each player's position, velocity, and active movement flags once
/// per interval.
pub fn debug_system(
    player_query: Query<(&Player, &Position, &Velocity, &MovementState, &CollisionState)>,
    time: Res<Time>,
    mut debug_timer: ResMut<DebugTimer>,
) {
    let current_time = time.elapsed_secs();

    if current_time - debug_timer.last_print_time > DEBUG_PRINT_INTERVAL {
        for (player, position, velocity, state, collision) in player_query.iter() {
            let mut flags = Vec::new();
            if state.is_jumping {
                flags.push("jumping");
            }
            if state.in_rocket_jump {
                flags.push("rocket");
            }
            if state.is_wall_jumping {
                flags.push("wall-jump");
            }
            if state.in_slow_zone {
                flags.push("slowed");
            }
            if step::is_walking(velocity, collision) {
                flags.push("walking");
            }
            if collision.on_wall {
                flags.push("on-wall");
            }

            println!(
                "Player {}: pos ({:.1}, {:.1}) vel ({:.2}, {:.2}) dir {} [{}]",
                player.id,
                position.x,
                position.y,
                velocity.x,
                velocity.y,
                velocity.move_direction(),
                flags.join(", ")
            );
        }

        debug_timer.last_print_time = current_time;
    }
}
