use bevy::prelude::*;
use crate::ecs::plugins::input::plugin::InputSystems;
use crate::ecs::plugins::movement::components::*;
use crate::ecs::plugins::movement::systems::*;

/// Label for the fixed-tick velocity state machine. The collision plugin
/// sandwiches it between contact sensing and body integration.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JumpedEvent>()
            .add_event::<WallJumpedEvent>()
            .add_event::<RocketJumpedEvent>()
            .add_event::<SetSlowedEvent>()
            .add_event::<SetWalkSpeedEvent>()
            .add_event::<RocketJumpEvent>()
            .add_systems(
                FixedUpdate,
                (
                    slow_zone_system,
                    walk_system,
                    air_velocity_system,
                    wall_slide_system,
                )
                    .chain()
                    .in_set(ControllerSystems),
            )
            .add_systems(
                Update,
                (
                    set_slowed_system,
                    set_walk_speed_system,
                    rocket_jump_system,
                    frame_tick_system,
                )
                    .chain()
                    .after(InputSystems),
            );
    }
}
