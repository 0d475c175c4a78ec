use bevy::prelude::*;
use crate::ecs::plugins::collision::systems::*;
use crate::ecs::plugins::movement::plugin::ControllerSystems;

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                collision_sensor_system.before(ControllerSystems),
                physics_body_system.after(ControllerSystems),
            ),
        );
    }
}
