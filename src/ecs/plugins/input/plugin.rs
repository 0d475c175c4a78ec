use bevy::prelude::*;
use crate::ecs::plugins::input::components::*;
use crate::ecs::plugins::input::systems::*;

/// Label for the per-frame input pipeline, so the controller's frame tick can
/// order itself after the sensors are up to date.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputSystems;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InputCommandEvent>()
            .insert_resource(InputBuffer::default())
            .add_systems(
                Update,
                (
                    input_validation_system,
                    input_event_system,
                    input_processing_system,
                )
                    .chain()
                    .in_set(InputSystems),
            );
    }
}
