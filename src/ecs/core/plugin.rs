use bevy::prelude::*;
use crate::ecs::core::resources::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameConfig::default())
            .insert_resource(Gravity::default())
            .insert_resource(LastKnownPosition::default());
    }
}
