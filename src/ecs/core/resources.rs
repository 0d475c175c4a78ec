use bevy::prelude::*;

#[derive(Resource)]
pub struct GameConfig {
    pub world_bounds: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_bounds: Vec2::new(48.0, 27.0),
        }
    }
}

/// Global gravity vector (units/second^2). Read-only for the controller.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Gravity(pub Vec2);

impl Default for Gravity {
    fn default() -> Self {
        Self(Vec2::new(0.0, -25.0))
    }
}

/// Most recent player position, overwritten every frame tick.
///
/// Replaces ambient global state: any system that needs "where is the player
/// right now" (camera, enemy AI, audio) reads this snapshot instead of
/// querying the player entity directly.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastKnownPosition(pub Vec2);
