use bevy::prelude::*;
use crate::ecs::core::{GameConfig, Gravity, Position};
use crate::ecs::plugins::collision::components::CollisionState;
use crate::ecs::plugins::movement::components::Velocity;

/// Contact sensing against the demo world's bounds: the floor at y = 0 and
/// vertical walls at x = 0 and x = world_bounds.x. Clamps the body back
/// inside and kills the velocity component pressed into a bound.
pub fn sense_world_bounds(
    position: &mut Position,
    velocity: &mut Velocity,
    bounds: Vec2,
) -> CollisionState {
    if position.x < 0.0 {
        position.x = 0.0;
        if velocity.x < 0.0 {
            velocity.x = 0.0;
        }
    }
    if position.x > bounds.x {
        position.x = bounds.x;
        if velocity.x > 0.0 {
            velocity.x = 0.0;
        }
    }
    if position.y < 0.0 {
        position.y = 0.0;
        if velocity.y < 0.0 {
            velocity.y = 0.0;
        }
    }
    if position.y > bounds.y {
        position.y = bounds.y;
        if velocity.y > 0.0 {
            velocity.y = 0.0;
        }
    }

    let on_left_wall = position.x <= 0.0;
    let on_right_wall = position.x >= bounds.x;

    CollisionState {
        on_ground: position.y <= 0.0,
        on_wall: on_left_wall || on_right_wall,
        on_right_wall,
        // Outward normal sign of the touched wall: the left wall pushes out
        // to the right (+1), the right wall to the left (-1).
        wall_side: if on_right_wall {
            -1.0
        } else if on_left_wall {
            1.0
        } else {
            0.0
        },
    }
}

/// Refresh every body's contact sensor at the start of the fixed tick, before
/// the movement controller reads it.
pub fn collision_sensor_system(
    config: Res<GameConfig>,
    mut query: Query<(&mut Position, &mut Velocity, &mut CollisionState)>,
) {
    for (mut position, mut velocity, mut collision) in query.iter_mut() {
        *collision = sense_world_bounds(&mut position, &mut velocity, config.world_bounds);
    }
}

/// The "physics body" half of the loop: base gravity while airborne, then
/// position integration. Runs after the controller has written its velocity.
pub fn physics_body_system(
    time: Res<Time>,
    gravity: Res<Gravity>,
    mut query: Query<(&mut Position, &mut Velocity, &CollisionState)>,
) {
    let dt = time.delta_secs();
    for (mut position, mut velocity, collision) in query.iter_mut() {
        if !collision.on_ground {
            velocity.y += gravity.0.y * dt;
        }
        position.x += velocity.x * dt;
        position.y += velocity.y * dt;
    }
}
