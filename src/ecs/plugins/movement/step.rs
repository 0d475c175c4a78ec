/*!
Pure per-tick velocity rules for the platformer controller.

Each function computes one velocity-modification rule of the fixed tick as a
plain value transform, so the rules can be unit tested without spinning up an
app. The systems in `systems.rs` are thin wrappers that read/write components
and delegate here.

All blend-factor parameters are per-fixed-tick lerp weights in [0, 1]; the
rates are tuned against the fixed timestep, not integrated over a variable
delta.
*/

use bevy::math::FloatExt;
use bevy::prelude::*;

use crate::ecs::plugins::collision::components::CollisionState;
use crate::ecs::plugins::movement::components::{MovementConfig, Velocity};

/// Slow-zone damping: blend the whole velocity vector toward zero. Runs
/// before every other fixed-tick rule so walking/jumping still act on top of
/// the damped base velocity within the same tick.
pub fn damp_in_slow_zone(velocity: Vec2, factor: f32) -> Vec2 {
    velocity.lerp(Vec2::ZERO, factor)
}

/// Horizontal walk blend. Picks the accel/decel rate for the current contact
/// situation, then lerps the horizontal velocity toward the input's target
/// speed. The vertical component is untouched by the caller.
pub fn walk_velocity(
    current_vx: f32,
    move_x: f32,
    on_ground: bool,
    is_wall_jumping: bool,
    config: &MovementConfig,
) -> f32 {
    let target_speed = move_x * config.walk_target_speed;

    let mut accel_rate = if move_x.abs() > 0.0 {
        if on_ground {
            config.acceleration
        } else {
            config.air_acceleration
        }
    } else if on_ground {
        config.deceleration
    } else {
        config.air_deceleration
    };

    // Reduced control right after a wall jump, so the player cannot
    // immediately cancel the away-from-wall momentum.
    if is_wall_jumping {
        accel_rate /= 3.0;
    }

    // Over-speed momentum in the air (wall jumps, explosions) bleeds off at
    // its own rate instead of the normal air accel/decel.
    if current_vx.abs() > config.walk_target_speed && !on_ground {
        accel_rate = config.air_over_speed_deceleration;
    }

    current_vx.lerp(target_speed, accel_rate)
}

/// Vertical air dynamics: extra fall gravity below zero velocity, then the
/// ascent cutoff while a jump or rocket jump is in flight. Order matters; the
/// fall multiplier only ever sees negative velocity.
pub fn air_vertical_velocity(
    mut vy: f32,
    is_jumping: bool,
    in_rocket_jump: bool,
    gravity_y: f32,
    dt: f32,
    config: &MovementConfig,
) -> f32 {
    if vy < 0.0 {
        vy += gravity_y * (config.fall_multiplier - 1.0) * dt;
    }

    if is_jumping || in_rocket_jump {
        let rate = if in_rocket_jump {
            config.rocket_jump_deceleration
        } else {
            config.jump_up_deceleration
        };
        vy = vy.lerp(0.0, rate);
    }

    vy
}

/// Wall slide engages only while pushing *into* a touched wall: nonzero
/// horizontal input whose sign opposes the wall's outward normal.
pub fn wall_slide_engages(collision: &CollisionState, move_x: f32) -> bool {
    collision.on_wall && move_x != 0.0 && collision.wall_side.signum() != move_x.signum()
}

/// Wall-slide vertical blend: kill upward velocity quickly, then ease into a
/// capped downward slide speed.
pub fn wall_slide_velocity(vy: f32, config: &MovementConfig) -> f32 {
    if vy > 0.0 {
        vy.lerp(0.0, config.wall_slide_up_deceleration)
    } else {
        vy.lerp(-config.max_wall_slide_down_speed, config.wall_slide_down_acceleration)
    }
}

/// Jump impulse: the vertical component is zeroed first, so jump height never
/// depends on whatever vertical speed the body had going in.
pub fn jump_velocity(velocity: Vec2, direction: Vec2, jump_force: f32) -> Vec2 {
    Vec2::new(velocity.x, 0.0) + direction * jump_force
}

/// Wall-jump direction: up and away from the contacted wall, both axes scaled
/// down so the impulse differs from a pure vertical jump.
pub fn wall_jump_direction(on_right_wall: bool) -> Vec2 {
    let wall_dir = if on_right_wall { Vec2::NEG_X } else { Vec2::X };
    (Vec2::Y + wall_dir) / 1.5
}

/// Walking means actually moving horizontally while grounded. Always false in
/// the air, no matter the speed.
pub fn is_walking(velocity: &Velocity, collision: &CollisionState) -> bool {
    velocity.x.abs() > 0.0 && collision.on_ground
}
