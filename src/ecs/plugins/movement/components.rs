use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Default for Velocity {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Velocity {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }

    /// Sign of horizontal motion: 1 moving right, -1 moving left, 0 at rest.
    pub fn move_direction(&self) -> i32 {
        if self.x > 0.0 {
            1
        } else if self.x < 0.0 {
            -1
        } else {
            0
        }
    }
}

/// Movement tuning. All `*_acceleration`/`*_deceleration` fields are
/// normalized per-fixed-tick blend factors in [0, 1], not raw accelerations.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementConfig {
    // Movement on ground
    pub walk_target_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,

    // Jump and air movement
    pub jump_force: f32,
    pub fall_multiplier: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,
    pub jump_up_deceleration: f32,
    pub air_over_speed_deceleration: f32,

    pub in_web_velocity_deceleration: f32,

    // Walls
    pub max_wall_slide_down_speed: f32,
    pub wall_slide_up_deceleration: f32,
    pub wall_slide_down_acceleration: f32,
    pub wall_jump_movement_effect_duration: f32,

    // Rocket jump
    pub rocket_jump_deceleration: f32,

    /// Walk speed captured at construction, so buff systems can restore it
    /// after a temporary `set_walk_speed`. Not part of the tuning file.
    #[serde(skip)]
    pub original_walk_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_target_speed: 8.0,
            acceleration: 0.5,
            deceleration: 0.4,
            jump_force: 12.0,
            fall_multiplier: 2.5,
            air_acceleration: 0.3,
            air_deceleration: 0.1,
            jump_up_deceleration: 0.08,
            air_over_speed_deceleration: 0.05,
            in_web_velocity_deceleration: 0.25,
            max_wall_slide_down_speed: 3.0,
            wall_slide_up_deceleration: 0.3,
            wall_slide_down_acceleration: 0.2,
            wall_jump_movement_effect_duration: 0.4,
            rocket_jump_deceleration: 0.04,
            original_walk_speed: 8.0,
        }
    }
}

impl MovementConfig {
    /// Load tuning from a JSON string. `original_walk_speed` is captured from
    /// the loaded walk speed, mirroring construction-time capture.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        let mut config: MovementConfig = serde_json::from_str(s)?;
        config.original_walk_speed = config.walk_target_speed;
        Ok(config)
    }

    pub fn set_walk_speed(&mut self, value: f32) {
        self.walk_target_speed = value;
    }
}

/// Transient movement flags. These are independently-toggled booleans, not a
/// mutually-exclusive state enum: several can hold at once and each rule in
/// the fixed tick checks exactly the flags that gate it.
#[derive(Component, Debug, Clone, Default)]
pub struct MovementState {
    pub is_jumping: bool,
    pub in_rocket_jump: bool,
    pub is_wall_jumping: bool,
    /// Reserved for a future wall-grab mechanic; never set by current logic.
    pub is_wall_grab: bool,
    pub in_slow_zone: bool,

    wall_jump_timer: Timer,
}

impl MovementState {
    /// Begin the post-wall-jump control suppression window. A second wall
    /// jump restarts the countdown rather than stacking a second one.
    pub fn start_wall_jump(&mut self, duration: f32) {
        self.is_wall_jumping = true;
        self.wall_jump_timer = Timer::from_seconds(duration, TimerMode::Once);
    }

    /// Advance the suppression countdown; clears `is_wall_jumping` once the
    /// configured duration has elapsed.
    pub fn tick_wall_jump(&mut self, delta: std::time::Duration) {
        if self.is_wall_jumping {
            self.wall_jump_timer.tick(delta);
            if self.wall_jump_timer.finished() {
                self.is_wall_jumping = false;
            }
        }
    }
}

// ============================================================================
// MOVEMENT EVENTS
// ============================================================================

/// Fired when a ground or wall jump impulse is applied (animation/audio hook).
#[derive(Event)]
pub struct JumpedEvent {
    pub player_id: u32,
}

/// Fired on wall jumps, in addition to [`JumpedEvent`].
#[derive(Event)]
pub struct WallJumpedEvent {
    pub player_id: u32,
}

/// Fired when an external ability triggers a rocket jump.
#[derive(Event)]
pub struct RocketJumpedEvent {
    pub player_id: u32,
}

/// External slow-effect source (e.g. a spider web trigger volume) toggling
/// velocity damping on or off.
#[derive(Event)]
pub struct SetSlowedEvent {
    pub player_id: u32,
    pub slowed: bool,
}

/// External buff system retuning the walk speed at runtime.
#[derive(Event)]
pub struct SetWalkSpeedEvent {
    pub player_id: u32,
    pub speed: f32,
}

/// External ability system (e.g. an explosion knockback) starting a rocket
/// jump. The impulse itself is applied by the ability; this only enables the
/// rocket-jump ascent cutoff behavior.
#[derive(Event)]
pub struct RocketJumpEvent {
    pub player_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_loads_from_json_and_captures_original_speed() {
        let json = r#"{
            "walk_target_speed": 6.0,
            "acceleration": 0.5,
            "deceleration": 0.4,
            "jump_force": 11.0,
            "fall_multiplier": 2.0,
            "air_acceleration": 0.3,
            "air_deceleration": 0.1,
            "jump_up_deceleration": 0.08,
            "air_over_speed_deceleration": 0.05,
            "in_web_velocity_deceleration": 0.25,
            "max_wall_slide_down_speed": 3.0,
            "wall_slide_up_deceleration": 0.3,
            "wall_slide_down_acceleration": 0.2,
            "wall_jump_movement_effect_duration": 0.4,
            "rocket_jump_deceleration": 0.04
        }"#;

        let config = MovementConfig::from_json(json).unwrap();
        assert_eq!(config.walk_target_speed, 6.0);
        assert_eq!(config.original_walk_speed, 6.0);
        assert_eq!(config.jump_force, 11.0);
    }

    #[test]
    fn from_json_reports_parse_errors() {
        assert!(MovementConfig::from_json("not json").is_err());
    }

    #[test]
    fn set_walk_speed_leaves_the_original_untouched() {
        let mut config = MovementConfig::default();
        config.set_walk_speed(2.0);
        assert_eq!(config.walk_target_speed, 2.0);
        assert_eq!(
            config.original_walk_speed,
            MovementConfig::default().original_walk_speed
        );
    }
}
