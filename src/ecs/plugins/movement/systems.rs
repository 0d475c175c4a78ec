use bevy::prelude::*;

use crate::ecs::core::{Gravity, LastKnownPosition, Position};
use crate::ecs::plugins::collision::components::CollisionState;
use crate::ecs::plugins::input::components::MoveInput;
use crate::ecs::plugins::movement::components::*;
use crate::ecs::plugins::movement::step;
use crate::ecs::plugins::player::components::Player;

// ============================================================================
// FIXED TICK (velocity state machine, chained in ControllerSystems order)
// ============================================================================

/// Slow-zone damping, applied before every other fixed-tick rule.
pub fn slow_zone_system(mut query: Query<(&MovementConfig, &MovementState, &mut Velocity)>) {
    for (config, state, mut velocity) in query.iter_mut() {
        if state.in_slow_zone {
            let damped =
                step::damp_in_slow_zone(velocity.as_vec2(), config.in_web_velocity_deceleration);
            velocity.set(damped);
        }
    }
}

/// Horizontal control: blend toward the input's target speed.
pub fn walk_system(
    mut query: Query<(
        &MovementConfig,
        &MovementState,
        &MoveInput,
        &CollisionState,
        &mut Velocity,
    )>,
) {
    for (config, state, input, collision, mut velocity) in query.iter_mut() {
        velocity.x = step::walk_velocity(
            velocity.x,
            input.move_axis.x,
            collision.on_ground,
            state.is_wall_jumping,
            config,
        );
    }
}

/// Vertical air dynamics: fall multiplier, then the jump/rocket ascent cutoff.
pub fn air_velocity_system(
    time: Res<Time>,
    gravity: Res<Gravity>,
    mut query: Query<(&MovementConfig, &MovementState, &mut Velocity)>,
) {
    let dt = time.delta_secs();
    for (config, state, mut velocity) in query.iter_mut() {
        velocity.y = step::air_vertical_velocity(
            velocity.y,
            state.is_jumping,
            state.in_rocket_jump,
            gravity.0.y,
            dt,
            config,
        );
    }
}

/// Wall slide, when pushing into a touched wall. Runs last so it can override
/// the vertical velocity the previous rules produced.
pub fn wall_slide_system(
    mut query: Query<(&MovementConfig, &MoveInput, &CollisionState, &mut Velocity)>,
) {
    for (config, input, collision, mut velocity) in query.iter_mut() {
        if step::wall_slide_engages(collision, input.move_axis.x) {
            velocity.y = step::wall_slide_velocity(velocity.y, config);
        }
    }
}

// ============================================================================
// FRAME TICK (input consumption and state transitions, once per app frame)
// ============================================================================

/// Per-frame controller bookkeeping:
/// - latch the player position into [`LastKnownPosition`],
/// - end jump-assist once the body is falling,
/// - advance the wall-jump suppression countdown,
/// - consume the one-shot jump flag into a ground jump or wall jump.
///
/// The jump flag is reset whether or not a jump fired; an airborne press with
/// no wall contact is simply dropped (no double jump).
pub fn frame_tick_system(
    time: Res<Time>,
    mut last_known: ResMut<LastKnownPosition>,
    mut jumped: EventWriter<JumpedEvent>,
    mut wall_jumped: EventWriter<WallJumpedEvent>,
    mut query: Query<(
        &Player,
        &Position,
        &CollisionState,
        &MovementConfig,
        &mut MoveInput,
        &mut MovementState,
        &mut Velocity,
    )>,
) {
    for (player, position, collision, config, mut input, mut state, mut velocity) in
        query.iter_mut()
    {
        last_known.0 = position.as_vec2();

        if velocity.y < 0.0 {
            state.is_jumping = false;
            state.in_rocket_jump = false;
        }

        state.tick_wall_jump(time.delta());

        if input.jump_pressed {
            if collision.on_ground {
                let v = step::jump_velocity(velocity.as_vec2(), Vec2::Y, config.jump_force);
                velocity.set(v);
                state.is_jumping = true;
                jumped.send(JumpedEvent { player_id: player.id });
            } else if collision.on_wall {
                let direction = step::wall_jump_direction(collision.on_right_wall);
                let v = step::jump_velocity(velocity.as_vec2(), direction, config.jump_force);
                velocity.set(v);
                state.is_jumping = true;
                state.start_wall_jump(config.wall_jump_movement_effect_duration);
                jumped.send(JumpedEvent { player_id: player.id });
                wall_jumped.send(WallJumpedEvent { player_id: player.id });
            }
        }

        input.jump_pressed = false;
    }
}

// ============================================================================
// EXTERNAL CONTROL (slow zones, buffs, abilities)
// ============================================================================

pub fn set_slowed_system(
    mut events: EventReader<SetSlowedEvent>,
    mut query: Query<(&Player, &mut MovementState)>,
) {
    for event in events.read() {
        for (player, mut state) in query.iter_mut() {
            if player.id == event.player_id {
                state.in_slow_zone = event.slowed;
            }
        }
    }
}

pub fn set_walk_speed_system(
    mut events: EventReader<SetWalkSpeedEvent>,
    mut query: Query<(&Player, &mut MovementConfig)>,
) {
    for event in events.read() {
        for (player, mut config) in query.iter_mut() {
            if player.id == event.player_id {
                config.set_walk_speed(event.speed);
            }
        }
    }
}

/// Start a rocket jump: only flips the flag and notifies listeners. The
/// launch impulse comes from the ability that fired the event.
pub fn rocket_jump_system(
    mut events: EventReader<RocketJumpEvent>,
    mut notifications: EventWriter<RocketJumpedEvent>,
    mut query: Query<(&Player, &mut MovementState)>,
) {
    for event in events.read() {
        for (player, mut state) in query.iter_mut() {
            if player.id == event.player_id {
                state.in_rocket_jump = true;
                notifications.send(RocketJumpedEvent { player_id: player.id });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // The frame-tick systems run in Update only, so a bare app (no fixed
    // main loop) drives them deterministically: one app.update() per frame.
    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.init_resource::<LastKnownPosition>();
        app.add_event::<JumpedEvent>();
        app.add_event::<WallJumpedEvent>();
        app.add_event::<RocketJumpedEvent>();
        app.add_event::<SetSlowedEvent>();
        app.add_event::<SetWalkSpeedEvent>();
        app.add_event::<RocketJumpEvent>();
        app.add_systems(
            Update,
            (
                set_slowed_system,
                set_walk_speed_system,
                rocket_jump_system,
                frame_tick_system,
            )
                .chain(),
        );
        app
    }

    fn spawn_player(app: &mut App, collision: CollisionState) -> Entity {
        app.world_mut()
            .spawn((
                Player { id: 1 },
                Position { x: 5.0, y: 0.0 },
                Velocity::default(),
                MoveInput::default(),
                MovementState::default(),
                MovementConfig::default(),
                collision,
            ))
            .id()
    }

    fn grounded() -> CollisionState {
        CollisionState {
            on_ground: true,
            ..Default::default()
        }
    }

    #[test]
    fn ground_jump_zeroes_prior_fall_and_applies_impulse() {
        let mut app = test_app();
        let entity = spawn_player(&mut app, grounded());

        {
            let world = app.world_mut();
            world.get_mut::<Velocity>(entity).unwrap().y = -5.0;
            world.get_mut::<Velocity>(entity).unwrap().x = 3.0;
            world.get_mut::<MoveInput>(entity).unwrap().jump_pressed = true;
        }
        app.update();

        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert_eq!(velocity.x, 3.0);
        assert_eq!(velocity.y, MovementConfig::default().jump_force);
        assert!(app.world().get::<MovementState>(entity).unwrap().is_jumping);
        assert!(!app.world().get::<MoveInput>(entity).unwrap().jump_pressed);
        assert!(!app.world().resource::<Events<JumpedEvent>>().is_empty());
        assert!(app.world().resource::<Events<WallJumpedEvent>>().is_empty());
    }

    #[test]
    fn airborne_jump_input_is_dropped_but_still_consumed() {
        let mut app = test_app();
        let entity = spawn_player(&mut app, CollisionState::default());

        app.world_mut()
            .get_mut::<MoveInput>(entity)
            .unwrap()
            .jump_pressed = true;
        app.update();

        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert_eq!(velocity.y, 0.0);
        assert!(!app.world().get::<MovementState>(entity).unwrap().is_jumping);
        assert!(!app.world().get::<MoveInput>(entity).unwrap().jump_pressed);
        assert!(app.world().resource::<Events<JumpedEvent>>().is_empty());
    }

    #[test]
    fn wall_jump_pushes_away_from_the_right_wall() {
        let mut app = test_app();
        let entity = spawn_player(
            &mut app,
            CollisionState {
                on_wall: true,
                on_right_wall: true,
                wall_side: -1.0,
                ..Default::default()
            },
        );

        app.world_mut()
            .get_mut::<MoveInput>(entity)
            .unwrap()
            .jump_pressed = true;
        app.update();

        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert!(velocity.x < 0.0);
        assert!(velocity.y > 0.0);

        let state = app.world().get::<MovementState>(entity).unwrap();
        assert!(state.is_jumping);
        assert!(state.is_wall_jumping);
        assert!(!app.world().resource::<Events<JumpedEvent>>().is_empty());
        assert!(!app.world().resource::<Events<WallJumpedEvent>>().is_empty());
    }

    #[test]
    fn wall_jump_from_left_wall_pushes_right() {
        let mut app = test_app();
        let entity = spawn_player(
            &mut app,
            CollisionState {
                on_wall: true,
                on_right_wall: false,
                wall_side: 1.0,
                ..Default::default()
            },
        );

        app.world_mut()
            .get_mut::<MoveInput>(entity)
            .unwrap()
            .jump_pressed = true;
        app.update();

        assert!(app.world().get::<Velocity>(entity).unwrap().x > 0.0);
    }

    #[test]
    fn jump_flags_clear_on_first_falling_frame_and_not_before() {
        let mut app = test_app();
        let entity = spawn_player(&mut app, CollisionState::default());

        {
            let world = app.world_mut();
            {
                let mut state = world.get_mut::<MovementState>(entity).unwrap();
                state.is_jumping = true;
                state.in_rocket_jump = true;
            }
            world.get_mut::<Velocity>(entity).unwrap().y = 1.0;
        }
        app.update();

        // Still rising: flags persist.
        let state = app.world().get::<MovementState>(entity).unwrap();
        assert!(state.is_jumping);
        assert!(state.in_rocket_jump);

        app.world_mut().get_mut::<Velocity>(entity).unwrap().y = -0.1;
        app.update();

        let state = app.world().get::<MovementState>(entity).unwrap();
        assert!(!state.is_jumping);
        assert!(!state.in_rocket_jump);
    }

    #[test]
    fn wall_jump_suppression_expires_and_restarts() {
        let mut state = MovementState::default();
        state.start_wall_jump(0.4);
        assert!(state.is_wall_jumping);

        state.tick_wall_jump(Duration::from_millis(300));
        assert!(state.is_wall_jumping);

        // A new wall jump restarts the countdown instead of stacking.
        state.start_wall_jump(0.4);
        state.tick_wall_jump(Duration::from_millis(300));
        assert!(state.is_wall_jumping);

        state.tick_wall_jump(Duration::from_millis(150));
        assert!(!state.is_wall_jumping);
    }

    #[test]
    fn rocket_jump_event_sets_flag_and_notifies() {
        let mut app = test_app();
        let entity = spawn_player(&mut app, CollisionState::default());

        app.world_mut().send_event(RocketJumpEvent { player_id: 1 });
        app.update();

        assert!(
            app.world()
                .get::<MovementState>(entity)
                .unwrap()
                .in_rocket_jump
        );
        assert!(
            !app.world()
                .resource::<Events<RocketJumpedEvent>>()
                .is_empty()
        );
    }

    #[test]
    fn slow_and_walk_speed_controls_apply_to_the_player() {
        let mut app = test_app();
        let entity = spawn_player(&mut app, grounded());

        app.world_mut().send_event(SetSlowedEvent {
            player_id: 1,
            slowed: true,
        });
        app.world_mut().send_event(SetWalkSpeedEvent {
            player_id: 1,
            speed: 2.5,
        });
        app.update();

        assert!(
            app.world()
                .get::<MovementState>(entity)
                .unwrap()
                .in_slow_zone
        );
        let config = app.world().get::<MovementConfig>(entity).unwrap();
        assert_eq!(config.walk_target_speed, 2.5);
        // The construction-time speed is kept for buff restoration.
        assert_eq!(
            config.original_walk_speed,
            MovementConfig::default().original_walk_speed
        );
    }

    #[test]
    fn frame_tick_latches_last_known_position() {
        let mut app = test_app();
        let entity = spawn_player(&mut app, grounded());

        {
            let world = app.world_mut();
            let mut position = world.get_mut::<Position>(entity).unwrap();
            position.x = 12.0;
            position.y = 3.0;
        }
        app.update();

        let last = app.world().resource::<LastKnownPosition>();
        assert_eq!(last.0, Vec2::new(12.0, 3.0));
    }
}
