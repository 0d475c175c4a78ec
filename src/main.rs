/*!
# Platformer Movement Controller

A headless 2D platformer player movement simulation built with Bevy ECS.

## Architecture Overview

Each major concern is implemented as a plugin:

- **CorePlugin**: Basic game resources (world bounds, gravity, position snapshot)
- **InputPlugin**: Input command processing and validation
- **CollisionPlugin**: Contact sensing and physics-body integration
- **MovementPlugin**: The velocity-integration state machine (walk, jump,
  wall jump, wall slide, rocket jump, slow zones)
- **PlayerPlugin**: Player lifecycle management (spawn/despawn)
- **DebugPlugin**: Development logging

## How It Works

1. Input commands arrive as `InputCommandEvent`s and are folded into each
   player's `MoveInput` sensor once per frame
2. The fixed tick senses contacts, runs the movement rules in a fixed order,
   and integrates the body
3. The frame tick consumes the one-shot jump flag, manages transient movement
   flags, and publishes the player position snapshot
4. Jump/wall-jump/rocket-jump notifications fire for animation/audio listeners

The demo below walks a scripted player into the right wall and wall-jumps
back out, printing the controller state once per second.
*/

use bevy::prelude::*;

mod ecs;

use ecs::plugins::collision::CollisionState;
use ecs::plugins::input::{InputCommand, InputCommandEvent};
use ecs::plugins::movement::MovementConfig;
use ecs::plugins::player::{Player, PlayerSpawnEvent};
use ecs::{CollisionPlugin, CorePlugin, DebugPlugin, InputPlugin, MovementPlugin, PlayerPlugin};

fn main() {
    println!("Starting platformer movement sim...");

    App::new()
        // Bevy's minimal plugins (no graphics/audio needed for a headless sim)
        .add_plugins(MinimalPlugins)
        // Add plugins
        .add_plugins(CorePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(CollisionPlugin)
        .add_plugins(MovementPlugin)
        .add_plugins(PlayerPlugin)
        .add_plugins(DebugPlugin)
        // Physics rate
        .insert_resource(Time::<Fixed>::from_hz(50.0))
        // Spawn the demo player, then drive it with scripted input
        .add_systems(Startup, setup_game_world)
        .add_systems(Update, demo_input_system)
        // Start the game loop
        .run();
}

/// Spawn the demo player, loading `movement.json` tuning when present.
fn setup_game_world(mut spawn_events: EventWriter<PlayerSpawnEvent>) {
    let config = load_movement_config("movement.json");
    spawn_events.send(PlayerSpawnEvent {
        player_id: 1,
        config,
    });
    println!("Game world initialized");
}

fn load_movement_config(path: &str) -> MovementConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match MovementConfig::from_json(&contents) {
            Ok(config) => {
                println!("Loaded movement tuning from {path}");
                config
            }
            Err(err) => {
                println!("Warning: failed to parse {path} ({err}), using defaults");
                MovementConfig::default()
            }
        },
        Err(_) => MovementConfig::default(),
    }
}

/// Scripted input: hold right, and jump whenever touching a wall (at the
/// floor corner this is a ground jump, against the wall face a wall jump).
fn demo_input_system(
    time: Res<Time>,
    mut jump_cooldown: Local<f32>,
    mut input_events: EventWriter<InputCommandEvent>,
    query: Query<(&Player, &CollisionState)>,
) {
    *jump_cooldown -= time.delta_secs();

    for (player, collision) in query.iter() {
        input_events.send(InputCommandEvent {
            player_id: player.id,
            command: InputCommand::Move { direction: Vec2::X },
        });

        if collision.on_wall && *jump_cooldown <= 0.0 {
            input_events.send(InputCommandEvent {
                player_id: player.id,
                command: InputCommand::Jump,
            });
            *jump_cooldown = 0.75;
        }
    }
}
