use bevy::prelude::*;
use rand::Rng;

use crate::ecs::core::GameConfig;
use crate::ecs::plugins::player::components::*;

/// Spawn requested players at a random x on the floor.
pub fn player_spawn_system(
    mut commands: Commands,
    mut spawn_events: EventReader<PlayerSpawnEvent>,
    mut registry: ResMut<PlayerRegistry>,
    config: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    for event in spawn_events.read() {
        let x = rng.gen_range(0.0..config.world_bounds.x);
        let entity = commands
            .spawn(PlayerBundle::with_config(
                event.player_id,
                Vec2::new(x, 0.0),
                event.config,
            ))
            .id();
        registry.register_player(event.player_id, entity);
        println!("Player {} spawned at x = {:.1}", event.player_id, x);
    }
}

pub fn player_despawn_system(
    mut commands: Commands,
    mut despawn_events: EventReader<PlayerDespawnEvent>,
    mut registry: ResMut<PlayerRegistry>,
) {
    for event in despawn_events.read() {
        if let Some(entity) = registry.unregister_player(event.player_id) {
            commands.entity(entity).despawn();
            println!("Player {} despawned", event.player_id);
        }
    }
}
