use bevy::prelude::*;
use crate::ecs::plugins::input::components::*;
use crate::ecs::plugins::player::components::Player;

pub fn input_validation_system(mut input_events: EventReader<InputCommandEvent>) {
    for event in input_events.read() {
        match &event.command {
            InputCommand::Move { direction } => {
                if direction.length() > 1.1 {
                    println!(
                        "Warning: Invalid move direction magnitude for player {}: {}",
                        event.player_id,
                        direction.length()
                    );
                }
            }
            InputCommand::Jump | InputCommand::Stop => {
                // Always valid
            }
        }
    }
}

pub fn input_event_system(
    mut input_events: EventReader<InputCommandEvent>,
    mut input_buffer: ResMut<InputBuffer>,
) {
    for event in input_events.read() {
        input_buffer
            .commands
            .entry(event.player_id)
            .or_default()
            .push(event.command.clone());
    }
}

/// Fold this frame's queued commands into each player's input sensor.
///
/// `Move` overwrites the axis (clamped to [-1, 1] per axis), `Stop` zeroes
/// it, and `Jump` latches the one-shot flag; the flag is only ever cleared by
/// the controller's frame tick, so a jump pressed between ticks is not lost.
pub fn input_processing_system(
    mut input_buffer: ResMut<InputBuffer>,
    mut query: Query<(&Player, &mut MoveInput)>,
) {
    for (player, mut input) in query.iter_mut() {
        let Some(commands) = input_buffer.commands.remove(&player.id) else {
            continue;
        };
        for command in commands {
            match command {
                InputCommand::Move { direction } => {
                    input.move_axis = direction.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
                }
                InputCommand::Jump => {
                    input.jump_pressed = true;
                }
                InputCommand::Stop => {
                    input.move_axis = Vec2::ZERO;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(InputBuffer::default());
        app.add_systems(Update, input_processing_system);
        app
    }

    fn queue(app: &mut App, player_id: u32, command: InputCommand) {
        app.world_mut()
            .resource_mut::<InputBuffer>()
            .commands
            .entry(player_id)
            .or_default()
            .push(command);
    }

    #[test]
    fn move_commands_are_clamped_per_axis() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn((Player { id: 1 }, MoveInput::default()))
            .id();

        queue(&mut app, 1, InputCommand::Move { direction: Vec2::new(3.0, -2.0) });
        app.update();

        let input = app.world().get::<MoveInput>(entity).unwrap();
        assert_eq!(input.move_axis, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn jump_stays_latched_until_consumed() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn((Player { id: 1 }, MoveInput::default()))
            .id();

        queue(&mut app, 1, InputCommand::Jump);
        app.update();
        assert!(app.world().get::<MoveInput>(entity).unwrap().jump_pressed);

        // A later Move command does not clear the latch.
        queue(&mut app, 1, InputCommand::Move { direction: Vec2::X });
        app.update();
        assert!(app.world().get::<MoveInput>(entity).unwrap().jump_pressed);
    }

    #[test]
    fn stop_zeroes_the_axis() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn((Player { id: 1 }, MoveInput::default()))
            .id();

        queue(&mut app, 1, InputCommand::Move { direction: Vec2::X });
        queue(&mut app, 1, InputCommand::Stop);
        app.update();
        assert_eq!(app.world().get::<MoveInput>(entity).unwrap().move_axis, Vec2::ZERO);
    }

    #[test]
    fn commands_round_trip_through_json() {
        let command = InputCommand::Move {
            direction: Vec2::new(1.0, 0.0),
        };
        let json = serde_json::to_string(&command).unwrap();
        let back: InputCommand = serde_json::from_str(&json).unwrap();
        match back {
            InputCommand::Move { direction } => assert_eq!(direction, Vec2::new(1.0, 0.0)),
            _ => panic!("wrong variant"),
        }
    }
}
