use bevy::prelude::*;

/// Contact sensor read by the movement controller every tick.
///
/// The controller never resolves collisions itself; something else (here the
/// world-bounds sensor system, in a real game a proper collision backend)
/// writes this each fixed tick before the controller runs.
///
/// `wall_side` is the x sign of the touched wall's outward normal: +1 means
/// the wall is on the player's left (normal points right), -1 means the wall
/// is on the player's right. Pushing the stick *against* that sign is pushing
/// into the wall.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CollisionState {
    pub on_ground: bool,
    pub on_wall: bool,
    pub on_right_wall: bool,
    pub wall_side: f32,
}
