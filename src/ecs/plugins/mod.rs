pub mod collision;
pub mod debug;
pub mod input;
pub mod movement;
pub mod player;

pub use collision::CollisionPlugin;
pub use debug::DebugPlugin;
pub use input::InputPlugin;
pub use movement::MovementPlugin;
pub use player::PlayerPlugin;
