pub mod core;
pub mod plugins;

pub use self::core::CorePlugin;
pub use plugins::{CollisionPlugin, DebugPlugin, InputPlugin, MovementPlugin, PlayerPlugin};
