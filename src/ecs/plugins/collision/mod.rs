pub mod components;
pub mod plugin;
pub mod systems;

pub use components::CollisionState;
pub use plugin::CollisionPlugin;
