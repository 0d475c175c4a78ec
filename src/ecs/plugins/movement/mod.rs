pub mod components;
pub mod plugin;
pub mod step;
pub mod systems;

pub use components::*;
pub use plugin::{ControllerSystems, MovementPlugin};
