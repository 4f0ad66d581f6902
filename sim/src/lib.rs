pub mod components;
pub mod resources;
pub mod scenario;
pub mod setup;
pub mod systems;
