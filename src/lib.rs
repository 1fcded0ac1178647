pub mod types;
pub mod record;
pub mod store;
pub mod heuristic;
pub mod profile;
pub mod render;
pub mod resolver;
pub mod verify;
