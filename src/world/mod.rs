pub mod collision_world;

pub use collision_world::{CollisionWorld, ShapeEntry};
