pub mod math;
pub mod geometry;
pub mod shapes;
pub mod collision;
pub mod broad_phase;
pub mod world;
pub mod config;
pub mod error;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use geometry::Rect;
pub use shapes::{Circle, GeometryError, Polygon, Shape, ShapeId};
pub use collision::{CollisionResult, Sat};
pub use broad_phase::{BroadPhase, Quadtree, SpatialGrid};
pub use world::CollisionWorld;
pub use config::{CollisionConfig, GridConfig, QuadtreeConfig, SatConfig};
pub use error::{CollisionError, ConfigError};
