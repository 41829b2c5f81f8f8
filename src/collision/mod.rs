pub mod result;
pub mod sat;

// Re-export key types
pub use result::CollisionResult;
pub use sat::Sat;
