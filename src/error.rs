// Error types for registration, lookup and configuration

use thiserror::Error;

use crate::shapes::{GeometryError, ShapeId};

/// Errors raised by the collision core for caller contract violations.
///
/// Geometric degeneracy (collinear vertices, zero-length edges, zero-area
/// shapes) is never an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A query or resolve referenced an id that was never registered.
    #[error("shape {0} is not registered")]
    ShapeNotFound(ShapeId),

    /// Registration input could not describe a valid shape.
    #[error("invalid geometry for shape {id}: {source}")]
    InvalidGeometry {
        id: ShapeId,
        #[source]
        source: GeometryError,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A parsed value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, CollisionError>;
