use thiserror::Error;

/// Errors raised while configuring or driving a trackball
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackballError {
    /// Surface width or height is not a positive finite number
    #[error("Invalid surface: width {width} and height {height} must be positive and finite")]
    InvalidSurface { width: f64, height: f64 },

    /// Sphere radius is not a positive finite number
    #[error("Degenerate projection: sphere radius {radius} must be positive and finite")]
    DegenerateProjection { radius: f64 },

    /// Pointer coordinate is NaN or infinite
    #[error("Pointer coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Result type used throughout the trackball
pub type TrackballResult<T> = Result<T, TrackballError>;
