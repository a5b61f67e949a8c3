use crate::error::{TrackballError, TrackballResult};
use crate::math::{Matrix3, Vector3, IDENTITY};

/// The tracked 2D region, in the same units as pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    width: f64,
    height: f64,
}

impl Surface {
    /// Creates a surface, rejecting non-positive or non-finite dimensions
    pub fn new(width: f64, height: f64) -> TrackballResult<Self> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !valid(width) || !valid(height) {
            return Err(TrackballError::InvalidSurface { width, height });
        }
        Ok(Surface { width, height })
    }

    /// Width of the surface
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the surface
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Radius of the largest circle centered on the surface
    pub fn inscribed_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

/// Per-session trackball state
#[derive(Debug, Clone, PartialEq)]
pub struct TrackballState {
    /// Tracked region
    pub(crate) surface: Surface,
    /// Sphere radius in surface units
    pub(crate) radius: f64,
    /// Last normalized mapped point
    pub(crate) previous_point: Vector3,
    /// Latest normalized mapped point
    pub(crate) current_point: Vector3,
    /// Unit axis of the last drag step
    pub(crate) rotation_axis: Vector3,
    /// Angle of the last drag step, in radians
    pub(crate) rotation_angle: f64,
    /// Product of every drag rotation so far
    pub(crate) orientation: Matrix3,
}

impl TrackballState {
    /// Creates a session over `surface` with a sphere of `radius` surface units.
    ///
    /// The radius is validated here so that projection never has to divide
    /// by a zero norm.
    pub fn new(surface: Surface, radius: f64) -> TrackballResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TrackballError::DegenerateProjection { radius });
        }
        Ok(Self::initial(surface, radius))
    }

    fn initial(surface: Surface, radius: f64) -> Self {
        TrackballState {
            surface,
            radius,
            previous_point: [0.0, 0.0, 1.0],
            current_point: [0.0, 0.0, 1.0],
            rotation_axis: [0.0, 0.0, 1.0],
            rotation_angle: 0.0,
            orientation: IDENTITY,
        }
    }

    /// Creates a session whose sphere fills the largest inscribed circle
    pub fn inscribed(surface: Surface) -> TrackballResult<Self> {
        Self::new(surface, surface.inscribed_radius())
    }

    /// Forgets all pointer history and accumulated rotation
    pub fn reset(&mut self) {
        *self = Self::initial(self.surface, self.radius);
    }

    /// Tracked surface
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Sphere radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit point before the last drag step
    pub fn previous_point(&self) -> Vector3 {
        self.previous_point
    }

    /// Latest projected unit point
    pub fn current_point(&self) -> Vector3 {
        self.current_point
    }

    /// Unit axis of the last drag step
    pub fn rotation_axis(&self) -> Vector3 {
        self.rotation_axis
    }

    /// Angle of the last drag step, in radians
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// Accumulated rotation of every drag so far, re-orthonormalized after
    /// each step
    pub fn orientation(&self) -> &Matrix3 {
        &self.orientation
    }
}
