use std::f64::consts::PI;

use log::{debug, trace};

use crate::error::{TrackballError, TrackballResult};
use crate::math::{
    any_perpendicular, axis_angle_matrix, cross, dot, length, multiply_matrices,
    multiply_matrix_vector, normalize, orthonormalize, Matrix3, Vector3,
};
use crate::state::TrackballState;

/// Incremental rotation produced by one drag step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Unit rotation axis
    pub axis: Vector3,
    /// Rotation angle in radians, within `[0, π]`
    pub angle: f64,
}

impl Rotation {
    /// Right-handed rotation matrix for this axis and angle
    pub fn matrix(&self) -> Matrix3 {
        axis_angle_matrix(&self.axis, self.angle)
    }

    /// Rotates `v` about the axis by the angle
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        multiply_matrix_vector(&self.matrix(), v)
    }
}

impl TrackballState {
    /// Maps the pointer position `(x, y)` onto the virtual sphere and stores
    /// the unit result as the current point.
    ///
    /// Positions outside the sphere's silhouette land on its equator
    /// (`z == 0`). Coordinates outside the surface are allowed.
    pub fn project(&mut self, x: f64, y: f64) -> TrackballResult<Vector3> {
        if !x.is_finite() || !y.is_finite() {
            return Err(TrackballError::NonFiniteCoordinate { x, y });
        }

        // Work in units of the largest magnitude involved so nothing below
        // can overflow or underflow to zero
        let scale = x
            .abs()
            .max(y.abs())
            .max(self.surface.width())
            .max(self.surface.height())
            .max(self.radius);
        let radius = self.radius / scale;

        // Surface-centered, y up
        let px = x / scale - self.surface.width() / scale / 2.0;
        let py = self.surface.height() / scale / 2.0 - y / scale;
        let planar = px.hypot(py);

        let point = if planar == 0.0 {
            [0.0, 0.0, 1.0]
        } else if planar >= radius {
            [px / planar, py / planar, 0.0]
        } else {
            let (ux, uy) = (px / radius, py / radius);
            let uz = (1.0 - ux * ux - uy * uy).max(0.0).sqrt();
            let n = (ux * ux + uy * uy + uz * uz).sqrt();
            [ux / n, uy / n, uz / n]
        };
        trace!("projected ({x}, {y}) to {point:?}");

        self.current_point = point;
        Ok(point)
    }

    /// Moves the pointer to `(nx, ny)` and computes the rotation that takes
    /// the previous point to the new one.
    ///
    /// The axis is `previous × current`. When the points coincide the angle
    /// is zero and the axis keeps its last value; when they are opposite the
    /// angle is π about an axis perpendicular to both. On error the state is
    /// left untouched.
    pub fn drag(&mut self, nx: f64, ny: f64) -> TrackballResult<Rotation> {
        let previous = self.current_point;
        self.project(nx, ny)?;
        self.previous_point = previous;
        let current = self.current_point;

        let cosine = dot(&previous, &current).clamp(-1.0, 1.0);
        let normal = cross(&previous, &current);
        let (axis, angle) = match normalize(&normal) {
            // Same as acos(cosine), without losing precision near 0 and π
            Some(axis) => (axis, length(&normal).atan2(cosine)),
            None if cosine < 0.0 => {
                debug!("antiparallel drag, picking a perpendicular axis");
                let axis = any_perpendicular(&previous).unwrap_or(self.rotation_axis);
                (axis, PI)
            }
            None => {
                debug!("drag without movement, keeping axis {:?}", self.rotation_axis);
                (self.rotation_axis, 0.0)
            }
        };

        let rotation = Rotation { axis, angle };
        self.rotation_axis = axis;
        self.rotation_angle = angle;
        let orientation = multiply_matrices(&rotation.matrix(), &self.orientation);
        self.orientation = orthonormalize(&orientation).unwrap_or(orientation);
        debug!("drag to ({nx}, {ny}): axis {axis:?}, angle {angle:.6} rad");
        Ok(rotation)
    }

    /// Rotation of the last drag step
    pub fn rotation(&self) -> Rotation {
        Rotation {
            axis: self.rotation_axis,
            angle: self.rotation_angle,
        }
    }
}
