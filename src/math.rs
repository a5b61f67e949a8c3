/// A 3-component vector
pub type Vector3 = [f64; 3];

/// A row-major 3x3 matrix
pub type Matrix3 = [[f64; 3]; 3];

/// Identity rotation
pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Below this length a vector is treated as zero. Meant for products of
/// unit vectors, not raw surface coordinates.
pub const EPSILON: f64 = 1e-12;

/// Dot product of two vectors
pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Cross product `a × b`
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Euclidean length of a vector
pub fn length(v: &Vector3) -> f64 {
    dot(v, v).sqrt()
}

/// Scales a vector to unit length, or returns `None` for a (near) zero vector
pub fn normalize(v: &Vector3) -> Option<Vector3> {
    let length = length(v);
    if length < EPSILON {
        return None;
    }
    Some([v[0] / length, v[1] / length, v[2] / length])
}

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &Matrix3, vector: &Vector3) -> Vector3 {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Right-handed rotation of `angle` radians about the unit vector `axis`
/// (Rodrigues' formula)
pub fn axis_angle_matrix(axis: &Vector3, angle: f64) -> Matrix3 {
    let (sin_a, cos_a) = angle.sin_cos();
    let t = 1.0 - cos_a;
    let [x, y, z] = *axis;
    [
        [t * x * x + cos_a, t * x * y - sin_a * z, t * x * z + sin_a * y],
        [t * x * y + sin_a * z, t * y * y + cos_a, t * y * z - sin_a * x],
        [t * x * z - sin_a * y, t * y * z + sin_a * x, t * z * z + cos_a],
    ]
}

/// Re-orthonormalizes the rows of a rotation matrix that has picked up
/// rounding error, keeping the first row's direction and right-handedness
pub fn orthonormalize(m: &Matrix3) -> Option<Matrix3> {
    let x = normalize(&m[0])?;
    let d = dot(&m[1], &x);
    let y = normalize(&[m[1][0] - d * x[0], m[1][1] - d * x[1], m[1][2] - d * x[2]])?;
    Some([x, y, cross(&x, &y)])
}

/// Unit vector perpendicular to `v`, built from whichever basis axis is
/// least aligned with it
pub fn any_perpendicular(v: &Vector3) -> Option<Vector3> {
    let basis = if v[0].abs() < 0.9 {
        [1.0, 0.0, 0.0]
    } else {
        [0.0, 1.0, 0.0]
    };
    normalize(&cross(v, &basis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross(&[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert_eq!(normalize(&[0.0, 0.0, 0.0]), None);
        let n = normalize(&[3.0, 0.0, 4.0]).unwrap();
        assert_abs_diff_eq!(n[0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(n[2], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_about_y_maps_z_to_x() {
        let m = axis_angle_matrix(&[0.0, 1.0, 0.0], FRAC_PI_2);
        let v = multiply_matrix_vector(&m, &[0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(v[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn identity_is_neutral() {
        let m = axis_angle_matrix(&[0.0, 0.0, 1.0], 0.3);
        assert_eq!(multiply_matrices(&IDENTITY, &m), m);
        assert_eq!(multiply_matrices(&m, &IDENTITY), m);
    }

    #[test]
    fn orthonormalize_repairs_skewed_rotation() {
        let mut m = axis_angle_matrix(&[0.0, 0.6, 0.8], 1.1);
        m[0][1] += 1e-3;
        m[1][2] -= 2e-3;
        let o = orthonormalize(&m).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(dot(&o[i], &o[j]), expected, epsilon = 1e-12);
            }
        }
        // Still close to the original rotation, not a reflection
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(o[i][j], m[i][j], epsilon = 1e-2);
            }
        }
        assert_eq!(orthonormalize(&IDENTITY), Some(IDENTITY));
    }

    #[test]
    fn perpendicular_is_orthogonal_unit() {
        for v in [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [-0.6, 0.8, 0.0]] {
            let p = any_perpendicular(&v).unwrap();
            assert_abs_diff_eq!(dot(&p, &v), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(length(&p), 1.0, epsilon = 1e-12);
        }
    }
}
