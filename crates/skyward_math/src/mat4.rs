//! 4x4 Matrix utilities
//!
//! Matrices are column-major `[[f32; 4]; 4]` so they can be written straight
//! into WGSL `mat4x4<f32>` uniforms: `m[col][row]`.
//!
//! Projection matrices use the wgpu clip-space convention (depth in `0..1`).

use crate::{Quat, Vec3};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two matrices: `a * b` (applies `b` first)
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            result[col][row] = a[0][row] * b[col][0]
                + a[1][row] * b[col][1]
                + a[2][row] * b[col][2]
                + a[3][row] * b[col][3];
        }
    }
    result
}

/// Rotation matrix from a unit quaternion
pub fn from_quat(q: Quat) -> Mat4 {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);

    [
        [1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0],
        [2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), 0.0],
        [2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Compose translation, rotation and scale (scale applied first)
pub fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    let mut m = from_quat(rotation);
    for (col, s) in [scale.x, scale.y, scale.z].into_iter().enumerate() {
        for row in 0..3 {
            m[col][row] *= s;
        }
    }
    m[3] = [translation.x, translation.y, translation.z, 1.0];
    m
}

/// Transform a point (w = 1)
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (w = 0)
pub fn transform_vector(m: &Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
    )
}

/// Translation column of an affine matrix
#[inline]
pub fn translation(m: &Mat4) -> Vec3 {
    Vec3::new(m[3][0], m[3][1], m[3][2])
}

/// Inverse of a rotation + translation matrix (no scale)
pub fn rigid_inverse(m: &Mat4) -> Mat4 {
    let t = translation(m);
    let mut r = IDENTITY;
    for col in 0..3 {
        for row in 0..3 {
            r[col][row] = m[row][col];
        }
    }
    let inv_t = transform_vector(&r, -t);
    r[3] = [inv_t.x, inv_t.y, inv_t.z, 1.0];
    r
}

/// Inverse-transpose of the upper 3x3, embedded in a 4x4
///
/// Used to transform normals under non-uniform scale. A singular matrix
/// yields the identity.
pub fn normal_matrix(m: &Mat4) -> Mat4 {
    let a = [
        [m[0][0], m[0][1], m[0][2]],
        [m[1][0], m[1][1], m[1][2]],
        [m[2][0], m[2][1], m[2][2]],
    ];
    // Columns of the inverse-transpose are the cross products of the other two columns
    let c0 = Vec3::from_array(a[1]).cross(Vec3::from_array(a[2]));
    let c1 = Vec3::from_array(a[2]).cross(Vec3::from_array(a[0]));
    let c2 = Vec3::from_array(a[0]).cross(Vec3::from_array(a[1]));
    let det = Vec3::from_array(a[0]).dot(c0);
    if det.abs() < 1e-12 {
        return IDENTITY;
    }
    let inv_det = 1.0 / det;
    [
        [c0.x * inv_det, c0.y * inv_det, c0.z * inv_det, 0.0],
        [c1.x * inv_det, c1.y * inv_det, c1.z * inv_det, 0.0],
        [c2.x * inv_det, c2.y * inv_det, c2.z * inv_det, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Right-handed perspective projection with depth mapped to `0..1`
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range_inv = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * range_inv, -1.0],
        [0.0, 0.0, near * far * range_inv, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}
