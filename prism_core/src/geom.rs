// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry over colors-as-vectors.
//!
//! This module covers the small subset of vector algebra the engine needs
//! (interpolation, cross/dot products, signed tetrahedron volume, edge
//! lengths) without pulling in a full linear-algebra crate. Two forms of the
//! volume computation exist: [`signed_volume`] (scalar triple product, the
//! form the selection scan uses) and [`det_volume`] (explicit 3×3
//! determinant expansion, mathematically identical, kept as a cross-check).

use crate::color::Color;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Linear interpolation at factor `t` *toward `a`*: `t*a + (1-t)*b`.
///
/// `t = 1.0` yields `a`, `t = 0.0` yields `b`.
#[inline]
#[must_use]
pub fn lerp(a: Color, b: Color, t: f64) -> Color {
    Color {
        r: t * a.r + (1.0 - t) * b.r,
        g: t * a.g + (1.0 - t) * b.g,
        b: t * a.b + (1.0 - t) * b.b,
    }
}

/// Component-wise difference `a - b` as a 3-vector.
#[inline]
#[must_use]
pub fn sub(a: Color, b: Color) -> [f64; 3] {
    [a.r - b.r, a.g - b.g, a.b - b.b]
}

/// Dot product of two 3-vectors.
#[inline]
#[must_use]
pub fn dot(u: [f64; 3], v: [f64; 3]) -> f64 {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2]
}

/// Cross product of two 3-vectors.
#[inline]
#[must_use]
pub fn cross(u: [f64; 3], v: [f64; 3]) -> [f64; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Signed volume of the tetrahedron `(a, b, c, d)`.
///
/// Scalar triple product of the three edge vectors from `a`, divided by 6.
/// The sign encodes orientation; selection compares `abs` of this value. A
/// degenerate (flat) tetrahedron yields exactly `0.0`.
#[inline]
#[must_use]
pub fn signed_volume(a: Color, b: Color, c: Color, d: Color) -> f64 {
    let u = sub(b, a);
    let v = sub(c, a);
    let w = sub(d, a);
    dot(cross(u, v), w) / 6.0
}

/// Signed volume of `(a, b, c, d)` via explicit 3×3 determinant expansion.
///
/// Mathematically identical to [`signed_volume`]; kept as the cross-check
/// form.
#[must_use]
pub fn det_volume(a: Color, b: Color, c: Color, d: Color) -> f64 {
    let u = sub(b, a);
    let v = sub(c, a);
    let w = sub(d, a);
    let det = u[0] * (v[1] * w[2] - v[2] * w[1]) - u[1] * (v[0] * w[2] - v[2] * w[0])
        + u[2] * (v[0] * w[1] - v[1] * w[0]);
    det / 6.0
}

/// Squared Euclidean distance between two colors.
///
/// Monotonic with [`length`]; preferred wherever only comparison matters.
#[inline]
#[must_use]
pub fn length_sq(a: Color, b: Color) -> f64 {
    let d = sub(a, b);
    dot(d, d)
}

/// Euclidean distance between two colors.
#[inline]
#[must_use]
pub fn length(a: Color, b: Color) -> f64 {
    length_sq(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Color = Color::new(0.0, 0.0, 0.0);
    const EX: Color = Color::new(1.0, 0.0, 0.0);
    const EY: Color = Color::new(0.0, 1.0, 0.0);
    const EZ: Color = Color::new(0.0, 0.0, 1.0);

    #[test]
    fn lerp_pulls_toward_first_argument() {
        let m = lerp(EX, ORIGIN, 0.55);
        assert_eq!(m.r, 0.55);
        assert_eq!(m.g, 0.0);
        assert_eq!(lerp(EX, ORIGIN, 1.0), EX);
        assert_eq!(lerp(EX, ORIGIN, 0.0), ORIGIN);
    }

    #[test]
    fn unit_corner_tetrahedron_volume() {
        // The corner tetrahedron of the unit cube has volume 1/6.
        let v = signed_volume(ORIGIN, EX, EY, EZ);
        assert!((v - 1.0 / 6.0).abs() < 1e-15, "got {v}");
    }

    #[test]
    fn volume_sign_flips_with_orientation() {
        let v = signed_volume(ORIGIN, EX, EY, EZ);
        let w = signed_volume(ORIGIN, EY, EX, EZ);
        assert_eq!(v, -w);
    }

    #[test]
    fn degenerate_tetrahedron_has_exactly_zero_volume() {
        // All four corners coplanar (three of them collinear, even).
        let p = Color::new(0.25, 0.0, 0.0);
        let q = Color::new(0.5, 0.0, 0.0);
        let v = signed_volume(ORIGIN, p, q, EX);
        assert_eq!(v, 0.0);
        assert_eq!(det_volume(ORIGIN, p, q, EX), 0.0);
    }

    #[test]
    fn triple_product_and_determinant_forms_agree() {
        let a = Color::new(0.994, 0.009, 0.003);
        let b = Color::new(0.991, 0.996, 0.007);
        let c = Color::new(0.76, 0.741, 0.753);
        let d = Color::new(1.0, 1.0, 1.0);
        let v = signed_volume(a, b, c, d);
        let w = det_volume(a, b, c, d);
        assert!((v - w).abs() < 1e-15, "{v} vs {w}");
    }

    #[test]
    fn lengths_are_consistent() {
        let d = length_sq(EX, EY);
        assert_eq!(d, 2.0);
        assert!((length(EX, EY) - d.sqrt()).abs() < 1e-15);
    }
}
