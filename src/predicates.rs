//! Exact-sign classification of vertices, edges and triangles relative to a
//! query origin `O`.
//!
//! Every predicate evaluates a fixed expression on the raw coordinates and
//! returns the sign of the result. There is no tolerance: a zero sign means the
//! configuration is exactly degenerate (a vertex equal to `O`, an edge collinear
//! with `O`, a triangle coplanar with `O`) and callers are expected to absorb it.
//!
//! The order in which the fallback terms of [`edge_sign`] are tried, and the
//! grouping of the products in [`triangle_sign`], are part of the contract:
//! axis-aligned edges and faces are only classified consistently across
//! neighbouring triangles because every triangle sees the same expressions.
//!
//! ## Vertex classification
//! A vertex `P ≠ O` is *positive* when it is lexicographically greater than `O`
//! (compare x, then y, then z) and *negative* otherwise.
//!
//! ## Edge classification
//! For an edge `PQ` not collinear with `O`, the sign is that of the first
//! non-zero term in
//! ```text
//! (Py-Oy)(Qx-Ox) - (Px-Ox)(Qy-Oy)
//! (Pz-Oz)(Qx-Ox) - (Px-Ox)(Qz-Oz)
//! (Pz-Oz)(Qy-Oy) - (Py-Oy)(Qz-Oz)
//! ```
//! i.e. on which side of `O` the edge crosses the plane `x = Ox` (or, for edges
//! inside that plane, the line through `O` parallel to the y axis).
//!
//! ## Triangle classification
//! The sign of
//! ```text
//! | Px-Ox  Qx-Ox  Rx-Ox |
//! | Py-Oy  Qy-Oy  Ry-Oy |
//! | Pz-Oz  Qz-Oz  Rz-Oz |
//! ```
//! positive when the triangle's normal points away from `O`.

use crate::float_types::Real;
use nalgebra::Point3;
use std::ops::Neg;

/// Sign of an exactly computed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// Sign of `x`. NaN has no sign and maps to [`Sign::Zero`].
    #[inline]
    pub fn of(x: Real) -> Sign {
        if x > 0.0 {
            Sign::Positive
        } else if x < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// `self` if non-zero, otherwise the lazily computed fallback.
    #[inline]
    fn or_else(self, fallback: impl FnOnce() -> Sign) -> Sign {
        if self.is_zero() { fallback() } else { self }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl From<Sign> for i64 {
    fn from(sign: Sign) -> i64 {
        sign as i64
    }
}

/// Lexicographic sign of `p` relative to `o`.
///
/// Zero only when `p == o`.
#[inline]
pub fn vertex_sign(p: &Point3<Real>, o: &Point3<Real>) -> Sign {
    Sign::of(p.x - o.x)
        .or_else(|| Sign::of(p.y - o.y))
        .or_else(|| Sign::of(p.z - o.z))
}

/// Sign of the edge `pq` relative to `o`.
///
/// Zero only when `p`, `q` and `o` are collinear.
#[inline]
pub fn edge_sign(p: &Point3<Real>, q: &Point3<Real>, o: &Point3<Real>) -> Sign {
    Sign::of((p.y - o.y) * (q.x - o.x) - (p.x - o.x) * (q.y - o.y))
        .or_else(|| Sign::of((p.z - o.z) * (q.x - o.x) - (p.x - o.x) * (q.z - o.z)))
        .or_else(|| Sign::of((p.z - o.z) * (q.y - o.y) - (p.y - o.y) * (q.z - o.z)))
}

/// Orientation of the triangle `pqr` as seen from `o`.
///
/// Zero only when the four points are coplanar.
#[inline]
pub fn triangle_sign(
    p: &Point3<Real>,
    q: &Point3<Real>,
    r: &Point3<Real>,
    o: &Point3<Real>,
) -> Sign {
    let m1_0 = p.x - o.x;
    let m1_1 = p.y - o.y;
    let m2_0 = q.x - o.x;
    let m2_1 = q.y - o.y;
    let m3_0 = r.x - o.x;
    let m3_1 = r.y - o.y;

    Sign::of(
        (m1_0 * m2_1 - m1_1 * m2_0) * (r.z - o.z)
            + (m2_0 * m3_1 - m2_1 * m3_0) * (p.z - o.z)
            + (m3_0 * m1_1 - m3_1 * m1_0) * (q.z - o.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: Real, y: Real, z: Real) -> Point3<Real> {
        Point3::new(x, y, z)
    }

    #[test]
    fn vertex_sign_is_lexicographic() {
        let o = pt(1.0, 1.0, 1.0);
        assert_eq!(vertex_sign(&pt(2.0, -9.0, -9.0), &o), Sign::Positive);
        assert_eq!(vertex_sign(&pt(0.0, 9.0, 9.0), &o), Sign::Negative);
        assert_eq!(vertex_sign(&pt(1.0, 2.0, -9.0), &o), Sign::Positive);
        assert_eq!(vertex_sign(&pt(1.0, 1.0, 0.5), &o), Sign::Negative);
        assert_eq!(vertex_sign(&o, &o), Sign::Zero);
    }

    #[test]
    fn edge_sign_falls_back_for_axis_aligned_edges() {
        let o = pt(0.0, 0.0, 0.0);
        // Crosses x = 0 above O in y.
        assert_eq!(edge_sign(&pt(-1.0, 1.0, 0.0), &pt(1.0, 1.0, 0.0), &o), Sign::Positive);
        assert_eq!(edge_sign(&pt(1.0, 1.0, 0.0), &pt(-1.0, 1.0, 0.0), &o), Sign::Negative);
        // Crosses x = 0 at y = 0: the z term decides.
        assert_eq!(edge_sign(&pt(-1.0, 0.0, 1.0), &pt(1.0, 0.0, 1.0), &o), Sign::Positive);
        assert_eq!(edge_sign(&pt(-1.0, 0.0, -1.0), &pt(1.0, 0.0, -1.0), &o), Sign::Negative);
        // Lies in x = 0: only the third term is non-zero.
        assert_eq!(edge_sign(&pt(0.0, -1.0, 1.0), &pt(0.0, 1.0, 1.0), &o), Sign::Positive);
        // Through O.
        assert_eq!(edge_sign(&pt(-1.0, -2.0, -3.0), &pt(1.0, 2.0, 3.0), &o), Sign::Zero);
    }

    #[test]
    fn triangle_sign_tracks_orientation() {
        let (a, b, c) = (pt(0.0, 0.0, 1.0), pt(1.0, 0.0, 1.0), pt(0.0, 1.0, 1.0));
        // Normal +z, triangle above the origin: facing away.
        assert_eq!(triangle_sign(&a, &b, &c, &pt(0.2, 0.2, 0.0)), Sign::Positive);
        assert_eq!(triangle_sign(&b, &a, &c, &pt(0.2, 0.2, 0.0)), Sign::Negative);
        // Seen from above it faces toward the origin.
        assert_eq!(triangle_sign(&a, &b, &c, &pt(0.2, 0.2, 2.0)), Sign::Negative);
        // Coplanar.
        assert_eq!(triangle_sign(&a, &b, &c, &pt(5.0, 5.0, 1.0)), Sign::Zero);
    }

    #[test]
    fn sign_negation() {
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(-Sign::Zero, Sign::Zero);
        assert_eq!(i64::from(Sign::Negative), -1);
        assert_eq!(Sign::of(Real::NAN), Sign::Zero);
    }
}
