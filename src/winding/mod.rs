//! Winding number of a closed oriented triangle surface around a point.
//!
//! The number is computed by ray casting along a fixed direction, where every
//! vertex, edge and triangle is classified with the exact-sign predicates of
//! [`crate::predicates`]. Each triangle contributes `-1`, `0` or `+1` to
//! *twice* the winding number, so the per-triangle results form an exact
//! integer reduction that can be evaluated in any order.
//!
//! The result is well defined whenever the query point does not lie on the
//! surface, whatever the surface looks like: disconnected, self-intersecting,
//! non-manifold, containing degenerate triangles. Do not query points known to
//! lie exactly on the surface; [`Mesh::winding_number`] does not detect that
//! case and its answer is then meaningless. [`Mesh::locate`] is the opt-in
//! variant that reports it.
//!
//! This module provides winding operations with dependency inversion, allowing
//! for different reduction strategies (serial/parallel).

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use serial::SerialWindingOps;
pub use traits::WindingOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelWindingOps;

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::predicates::{Sign, edge_sign, triangle_sign, vertex_sign};
use crate::triangle::Triangle;
use nalgebra::Point3;

/// Where a point sits relative to a surface, as reported by [`Mesh::locate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    /// Not enclosed: the doubled winding sum is zero.
    Outside,
    /// Enclosed; `winding` is the winding number (negative for inward-facing surfaces).
    Inside { winding: i64 },
    /// Exactly on a vertex, an edge or the interior of some triangle.
    OnSurface,
}

/// Contribution of the triangle `v1 v2 v3` to twice the winding number around `origin`.
///
/// Only edges joining differently-signed vertices can cross the ray through
/// `origin`, so only those are classified. If the vertices all share a sign,
/// or the two classified edges cancel, the triangle cannot be pierced and
/// contributes nothing. Otherwise its orientation as seen from `origin` is the
/// contribution.
///
/// Degenerate configurations are absorbed: a vertex equal to `origin`, an
/// edge through it or a triangle coplanar with it produce a zero sign along
/// the way and never an error.
#[inline]
pub fn triangle_chain(
    v1: &Point3<Real>,
    v2: &Point3<Real>,
    v3: &Point3<Real>,
    origin: &Point3<Real>,
) -> Sign {
    let v1sign = vertex_sign(v1, origin);
    let v2sign = vertex_sign(v2, origin);
    let v3sign = vertex_sign(v3, origin);

    let mut face_boundary = 0;
    if v1sign != v2sign {
        face_boundary += edge_sign(v1, v2, origin).as_i32();
    }
    if v2sign != v3sign {
        face_boundary += edge_sign(v2, v3, origin).as_i32();
    }
    if v3sign != v1sign {
        face_boundary += edge_sign(v3, v1, origin).as_i32();
    }
    if face_boundary == 0 {
        return Sign::Zero;
    }

    triangle_sign(v1, v2, v3, origin)
}

/// [`triangle_chain`] that returns `None` when `origin` lies on the triangle.
///
/// Each zero sign the unchecked chain would silently absorb is here exactly
/// the witness of `origin` being on the closed triangle: a vertex equal to
/// it, a sign-changing edge passing through it, or a pierced triangle
/// coplanar with it.
pub fn triangle_chain_checked(
    v1: &Point3<Real>,
    v2: &Point3<Real>,
    v3: &Point3<Real>,
    origin: &Point3<Real>,
) -> Option<Sign> {
    let nonzero = |s: Sign| (!s.is_zero()).then_some(s);

    let v1sign = nonzero(vertex_sign(v1, origin))?;
    let v2sign = nonzero(vertex_sign(v2, origin))?;
    let v3sign = nonzero(vertex_sign(v3, origin))?;

    let mut face_boundary = 0;
    if v1sign != v2sign {
        face_boundary += nonzero(edge_sign(v1, v2, origin))?.as_i32();
    }
    if v2sign != v3sign {
        face_boundary += nonzero(edge_sign(v2, v3, origin))?.as_i32();
    }
    if v3sign != v1sign {
        face_boundary += nonzero(edge_sign(v3, v1, origin))?.as_i32();
    }
    if face_boundary == 0 {
        return Some(Sign::Zero);
    }

    nonzero(triangle_sign(v1, v2, v3, origin))
}

impl Triangle {
    /// See [`triangle_chain`].
    #[inline]
    pub fn chain(&self, origin: &Point3<Real>) -> Sign {
        let [v1, v2, v3] = &self.vertices;
        triangle_chain(v1, v2, v3, origin)
    }

    /// See [`triangle_chain_checked`].
    #[inline]
    pub fn chain_checked(&self, origin: &Point3<Real>) -> Option<Sign> {
        let [v1, v2, v3] = &self.vertices;
        triangle_chain_checked(v1, v2, v3, origin)
    }
}

/// Halve a doubled winding sum, rounding half away from zero.
///
/// Closed surfaces always give an even sum; an odd sum only comes from open
/// surfaces, where the half-integer is rounded outward.
#[inline]
pub const fn halve(winding_sum: i64) -> i64 {
    (winding_sum + winding_sum.signum()) / 2
}

impl Mesh {
    /// Twice the winding number of the surface around `point`.
    pub fn winding_sum(&self, point: &Point3<Real>) -> i64 {
        #[cfg(not(feature = "parallel"))]
        let ops = SerialWindingOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelWindingOps::new();

        ops.winding_sum(&self.triangles, point)
    }

    /// Winding number of the surface around `point`.
    ///
    /// ```
    /// # use polywind::mesh::Mesh;
    /// # use nalgebra::Point3;
    /// let cube = Mesh::cube(1.0);
    /// assert_eq!(cube.winding_number(&Point3::new(0.5, 0.5, 0.5)), 1);
    /// assert_eq!(cube.flipped().winding_number(&Point3::new(0.5, 0.5, 0.5)), -1);
    /// assert_eq!(cube.winding_number(&Point3::new(2.0, 2.0, 2.0)), 0);
    /// ```
    pub fn winding_number(&self, point: &Point3<Real>) -> i64 {
        halve(self.winding_sum(point))
    }

    /// Membership test used by classification and sampling: any non-zero
    /// winding counts as inside, whatever the surface orientation.
    #[inline]
    pub fn contains(&self, point: &Point3<Real>) -> bool {
        self.winding_sum(point) != 0
    }

    /// Like [`Mesh::winding_number`], but detects a point lying exactly on the surface.
    ///
    /// This costs the same single pass over the triangles, and stops at the
    /// first triangle found to touch `point`.
    pub fn locate(&self, point: &Point3<Real>) -> PointLocation {
        #[cfg(not(feature = "parallel"))]
        let ops = SerialWindingOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelWindingOps::new();

        match ops.checked_winding_sum(&self.triangles, point) {
            None => PointLocation::OnSurface,
            Some(0) => PointLocation::Outside,
            Some(sum) => PointLocation::Inside { winding: halve(sum) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: Real, y: Real, z: Real) -> Point3<Real> {
        Point3::new(x, y, z)
    }

    #[test]
    fn chain_counts_a_pierced_triangle() {
        // Big triangle in z = 1 facing +z, origin below its interior.
        let (a, b, c) = (pt(-1.0, -1.0, 1.0), pt(3.0, -1.0, 1.0), pt(-1.0, 3.0, 1.0));
        let o = pt(0.0, 0.0, 0.0);
        assert_eq!(triangle_chain(&a, &b, &c, &o), Sign::Positive);
        assert_eq!(triangle_chain(&b, &a, &c, &o), Sign::Negative);
        // Origin beside the triangle: the edge cycle is trivial.
        assert_eq!(triangle_chain(&a, &b, &c, &pt(5.0, 5.0, 0.0)), Sign::Zero);
    }

    #[test]
    fn chain_absorbs_degeneracies() {
        let o = pt(0.0, 0.0, 0.0);
        // A vertex on the origin.
        let _ = triangle_chain(&o, &pt(1.0, 0.0, 0.0), &pt(0.0, 1.0, 0.0), &o);
        // A zero-area triangle.
        let p = pt(1.0, 1.0, 1.0);
        assert_eq!(triangle_chain(&p, &p, &p, &o), Sign::Zero);
        let q = pt(-1.0, -1.0, 2.0);
        assert_eq!(triangle_chain(&p, &q, &p, &o), Sign::Zero);
    }

    #[test]
    fn checked_chain_flags_touching_triangles() {
        let (a, b, c) = (pt(0.0, 0.0, 0.0), pt(2.0, 0.0, 0.0), pt(0.0, 2.0, 0.0));
        // On a vertex, on an edge, inside the face.
        assert_eq!(triangle_chain_checked(&a, &b, &c, &a), None);
        assert_eq!(triangle_chain_checked(&a, &b, &c, &pt(1.0, 0.0, 0.0)), None);
        assert_eq!(triangle_chain_checked(&a, &b, &c, &pt(0.5, 0.5, 0.0)), None);
        // Off the triangle, both above it and in its plane.
        assert_eq!(triangle_chain_checked(&a, &b, &c, &pt(0.5, 0.5, -1.0)), Some(Sign::Positive));
        assert_eq!(triangle_chain_checked(&a, &b, &c, &pt(3.0, 3.0, 0.0)), Some(Sign::Zero));
    }

    #[test]
    fn halve_rounds_away_from_zero() {
        assert_eq!(halve(0), 0);
        assert_eq!(halve(2), 1);
        assert_eq!(halve(-4), -2);
        assert_eq!(halve(1), 1);
        assert_eq!(halve(-3), -2);
    }

    #[test]
    fn locate_reports_surface_points() {
        let cube = Mesh::cube(1.0);
        assert_eq!(cube.locate(&pt(0.5, 0.5, 0.5)), PointLocation::Inside { winding: 1 });
        assert_eq!(cube.locate(&pt(1.5, 0.5, 0.5)), PointLocation::Outside);
        assert_eq!(cube.locate(&pt(1.0, 0.5, 0.5)), PointLocation::OnSurface);
        assert_eq!(cube.locate(&pt(1.0, 1.0, 1.0)), PointLocation::OnSurface);
        assert_eq!(cube.locate(&pt(0.5, 0.0, 0.0)), PointLocation::OnSurface);
    }
}
