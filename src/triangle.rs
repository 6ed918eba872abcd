//! The `Triangle` value type a [`Mesh`](crate::mesh::Mesh) is made of.

use crate::float_types::{Real, TRIANGLE_STRIDE};
use nalgebra::{Point3, Vector3};

/// Three vertices in order; the order fixes the orientation.
///
/// Nothing is required of the vertices: they may coincide or be collinear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<Real>; 3],
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        Triangle { vertices: [a, b, c] }
    }

    /// Build from one row of a flat mesh array: `[ax, ay, az, bx, by, bz, cx, cy, cz]`.
    #[inline]
    pub const fn from_coords(c: &[Real; TRIANGLE_STRIDE]) -> Self {
        Triangle::new(
            Point3::new(c[0], c[1], c[2]),
            Point3::new(c[3], c[4], c[5]),
            Point3::new(c[6], c[7], c[8]),
        )
    }

    /// Row-major coordinates, inverse of [`Triangle::from_coords`].
    pub fn to_coords(&self) -> [Real; TRIANGLE_STRIDE] {
        let [a, b, c] = self.vertices;
        [a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z]
    }

    /// Same triangle with the opposite orientation.
    #[inline]
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.vertices;
        Triangle::new(b, a, c)
    }

    /// Un-normalized normal `(b - a) × (c - a)`; zero for degenerate triangles.
    pub fn normal(&self) -> Vector3<Real> {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a))
    }

    /// Same triangle moved by `offset`.
    pub fn translated(&self, offset: &Vector3<Real>) -> Self {
        let [a, b, c] = self.vertices;
        Triangle::new(a + *offset, b + *offset, c + *offset)
    }
}

impl From<[Point3<Real>; 3]> for Triangle {
    fn from(vertices: [Point3<Real>; 3]) -> Self {
        Triangle { vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_reverses_the_normal() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(t.normal(), Vector3::z());
        assert_eq!(t.flipped().normal(), -Vector3::z());
        assert_eq!(t.flipped().flipped(), t);
    }

    #[test]
    fn coords_are_row_major() {
        let coords = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let t = Triangle::from_coords(&coords);
        assert_eq!(t.vertices[1], Point3::new(4.0, 5.0, 6.0));
        assert_eq!(t.to_coords(), coords);
    }
}
