//! Parallel implementation of the winding-number reduction

use super::traits::WindingOps;
use crate::float_types::Real;
use crate::triangle::Triangle;
use nalgebra::Point3;
use rayon::prelude::*;

/// Parallel implementation of `WindingOps`.
///
/// A fork-join sum over the triangles; the partial sums are exact integers,
/// so the result is identical to [`SerialWindingOps`](super::SerialWindingOps).
#[derive(Debug, Clone, Copy)]
pub struct ParallelWindingOps;

impl ParallelWindingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelWindingOps {
    fn default() -> Self {
        Self::new()
    }
}

impl WindingOps for ParallelWindingOps {
    fn winding_sum(&self, triangles: &[Triangle], origin: &Point3<Real>) -> i64 {
        triangles
            .par_iter()
            .map(|t| i64::from(t.chain(origin)))
            .sum()
    }

    fn checked_winding_sum(&self, triangles: &[Triangle], origin: &Point3<Real>) -> Option<i64> {
        triangles
            .par_iter()
            .map(|t| t.chain_checked(origin).map(i64::from))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::winding::SerialWindingOps;

    #[test]
    fn matches_serial_reduction() {
        let mesh = Mesh::sphere(1.0, 24, 12).merge(&Mesh::cube(0.5));
        let serial = SerialWindingOps::new();
        let parallel = ParallelWindingOps::new();

        for p in [
            Point3::new(0.1, 0.2, 0.3),
            Point3::new(0.7, 0.1, -0.2),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.25, 0.25, 0.25),
        ] {
            assert_eq!(
                serial.winding_sum(&mesh.triangles, &p),
                parallel.winding_sum(&mesh.triangles, &p)
            );
            assert_eq!(
                serial.checked_winding_sum(&mesh.triangles, &p),
                parallel.checked_winding_sum(&mesh.triangles, &p)
            );
        }
    }
}
