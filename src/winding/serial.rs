//! Serial implementation of the winding-number reduction

use super::traits::WindingOps;
use crate::float_types::Real;
use crate::triangle::Triangle;
use nalgebra::Point3;

/// Serial implementation of `WindingOps`.
#[derive(Debug, Clone, Copy)]
pub struct SerialWindingOps;

impl SerialWindingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialWindingOps {
    fn default() -> Self {
        Self::new()
    }
}

impl WindingOps for SerialWindingOps {
    fn winding_sum(&self, triangles: &[Triangle], origin: &Point3<Real>) -> i64 {
        triangles
            .iter()
            .map(|t| i64::from(t.chain(origin)))
            .sum()
    }

    fn checked_winding_sum(&self, triangles: &[Triangle], origin: &Point3<Real>) -> Option<i64> {
        triangles
            .iter()
            .map(|t| t.chain_checked(origin).map(i64::from))
            .sum()
    }
}
