//! Traits defining winding-number reductions for dependency inversion

use crate::float_types::Real;
use crate::triangle::Triangle;
use nalgebra::Point3;

/// Core winding-number reduction trait.
///
/// Per-triangle contributions are exact integers in `{-1, 0, 1}`, so every
/// implementation must return the same sum regardless of evaluation order.
pub trait WindingOps {
    /// Sum of [`triangle_chain`](super::triangle_chain) over `triangles`:
    /// twice the winding number around `origin`.
    fn winding_sum(&self, triangles: &[Triangle], origin: &Point3<Real>) -> i64;

    /// Like [`WindingOps::winding_sum`], but `None` as soon as any triangle
    /// is found to contain `origin`.
    fn checked_winding_sum(&self, triangles: &[Triangle], origin: &Point3<Real>) -> Option<i64>;
}
