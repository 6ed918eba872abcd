// Our Real scalar type.
//
// The sign predicates evaluate their determinants directly in this type, so it
// stays pinned to double precision: every coordinate that reaches the winding
// engine is an `f64`, exactly as the flat mesh arrays supply it.
pub type Real = f64;

/// Number of coordinates describing one triangle in a flat mesh array.
pub const TRIANGLE_STRIDE: usize = 9;

/// Number of coordinates describing one point in a flat point array.
pub const POINT_STRIDE: usize = 3;
