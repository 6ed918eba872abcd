//! Robust **point-in-polyhedron** tests for triangulated surfaces, built around an
//! exact-sign [winding number](https://en.wikipedia.org/wiki/Winding_number).
//!
//! A [`Mesh`] is an oriented triangle soup. [`Mesh::winding_number`] counts how
//! many times the surface wraps around a query point using only sign
//! evaluations of fixed polynomial expressions ([`predicates`]), with no
//! tolerance anywhere. Degenerate input (coincident vertices, zero-area faces,
//! self-intersections, several disconnected shells) is handled without special
//! cases.
//!
//! On top of that, [`sampling`] classifies point sets and fills a mesh with
//! interior points by rejection sampling from a scrambled
//! [Halton](https://en.wikipedia.org/wiki/Halton_sequence) sequence or a
//! caller-supplied grid.
//!
//! ```
//! use polywind::{Halton, Mesh, SampleSource};
//! use nalgebra::Point3;
//!
//! let sphere = Mesh::sphere(1.0, 32, 16);
//! assert!(sphere.contains(&Point3::new(0.1, 0.2, 0.3)));
//!
//! let mut halton = Halton::new();
//! let inside = sphere
//!     .interior_points(SampleSource::Halton { generator: &mut halton, draws: 200 })
//!     .unwrap();
//! assert!(inside.len() <= 200);
//! assert!(inside.iter().all(|p| sphere.contains(p)));
//! ```
//!
//! # Features
//! #### Optional
//! - **parallel**: use rayon for the per-triangle reduction and for per-point classification

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod predicates;
pub mod sampling;
pub mod triangle;
pub mod winding;

pub use aabb::Aabb;
pub use errors::{WindingError, WindingResult};
pub use float_types::Real;
pub use mesh::Mesh;
pub use predicates::Sign;
pub use sampling::{
    SampleSource, classify_points, coords_from_flat, fill_fraction, generate_interior_points,
    halton::Halton, points_from_flat,
};
pub use triangle::Triangle;
pub use winding::{PointLocation, triangle_chain};
