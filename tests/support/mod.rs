//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point3;
use polywind::{Mesh, float_types::Real};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub fn pt(x: Real, y: Real, z: Real) -> Point3<Real> {
    Point3::new(x, y, z)
}

/// Reproducible random source for property-style tests.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Point with integer coordinates in `-range..=range`.
pub fn int_point<R: Rng>(rng: &mut R, range: i64) -> Point3<Real> {
    Point3::new(
        rng.gen_range(-range..=range) as Real,
        rng.gen_range(-range..=range) as Real,
        rng.gen_range(-range..=range) as Real,
    )
}

/// The triangles of `mesh` in a shuffled order.
pub fn shuffled(mesh: &Mesh, seed: u64) -> Mesh {
    let mut triangles = mesh.triangles.clone();
    triangles.shuffle(&mut seeded(seed));
    Mesh::from_triangles(triangles)
}

/// Unit cube with its minimum corner at `(x, y, z)`.
pub fn unit_cube_at(x: Real, y: Real, z: Real) -> Mesh {
    Mesh::cube(1.0).translate(x, y, z)
}
