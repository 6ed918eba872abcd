//! Closed, outward-oriented solids built directly as triangle soups.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::triangle::Triangle;
use nalgebra::Point3;
use std::f64::consts::{PI, TAU};

impl Mesh {
    /// Axis-aligned box spanning `(0, 0, 0)` to `(width, length, height)`.
    ///
    /// Each face is split into two triangles, counter-clockwise as seen from
    /// outside, for 12 triangles in total.
    pub fn cuboid(width: Real, length: Real, height: Real) -> Mesh {
        // Define the eight corner vertices once
        let corners = [
            Point3::new(0.0, 0.0, 0.0),         // 0: origin
            Point3::new(width, 0.0, 0.0),       // 1: +X
            Point3::new(width, length, 0.0),    // 2: +X+Y
            Point3::new(0.0, length, 0.0),      // 3: +Y
            Point3::new(0.0, 0.0, height),      // 4: +Z
            Point3::new(width, 0.0, height),    // 5: +X+Z
            Point3::new(width, length, height), // 6: +X+Y+Z
            Point3::new(0.0, length, height),   // 7: +Y+Z
        ];

        // Faces with proper winding order (CCW from outside)
        let faces: [[usize; 4]; 6] = [
            [0, 3, 2, 1], // Bottom face
            [4, 5, 6, 7], // Top face
            [0, 1, 5, 4], // Front face
            [3, 7, 6, 2], // Back face
            [0, 4, 7, 3], // Left face
            [1, 2, 6, 5], // Right face
        ];

        faces
            .iter()
            .flat_map(|&[a, b, c, d]| {
                [
                    Triangle::new(corners[a], corners[b], corners[c]),
                    Triangle::new(corners[a], corners[c], corners[d]),
                ]
            })
            .collect()
    }

    /// Cube of side `width` with one corner at the origin.
    pub fn cube(width: Real) -> Mesh {
        Mesh::cuboid(width, width, width)
    }

    /// UV sphere centered at the origin.
    ///
    /// `slices` divides the azimuth around the z axis, `stacks` the polar angle
    /// from the north pole `(0, 0, radius)` to the south pole. The pole rows are
    /// fans, so no zero-area triangles are produced.
    pub fn sphere(radius: Real, slices: usize, stacks: usize) -> Mesh {
        let slices = slices.max(3);
        let stacks = stacks.max(2);

        let vertex = |i: usize, j: usize| -> Point3<Real> {
            let theta = TAU * (i % slices) as Real / slices as Real;
            let phi = PI * j as Real / stacks as Real;
            Point3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        };
        // Poles are placed exactly, so every fan triangle shares the same apex.
        let north = Point3::new(0.0, 0.0, radius);
        let south = Point3::new(0.0, 0.0, -radius);

        let mut triangles = Vec::with_capacity(2 * slices * (stacks - 1));
        for j in 0..stacks {
            for i in 0..slices {
                // a-b along the upper ring, d-c along the lower ring
                let a = vertex(i, j);
                let b = vertex(i + 1, j);
                let c = vertex(i + 1, j + 1);
                let d = vertex(i, j + 1);

                if j == 0 {
                    triangles.push(Triangle::new(north, d, c));
                } else if j == stacks - 1 {
                    triangles.push(Triangle::new(a, south, b));
                } else {
                    triangles.push(Triangle::new(a, d, c));
                    triangles.push(Triangle::new(a, c, b));
                }
            }
        }

        Mesh::from_triangles(triangles)
    }

    /// Right-angled tetrahedron on the positive axes: corners at the origin and
    /// at `size` along x, y and z.
    pub fn tetrahedron(size: Real) -> Mesh {
        let o = Point3::origin();
        let x = Point3::new(size, 0.0, 0.0);
        let y = Point3::new(0.0, size, 0.0);
        let z = Point3::new(0.0, 0.0, size);

        Mesh::from_triangles(vec![
            Triangle::new(o, y, x),
            Triangle::new(o, x, z),
            Triangle::new(o, z, y),
            Triangle::new(x, y, z),
        ])
    }
}
