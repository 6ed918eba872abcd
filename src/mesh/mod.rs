//! `Mesh` struct: a closed, oriented surface given as a soup of triangles.

use crate::aabb::Aabb;
use crate::errors::{WindingError, WindingResult};
use crate::float_types::{Real, TRIANGLE_STRIDE};
use crate::triangle::Triangle;
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

pub mod shapes;

/// A triangulated surface.
///
/// No shared-vertex indexing is kept: each triangle carries its own three
/// points, so meshes can be concatenated, and disconnected, self-intersecting
/// or non-manifold input is represented as-is. The winding-number engine only
/// ever looks at one triangle at a time.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Triangles, in the order supplied
    pub triangles: Vec<Triangle>,

    /// Lazily calculated AABB that spans `triangles`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Build a Mesh from an existing triangle list
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Mesh {
            triangles,
            bounding_box: OnceLock::new(),
        }
    }

    /// Build a Mesh from a flat, triangle-major coordinate array
    /// (9 values per triangle: three vertices of x, y, z).
    ///
    /// ```
    /// # use polywind::mesh::Mesh;
    /// let mesh = Mesh::from_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(mesh.len(), 1);
    /// assert!(Mesh::from_flat(&[0.0; 10]).is_err());
    /// ```
    pub fn from_flat(coords: &[Real]) -> WindingResult<Self> {
        if coords.len() % TRIANGLE_STRIDE != 0 {
            return Err(WindingError::MalformedCoordinates {
                len: coords.len(),
                stride: TRIANGLE_STRIDE,
            });
        }

        let mut triangles = Vec::new();
        triangles.try_reserve_exact(coords.len() / TRIANGLE_STRIDE)?;
        // chunks_exact only yields full rows, so the conversion never drops one.
        triangles.extend(
            coords
                .chunks_exact(TRIANGLE_STRIDE)
                .flat_map(<&[Real; TRIANGLE_STRIDE]>::try_from)
                .map(Triangle::from_coords),
        );

        Ok(Mesh::from_triangles(triangles))
    }

    /// Flat, triangle-major coordinates, inverse of [`Mesh::from_flat`].
    pub fn to_flat(&self) -> Vec<Real> {
        self.triangles.iter().flat_map(|t| t.to_coords()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterate over every vertex of every triangle, duplicates included.
    pub fn vertices(&self) -> impl Iterator<Item = &Point3<Real>> + '_ {
        self.triangles.iter().flat_map(|t| t.vertices.iter())
    }

    /// Componentwise extent of all vertices, computed once and cached.
    ///
    /// An empty mesh has no bounding box and yields [`WindingError::EmptyMesh`].
    pub fn bounding_box(&self) -> WindingResult<Aabb> {
        if let Some(bb) = self.bounding_box.get() {
            return Ok(*bb);
        }
        let bb = Aabb::from_points(self.vertices())?;
        Ok(*self.bounding_box.get_or_init(|| bb))
    }

    /// Invalidates object's cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Same surface with every triangle's orientation reversed.
    ///
    /// Negates the winding number around every point not on the surface.
    pub fn flipped(&self) -> Mesh {
        Mesh::from_triangles(self.triangles.iter().map(Triangle::flipped).collect())
    }

    /// Returns a new Mesh translated by x, y, and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> Mesh {
        let offset = Vector3::new(x, y, z);
        Mesh::from_triangles(
            self.triangles
                .iter()
                .map(|t| t.translated(&offset))
                .collect(),
        )
    }

    /// Concatenate the triangles of `self` and `other`.
    ///
    /// Winding numbers add: a point enclosed by both surfaces is enclosed twice.
    pub fn merge(&self, other: &Mesh) -> Mesh {
        let mut triangles = Vec::with_capacity(self.len() + other.len());
        triangles.extend_from_slice(&self.triangles);
        triangles.extend_from_slice(&other.triangles);
        Mesh::from_triangles(triangles)
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Mesh::from_triangles(triangles)
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Mesh::from_triangles(iter.into_iter().collect())
    }
}
