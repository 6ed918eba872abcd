//! Axis-aligned bounding boxes used to map unit-cube samples into mesh space.

use crate::errors::{WindingError, WindingResult};
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Componentwise min/max over `points`.
    ///
    /// The first point seeds both corners, so an empty iterator has no box and
    /// is reported as [`WindingError::EmptyMesh`].
    pub fn from_points<'a, I>(points: I) -> WindingResult<Self>
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        let mut points = points.into_iter();
        let first = points.next().ok_or(WindingError::EmptyMesh)?;
        let mut mins = *first;
        let mut maxs = *first;

        for p in points {
            for d in 0..3 {
                if p[d] < mins[d] {
                    mins[d] = p[d];
                }
                if p[d] > maxs[d] {
                    maxs[d] = p[d];
                }
            }
        }

        Ok(Self { mins, maxs })
    }

    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    #[inline]
    pub fn volume(&self) -> Real {
        let e = self.extents();
        e.x * e.y * e.z
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        Point3::new(
            (self.mins.x + self.maxs.x) / 2.0,
            (self.mins.y + self.maxs.y) / 2.0,
            (self.mins.z + self.maxs.z) / 2.0,
        )
    }

    /// Closed-box containment test.
    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        (0..3).all(|d| self.mins[d] <= p[d] && p[d] <= self.maxs[d])
    }

    /// Map a unit-cube coordinate into the box: `mins + u * (maxs - mins)` per axis.
    ///
    /// Coordinates outside `[0, 1]` are extrapolated, not clamped.
    #[inline]
    pub fn point_at(&self, unit: [Real; 3]) -> Point3<Real> {
        Point3::new(
            self.mins.x + unit[0] * (self.maxs.x - self.mins.x),
            self.mins.y + unit[1] * (self.maxs.y - self.mins.y),
            self.mins.z + unit[2] * (self.maxs.z - self.mins.z),
        )
    }
}
