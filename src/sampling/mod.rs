//! Point classification and rejection sampling inside a mesh.
//!
//! Everything here is built on one primitive, [`Mesh::contains`]: a point is
//! inside when the winding number around it is non-zero. Sampling draws
//! candidates in the unit cube, rescales them into the mesh's bounding box and
//! keeps the ones inside, so the number of accepted points is the number of
//! draws times the fill fraction (enclosed volume over box volume), which is
//! generally not known in advance.

pub mod halton;

pub use halton::Halton;

use crate::errors::{WindingError, WindingResult};
use crate::float_types::{POINT_STRIDE, Real};
use crate::mesh::Mesh;
use nalgebra::Point3;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Where rejection sampling gets its candidates from.
///
/// Both sources yield unit-cube coordinates that are mapped into the mesh's
/// bounding box with [`Aabb::point_at`](crate::aabb::Aabb::point_at).
#[derive(Debug)]
pub enum SampleSource<'a> {
    /// Draw exactly `draws` points from a caller-owned generator, advancing it.
    Halton { generator: &'a mut Halton, draws: usize },
    /// Use these unit-cube coordinates, in order.
    Grid(&'a [[Real; 3]]),
}

/// Parse a flat `x, y, z, x, y, z, ...` array, one `T` per triple.
fn triples_from_flat<T>(coords: &[Real], make: impl Fn([Real; 3]) -> T) -> WindingResult<Vec<T>> {
    if coords.len() % POINT_STRIDE != 0 {
        return Err(WindingError::MalformedCoordinates {
            len: coords.len(),
            stride: POINT_STRIDE,
        });
    }
    let mut out = Vec::new();
    out.try_reserve_exact(coords.len() / POINT_STRIDE)?;
    out.extend(coords.chunks_exact(POINT_STRIDE).map(|c| make([c[0], c[1], c[2]])));
    Ok(out)
}

/// Split a flat `x, y, z, x, y, z, ...` array into coordinate triples.
pub fn coords_from_flat(coords: &[Real]) -> WindingResult<Vec<[Real; 3]>> {
    triples_from_flat(coords, |c| c)
}

/// Split a flat `x, y, z, x, y, z, ...` array into points.
pub fn points_from_flat(coords: &[Real]) -> WindingResult<Vec<Point3<Real>>> {
    triples_from_flat(coords, Point3::from)
}

/// Membership flag for every point, in input order.
#[cfg(not(feature = "parallel"))]
fn membership(mesh: &Mesh, points: &[Point3<Real>]) -> WindingResult<Vec<bool>> {
    let mut flags = Vec::new();
    flags.try_reserve_exact(points.len())?;
    flags.extend(points.iter().map(|p| mesh.contains(p)));
    Ok(flags)
}

/// Membership flag for every point, in input order.
#[cfg(feature = "parallel")]
fn membership(mesh: &Mesh, points: &[Point3<Real>]) -> WindingResult<Vec<bool>> {
    let mut flags = Vec::new();
    flags.try_reserve_exact(points.len())?;
    points
        .par_iter()
        .map(|p| mesh.contains(p))
        .collect_into_vec(&mut flags);
    Ok(flags)
}

/// Classify each point (already in mesh space) as inside (`true`) or outside.
///
/// The result has one flag per input point, in the same order. An empty point
/// list is rejected; an empty mesh encloses nothing and flags every point
/// `false`.
pub fn classify_points(mesh: &Mesh, points: &[Point3<Real>]) -> WindingResult<Vec<bool>> {
    if points.is_empty() {
        return Err(WindingError::NoPoints);
    }
    membership(mesh, points)
}

/// Draw the candidate points of `source`, rescaled into the mesh's bounding box.
fn draw_candidates(mesh: &Mesh, source: SampleSource<'_>) -> WindingResult<Vec<Point3<Real>>> {
    // Argument errors take precedence over EmptyMesh.
    match &source {
        SampleSource::Halton { draws: 0, .. } => return Err(WindingError::NonPositiveCount),
        SampleSource::Grid(grid) if grid.is_empty() => return Err(WindingError::NoPoints),
        _ => {},
    }

    let bb = mesh.bounding_box()?;
    debug!(mins = ?bb.mins, maxs = ?bb.maxs, "sampling bounding box");

    let mut candidates = Vec::new();
    match source {
        SampleSource::Halton { generator, draws } => {
            candidates.try_reserve_exact(draws)?;
            for _ in 0..draws {
                candidates.push(bb.point_at(generator.next_point3()?));
            }
        },
        SampleSource::Grid(grid) => {
            candidates.try_reserve_exact(grid.len())?;
            candidates.extend(grid.iter().map(|&unit| bb.point_at(unit)));
        },
    }
    Ok(candidates)
}

/// Rejection-sample points inside `mesh`.
///
/// Every candidate of `source` is tested once and kept if inside, so the
/// result holds *at most* as many points as there were candidates: roughly
/// `draws × fill fraction`, possibly none at all. Callers must use the length
/// of the returned vector, never the requested count.
///
/// Fails with [`WindingError::EmptyMesh`] for a mesh without triangles, with
/// [`WindingError::NonPositiveCount`] / [`WindingError::NoPoints`] for an
/// empty source, and with [`WindingError::Reserve`] if the output buffer
/// cannot be allocated. An empty `Ok` vector is a legitimate outcome and is
/// distinct from all of these.
pub fn generate_interior_points(mesh: &Mesh, source: SampleSource<'_>) -> WindingResult<Vec<Point3<Real>>> {
    let candidates = draw_candidates(mesh, source)?;
    let flags = membership(mesh, &candidates)?;

    let accepted = flags.iter().filter(|&&inside| inside).count();
    let mut points = Vec::new();
    points.try_reserve_exact(accepted)?;
    points.extend(
        candidates
            .iter()
            .zip(&flags)
            .filter_map(|(p, &inside)| inside.then_some(*p)),
    );

    debug!(
        candidates = candidates.len(),
        accepted,
        fill_fraction = accepted as Real / candidates.len() as Real,
        "rejection sampling finished"
    );
    Ok(points)
}

/// Estimate the fraction of the bounding box enclosed by `mesh` as
/// accepted / `draws` over quasi-random candidates from `generator`.
pub fn fill_fraction(mesh: &Mesh, generator: &mut Halton, draws: usize) -> WindingResult<Real> {
    let candidates = draw_candidates(mesh, SampleSource::Halton { generator, draws })?;
    let hits = membership(mesh, &candidates)?
        .into_iter()
        .filter(|&inside| inside)
        .count();

    info!(hits, points = draws, "fill fraction estimated");
    Ok(hits as Real / draws as Real)
}

impl Mesh {
    /// See [`classify_points`].
    pub fn classify_points(&self, points: &[Point3<Real>]) -> WindingResult<Vec<bool>> {
        classify_points(self, points)
    }

    /// See [`generate_interior_points`].
    pub fn interior_points(&self, source: SampleSource<'_>) -> WindingResult<Vec<Point3<Real>>> {
        generate_interior_points(self, source)
    }

    /// See [`fill_fraction`].
    pub fn fill_fraction(&self, generator: &mut Halton, draws: usize) -> WindingResult<Real> {
        fill_fraction(self, generator, draws)
    }

    /// Enclosed volume estimated as fill fraction times bounding-box volume.
    pub fn estimate_volume(&self, generator: &mut Halton, draws: usize) -> WindingResult<Real> {
        Ok(self.fill_fraction(generator, draws)? * self.bounding_box()?.volume())
    }
}
