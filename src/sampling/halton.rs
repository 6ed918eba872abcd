//! Scrambled Halton quasi-random sequence.
//!
//! Digits are scrambled with the permutations of Kocis & Whiten, *Computational
//! investigations of low-discrepancy sequences*, ACM TOMS 23(2), 1997: for the
//! base `b`, the permutation lists the bit-reversals of `0..2^k` that are
//! smaller than `b`, in order, where `k` is the bit length of the largest prime
//! in the table.
//!
//! Unlike a process-wide generator, every [`Halton`] owns its position and its
//! tables, so independent callers never disturb each other's sequence.

use crate::errors::{WindingError, WindingResult};
use crate::float_types::Real;

/// Dimensions available from [`Halton::new`], one prime base per dimension.
pub const DEFAULT_DIMENSIONS: usize = 50;

/// Index of the first point drawn after construction or [`Halton::reset`].
///
/// Index 0 maps to the origin corner of the unit cube in every dimension, so
/// the sequence starts at 1 and stays inside the open cube `(0, 1)^d`.
pub const FIRST_INDEX: u64 = 1;

/// Deterministic low-discrepancy point generator.
///
/// ```
/// # use polywind::sampling::halton::Halton;
/// let mut halton = Halton::new();
/// let first = halton.next_point3().unwrap();
/// halton.next_point3().unwrap();
/// halton.reset();
/// assert_eq!(halton.next_point3().unwrap(), first);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Halton {
    index: u64,
    primes: Vec<u64>,
    permutations: Vec<Vec<u64>>,
}

impl Halton {
    /// Generator over the first [`DEFAULT_DIMENSIONS`] primes.
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_DIMENSIONS)
    }

    /// Generator supporting points of up to `dimensions` coordinates (at least one).
    pub fn with_dimensions(dimensions: usize) -> Self {
        let primes = first_primes(dimensions.max(1));
        let permutations = kocis_whiten_permutations(&primes);
        Halton {
            index: FIRST_INDEX,
            primes,
            permutations,
        }
    }

    /// Largest supported point dimension.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.primes.len()
    }

    /// Index of the next point to be drawn.
    #[inline]
    pub const fn position(&self) -> u64 {
        self.index
    }

    /// Move to an arbitrary index of the sequence.
    #[inline]
    pub const fn seek(&mut self, index: u64) {
        self.index = index;
    }

    /// Rewind to the start of the sequence.
    #[inline]
    pub const fn reset(&mut self) {
        self.index = FIRST_INDEX;
    }

    /// Coordinate `dim` (zero-based) of the point with the given `index`.
    ///
    /// Stateless: does not move the generator.
    pub fn sample(&self, index: u64, dim: usize) -> WindingResult<Real> {
        let base = *self.primes.get(dim).ok_or(WindingError::UnsupportedDimension {
            requested: dim + 1,
            available: self.dimensions(),
        })?;
        let permutation = &self.permutations[dim];

        let inv_base = 1.0 / base as Real;
        let mut reverse_base = inv_base;
        let mut result = 0.0;
        let mut index = index;
        while index > 0 {
            let digit = (index % base) as usize;
            result += permutation[digit] as Real * reverse_base;
            reverse_base *= inv_base;
            index /= base;
        }
        Ok(result)
    }

    fn check_dimension(&self, dimension: usize) -> WindingResult<()> {
        if dimension > self.dimensions() {
            return Err(WindingError::UnsupportedDimension {
                requested: dimension,
                available: self.dimensions(),
            });
        }
        Ok(())
    }

    /// Index following the current one. The generator is left where it is
    /// when the index space is used up.
    fn following_index(&self) -> WindingResult<u64> {
        self.index.checked_add(1).ok_or(WindingError::SequenceExhausted)
    }

    /// Draw the next `dimension`-coordinate point and advance.
    pub fn next_point(&mut self, dimension: usize) -> WindingResult<Vec<Real>> {
        self.check_dimension(dimension)?;
        let next = self.following_index()?;
        let point = (0..dimension)
            .map(|d| self.sample(self.index, d))
            .collect::<WindingResult<Vec<_>>>()?;
        self.index = next;
        Ok(point)
    }

    /// Draw the next point of the unit cube and advance.
    pub fn next_point3(&mut self) -> WindingResult<[Real; 3]> {
        self.check_dimension(3)?;
        let next = self.following_index()?;
        let point = [
            self.sample(self.index, 0)?,
            self.sample(self.index, 1)?,
            self.sample(self.index, 2)?,
        ];
        self.index = next;
        Ok(point)
    }

    /// Draw `count` consecutive points of `dimension` coordinates each.
    pub fn take_points(&mut self, count: usize, dimension: usize) -> WindingResult<Vec<Vec<Real>>> {
        self.check_dimension(dimension)?;
        let mut points = Vec::new();
        points.try_reserve_exact(count)?;
        for _ in 0..count {
            points.push(self.next_point(dimension)?);
        }
        Ok(points)
    }
}

impl Default for Halton {
    fn default() -> Self {
        Self::new()
    }
}

/// The first `count` primes, by trial division against the primes found so far.
fn first_primes(count: usize) -> Vec<u64> {
    let mut primes: Vec<u64> = Vec::with_capacity(count);
    let mut candidate = 2u64;
    while primes.len() < count {
        if primes.iter().all(|p| candidate % p != 0) {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}

/// Number of bits needed to represent `value`.
const fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Reverse the lowest `bits` bits of `value`.
const fn bit_reverse(value: u64, bits: u32) -> u64 {
    if bits == 0 {
        0
    } else {
        value.reverse_bits() >> (u64::BITS - bits)
    }
}

fn kocis_whiten_permutations(primes: &[u64]) -> Vec<Vec<u64>> {
    let max_prime = primes.iter().copied().max().unwrap_or(2);
    let bits = bit_length(max_prime);

    let mut permutations: Vec<Vec<u64>> = primes
        .iter()
        .map(|&p| Vec::with_capacity(p as usize))
        .collect();

    for i in 0..(1u64 << bits) {
        let reversed = bit_reverse(i, bits);
        for (permutation, &p) in permutations.iter_mut().zip(primes) {
            if reversed < p {
                permutation.push(reversed);
            }
        }
    }
    permutations
}
