//! Chaos-game point generation.
//!
//! Every shape uses the same walk: start at a random point in the unit
//! cube, repeatedly jump halfway toward a uniformly chosen vertex, and record
//! the position after each jump. The first [`BURN_IN`] jumps are discarded so
//! the arbitrary starting point never shows up in the output.

use std::ops::{Add, Mul};

use glam::{DVec2, DVec3};

use crate::error::FractalError;
use crate::points::PointSet;
use crate::prng::{RandomSource, Xorshift64};
use crate::shape::{Shape, TETRAHEDRON_VERTICES, TRIANGLE_VERTICES};

/// Jumps performed before recording starts.
pub const BURN_IN: usize = 10;

/// Generates `count` points approximating `shape`, seeded from entropy.
///
/// The result holds exactly `shape.output_len(count)` points.
/// Returns `FractalError::InvalidPointCount` if `count` is zero.
pub fn generate(shape: Shape, count: usize) -> Result<PointSet, FractalError> {
    generate_with(shape, count, &mut Xorshift64::from_entropy())
}

/// Like [`generate`], drawing all randomness from `rng`.
pub fn generate_with<R: RandomSource>(
    shape: Shape,
    count: usize,
    rng: &mut R,
) -> Result<PointSet, FractalError> {
    if count == 0 {
        return Err(FractalError::InvalidPointCount);
    }
    Ok(match shape {
        Shape::Triangle => PointSet::Planar(triangle_points(count, rng)),
        Shape::Diamond => PointSet::Planar(diamond_points(count, rng)),
        Shape::Tetrahedron => PointSet::Spatial(tetrahedron_points(count, rng)),
    })
}

/// Sierpinski triangle: `count` points inside the unit equilateral triangle.
pub fn triangle_points<R: RandomSource>(count: usize, rng: &mut R) -> Vec<DVec2> {
    let start = DVec2::new(rng.next_f64(), rng.next_f64());
    walk(&TRIANGLE_VERTICES, start, count, rng)
}

/// Sierpinski diamond: a triangle walk of `count` points followed by the
/// same points mirrored across the x-axis, `2 * count` in total.
pub fn diamond_points<R: RandomSource>(count: usize, rng: &mut R) -> Vec<DVec2> {
    let mut points = triangle_points(count, rng);
    points.reserve(count);
    points.extend_from_within(..);
    for p in &mut points[count..] {
        p.y = -p.y;
    }
    points
}

/// Sierpinski tetrahedron: `count` points inside the unit regular tetrahedron.
pub fn tetrahedron_points<R: RandomSource>(count: usize, rng: &mut R) -> Vec<DVec3> {
    let start = DVec3::new(rng.next_f64(), rng.next_f64(), rng.next_f64());
    walk(&TETRAHEDRON_VERTICES, start, count, rng)
}

/// Runs the burn-in, then records `count` midpoint jumps toward random vertices.
fn walk<V, R>(vertices: &[V], start: V, count: usize, rng: &mut R) -> Vec<V>
where
    V: Copy + Add<Output = V> + Mul<f64, Output = V>,
    R: RandomSource,
{
    let mut state = start;
    let mut jump = |state: V| (state + vertices[rng.next_index(vertices.len())]) * 0.5;

    for _ in 0..BURN_IN {
        state = jump(state);
    }

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        state = jump(state);
        points.push(state);
    }
    points
}
