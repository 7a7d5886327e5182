//! Generated point sequences.

use glam::{DVec2, DVec3};
use serde::Serialize;

/// An ordered sequence of sampled points, 2D or 3D depending on the shape.
///
/// Produced once by the generator and handed to renderers as a read-only
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PointSet {
    Planar(Vec<DVec2>),
    Spatial(Vec<DVec3>),
}

impl PointSet {
    pub fn len(&self) -> usize {
        match self {
            PointSet::Planar(p) => p.len(),
            PointSet::Spatial(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of coordinates per point.
    pub fn dimension(&self) -> usize {
        match self {
            PointSet::Planar(_) => 2,
            PointSet::Spatial(_) => 3,
        }
    }

    /// The 2D points, if this set is planar.
    pub fn as_planar(&self) -> Option<&[DVec2]> {
        match self {
            PointSet::Planar(p) => Some(p),
            PointSet::Spatial(_) => None,
        }
    }

    /// The 3D points, if this set is spatial.
    pub fn as_spatial(&self) -> Option<&[DVec3]> {
        match self {
            PointSet::Planar(_) => None,
            PointSet::Spatial(p) => Some(p),
        }
    }

    /// Every point lifted to 3D (planar points get `z = 0`).
    pub fn iter_3d(&self) -> Box<dyn Iterator<Item = DVec3> + '_> {
        match self {
            PointSet::Planar(p) => Box::new(p.iter().map(|v| v.extend(0.0))),
            PointSet::Spatial(p) => Box::new(p.iter().copied()),
        }
    }

    /// Coordinates of each point as a plain `Vec<f64>` (2 or 3 entries).
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        match self {
            PointSet::Planar(p) => p.iter().map(|v| v.to_array().to_vec()).collect(),
            PointSet::Spatial(p) => p.iter().map(|v| v.to_array().to_vec()).collect(),
        }
    }
}
