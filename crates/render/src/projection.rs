//! Orthographic projection of generated points onto the image plane.
//!
//! 2D shapes are drawn as-is. The tetrahedron is viewed from a camera at a
//! fixed elevation and azimuth, with `z` pointing up on screen.

use glam::{DVec2, DVec3};
use sierpinski_core::shape::{TETRAHEDRON_VERTICES, TRIANGLE_VERTICES};
use sierpinski_core::{PointSet, Shape};

/// Camera elevation above the xy-plane, in degrees.
pub const DEFAULT_ELEVATION: f64 = 20.0;
/// Camera azimuth around the z-axis, in degrees.
pub const DEFAULT_AZIMUTH: f64 = 30.0;

/// An orthographic camera described by elevation and azimuth angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    right: DVec3,
    up: DVec3,
}

impl Default for View {
    fn default() -> Self {
        Self::new(DEFAULT_ELEVATION, DEFAULT_AZIMUTH)
    }
}

impl View {
    /// Builds the screen basis for a camera at `elevation` / `azimuth` degrees.
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        let (se, ce) = elevation.to_radians().sin_cos();
        let (sa, ca) = azimuth.to_radians().sin_cos();
        Self {
            right: DVec3::new(-sa, ca, 0.0),
            up: DVec3::new(-se * ca, -se * sa, ce),
        }
    }

    /// Projects a 3D point to screen coordinates (x right, y up).
    pub fn project(&self, p: DVec3) -> DVec2 {
        DVec2::new(p.dot(self.right), p.dot(self.up))
    }

    /// Screen-space points for a generated set.
    pub fn project_points(&self, points: &PointSet) -> Vec<DVec2> {
        match points {
            PointSet::Planar(p) => p.clone(),
            PointSet::Spatial(p) => p.iter().map(|&v| self.project(v)).collect(),
        }
    }

    /// Screen-space bounding box (min, max) of a shape's vertex set.
    ///
    /// Used to frame a panel so that every shape keeps a stable position
    /// regardless of the random walk.
    pub fn bounds(&self, shape: Shape) -> (DVec2, DVec2) {
        match shape {
            Shape::Triangle => bounding_box(TRIANGLE_VERTICES.iter().copied()),
            Shape::Diamond => bounding_box(
                TRIANGLE_VERTICES
                    .iter()
                    .flat_map(|&v| [v, DVec2::new(v.x, -v.y)]),
            ),
            Shape::Tetrahedron => {
                bounding_box(TETRAHEDRON_VERTICES.iter().map(|&v| self.project(v)))
            }
        }
    }
}

fn bounding_box(points: impl Iterator<Item = DVec2>) -> (DVec2, DVec2) {
    points.fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), p| (min.min(p), max.max(p)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinski_core::shape::TRIANGLE_HEIGHT;

    const EPS: f64 = 1e-12;

    #[test]
    fn zero_angles_look_along_x_axis() {
        let view = View::new(0.0, 0.0);
        let p = view.project(DVec3::new(5.0, 2.0, 3.0));
        assert!((p - DVec2::new(2.0, 3.0)).length() < EPS, "got {p}");
    }

    #[test]
    fn top_down_view_keeps_z_out_of_screen() {
        let view = View::new(90.0, 0.0);
        let a = view.project(DVec3::new(0.3, 0.4, 0.0));
        let b = view.project(DVec3::new(0.3, 0.4, 9.0));
        assert!((a - b).length() < 1e-9);
    }

    #[test]
    fn projection_preserves_lengths_in_screen_plane() {
        let view = View::default();
        let right = view.project(view.right);
        let up = view.project(view.up);
        assert!((right - DVec2::X).length() < EPS);
        assert!((up - DVec2::Y).length() < EPS);
    }

    #[test]
    fn apex_projects_above_base() {
        let view = View::default();
        let apex = view.project(TETRAHEDRON_VERTICES[3]);
        let base_max = TETRAHEDRON_VERTICES[..3]
            .iter()
            .map(|&v| view.project(v).y)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(apex.y > base_max, "apex {apex} not above base {base_max}");
    }

    #[test]
    fn planar_points_pass_through_unchanged() {
        let view = View::default();
        let points = PointSet::Planar(vec![DVec2::new(0.1, 0.2)]);
        assert_eq!(view.project_points(&points), vec![DVec2::new(0.1, 0.2)]);
    }

    #[test]
    fn spatial_points_are_projected() {
        let view = View::default();
        let v = DVec3::new(0.5, 0.25, 0.125);
        let points = PointSet::Spatial(vec![v]);
        assert_eq!(view.project_points(&points), vec![view.project(v)]);
    }

    #[test]
    fn diamond_bounds_are_symmetric() {
        let (min, max) = View::default().bounds(Shape::Diamond);
        assert!((min - DVec2::new(0.0, -TRIANGLE_HEIGHT)).length() < EPS);
        assert!((max - DVec2::new(1.0, TRIANGLE_HEIGHT)).length() < EPS);
    }

    #[test]
    fn tetrahedron_bounds_contain_projected_vertices() {
        let view = View::default();
        let (min, max) = view.bounds(Shape::Tetrahedron);
        for v in TETRAHEDRON_VERTICES {
            let p = view.project(v);
            assert!(p.cmpge(min).all() && p.cmple(max).all());
        }
    }
}
