//! Splits the image into per-shape panels and maps plot coordinates to pixels.

use glam::DVec2;

/// Fraction of each panel dimension left empty on every side.
pub const MARGIN: f64 = 0.05;

/// A rectangular region of the raster one shape is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Panel {
    /// Splits a `width` x `height` image into `count` equal columns, left to right.
    ///
    /// The last column absorbs the rounding remainder. Panels may be zero
    /// pixels wide when `count > width`; such panels map nothing.
    pub fn columns(width: usize, height: usize, count: usize) -> Vec<Panel> {
        (0..count)
            .map(|i| {
                let x0 = i * width / count;
                let x1 = (i + 1) * width / count;
                Panel {
                    x: x0,
                    y: 0,
                    width: x1 - x0,
                    height,
                }
            })
            .collect()
    }

    /// Fits the box `(min, max)` into this panel, centered, preserving
    /// aspect ratio, with y pointing up.
    pub fn fit(&self, min: DVec2, max: DVec2) -> Mapping {
        let span = (max - min).max(DVec2::splat(f64::EPSILON));
        let avail = DVec2::new(self.width as f64, self.height as f64) * (1.0 - 2.0 * MARGIN);
        let scale = (avail / span).min_element().max(0.0);
        let center_src = (min + max) * 0.5;
        let center_dst = DVec2::new(
            self.x as f64 + self.width as f64 * 0.5,
            self.y as f64 + self.height as f64 * 0.5,
        );
        Mapping {
            panel: *self,
            scale,
            center_src,
            center_dst,
        }
    }

    fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// A transform from plot coordinates to pixel coordinates inside one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapping {
    panel: Panel,
    scale: f64,
    center_src: DVec2,
    center_dst: DVec2,
}

impl Mapping {
    /// Pixel coordinates for `p`, or `None` if it falls outside the panel.
    pub fn to_pixel(&self, p: DVec2) -> Option<(usize, usize)> {
        let d = (p - self.center_src) * self.scale;
        let fx = (self.center_dst.x + d.x).floor();
        let fy = (self.center_dst.y - d.y).floor();
        if !fx.is_finite() || !fy.is_finite() || fx < 0.0 || fy < 0.0 {
            return None;
        }
        let (px, py) = (fx as usize, fy as usize);
        self.panel.contains(px, py).then_some((px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_cover_width_exactly() {
        let panels = Panel::columns(1000, 500, 3);
        assert_eq!(panels.len(), 3);
        assert_eq!(panels[0].x, 0);
        assert_eq!(panels.iter().map(|p| p.width).sum::<usize>(), 1000);
        for pair in panels.windows(2) {
            assert_eq!(pair[0].x + pair[0].width, pair[1].x);
        }
    }

    #[test]
    fn single_column_is_whole_image() {
        let panels = Panel::columns(640, 480, 1);
        assert_eq!(
            panels,
            vec![Panel {
                x: 0,
                y: 0,
                width: 640,
                height: 480
            }]
        );
    }

    #[test]
    fn fit_maps_center_to_panel_center() {
        let panel = Panel::columns(200, 100, 1)[0];
        let mapping = panel.fit(DVec2::ZERO, DVec2::ONE);
        assert_eq!(mapping.to_pixel(DVec2::splat(0.5)), Some((100, 50)));
    }

    #[test]
    fn fit_puts_y_up() {
        let panel = Panel::columns(100, 100, 1)[0];
        let mapping = panel.fit(DVec2::ZERO, DVec2::ONE);
        let (_, low) = mapping.to_pixel(DVec2::new(0.5, 0.1)).unwrap();
        let (_, high) = mapping.to_pixel(DVec2::new(0.5, 0.9)).unwrap();
        assert!(high < low, "higher y should be nearer the top");
    }

    #[test]
    fn fit_keeps_box_corners_inside_margin() {
        let panel = Panel::columns(300, 100, 3)[1];
        let mapping = panel.fit(DVec2::ZERO, DVec2::new(1.0, 0.5));
        for corner in [DVec2::ZERO, DVec2::new(1.0, 0.5), DVec2::new(0.0, 0.5)] {
            let (px, py) = mapping.to_pixel(corner).unwrap();
            assert!((100..200).contains(&px), "x {px} outside middle panel");
            assert!(py < 100);
        }
    }

    #[test]
    fn far_points_map_to_none() {
        let panel = Panel::columns(100, 100, 1)[0];
        let mapping = panel.fit(DVec2::ZERO, DVec2::ONE);
        assert_eq!(mapping.to_pixel(DVec2::splat(50.0)), None);
        assert_eq!(mapping.to_pixel(DVec2::splat(-50.0)), None);
        assert_eq!(mapping.to_pixel(DVec2::splat(f64::NAN)), None);
    }

    #[test]
    fn degenerate_box_does_not_divide_by_zero() {
        let panel = Panel::columns(10, 10, 1)[0];
        let mapping = panel.fit(DVec2::ONE, DVec2::ONE);
        assert_eq!(mapping.to_pixel(DVec2::ONE), Some((5, 5)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn columns_tile_width_without_gaps(
                width in 0_usize..5_000,
                height in 1_usize..2_000,
                count in 1_usize..8,
            ) {
                let panels = Panel::columns(width, height, count);
                prop_assert_eq!(panels.len(), count);
                prop_assert_eq!(panels.iter().map(|p| p.width).sum::<usize>(), width);
                prop_assert_eq!(panels[0].x, 0);
                for pair in panels.windows(2) {
                    prop_assert_eq!(pair[0].x + pair[0].width, pair[1].x);
                }
            }

            #[test]
            fn to_pixel_never_leaves_its_panel(
                width in 1_usize..2_000,
                height in 1_usize..2_000,
                count in 1_usize..4,
                x in -10.0_f64..10.0,
                y in -10.0_f64..10.0,
            ) {
                for panel in Panel::columns(width, height, count) {
                    let mapping = panel.fit(DVec2::ZERO, DVec2::ONE);
                    if let Some((px, py)) = mapping.to_pixel(DVec2::new(x, y)) {
                        prop_assert!(
                            px >= panel.x && px < panel.x + panel.width,
                            "x {px} outside {panel:?}"
                        );
                        prop_assert!(py < panel.height, "y {py} outside {panel:?}");
                    }
                }
            }

            #[test]
            fn unit_box_interior_always_lands_in_panel(
                width in 40_usize..2_000,
                height in 40_usize..2_000,
                x in 0.0_f64..=1.0,
                y in 0.0_f64..=1.0,
            ) {
                let panel = Panel::columns(width, height, 1)[0];
                let mapping = panel.fit(DVec2::ZERO, DVec2::ONE);
                prop_assert!(mapping.to_pixel(DVec2::new(x, y)).is_some());
            }
        }
    }
}
