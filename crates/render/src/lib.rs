#![deny(unsafe_code)]
//! Rendering of chaos-game point sets to images, plus image and parameter
//! log output.
//!
//! This crate sits between `sierpinski-core` (which generates points) and
//! the CLI. It owns the presentation concerns: panel layout, the 3D view,
//! rasterization, PNG encoding and where output files land on disk.

pub mod layout;
pub mod output;
pub mod projection;
pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use log::debug;
use sierpinski_core::{generate_with, FractalError, RandomSource, RunParams, Shape};

use crate::layout::Panel;
use crate::projection::View;
use crate::raster::Raster;

pub use output::OutputDirs;

/// Generates and draws every shape in `params.selection` into a new raster.
///
/// Shapes are laid out left to right in equal panels on the background
/// color; each generated point lights one pixel in the point color. All
/// randomness comes from `rng`.
pub fn render<R: RandomSource>(params: &RunParams, rng: &mut R) -> Result<Raster, FractalError> {
    params.validate()?;
    let mut raster = Raster::new(params.width, params.height, params.bg_color)?;
    let shapes = params.selection.shapes();
    let panels = Panel::columns(params.width, params.height, shapes.len());
    let view = View::default();
    let color = params.point_color.to_rgb8();

    for (shape, panel) in shapes.into_iter().zip(panels) {
        let plotted = draw_shape(&mut raster, shape, params.points, &panel, &view, color, rng)?;
        debug!(
            "{shape}: plotted {plotted} of {} points into {}x{} panel at x={}",
            shape.output_len(params.points),
            panel.width,
            panel.height,
            panel.x
        );
    }
    Ok(raster)
}

/// Draws one shape into `panel`, returning how many points landed on a pixel.
fn draw_shape<R: RandomSource>(
    raster: &mut Raster,
    shape: Shape,
    count: usize,
    panel: &Panel,
    view: &View,
    color: [u8; 3],
    rng: &mut R,
) -> Result<usize, FractalError> {
    let points = generate_with(shape, count, rng)?;
    let (min, max) = view.bounds(shape);
    let mapping = panel.fit(min, max);
    let mut plotted = 0;
    for p in view.project_points(&points) {
        if let Some((x, y)) = mapping.to_pixel(p) {
            raster.put(x, y, color);
            plotted += 1;
        }
    }
    Ok(plotted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinski_core::{Selection, Srgb, Xorshift64};

    fn params(selection: Selection) -> RunParams {
        RunParams {
            selection,
            points: 2_000,
            point_color: Srgb::BLACK,
            bg_color: Srgb::WHITE,
            width: 300,
            height: 120,
        }
    }

    #[test]
    fn render_produces_requested_size() {
        let raster = render(&params(Selection::All), &mut Xorshift64::new(1)).unwrap();
        assert_eq!(raster.width(), 300);
        assert_eq!(raster.height(), 120);
    }

    #[test]
    fn render_draws_points_in_point_color() {
        let raster = render(
            &params(Selection::Single(Shape::Triangle)),
            &mut Xorshift64::new(2),
        )
        .unwrap();
        let lit = raster.count([0, 0, 0]);
        assert!(lit > 100, "only {lit} pixels lit");
        assert!(lit < 300 * 120);
    }

    #[test]
    fn render_all_uses_every_panel() {
        let raster = render(&params(Selection::All), &mut Xorshift64::new(3)).unwrap();
        for panel in Panel::columns(300, 120, 3) {
            let lit = (panel.x..panel.x + panel.width)
                .flat_map(|x| (0..120).map(move |y| (x, y)))
                .filter(|&(x, y)| raster.get(x, y) == Some([0, 0, 0]))
                .count();
            assert!(lit > 50, "panel at x={} has only {lit} lit pixels", panel.x);
        }
    }

    #[test]
    fn render_single_leaves_margins_blank() {
        let raster = render(
            &params(Selection::Single(Shape::Diamond)),
            &mut Xorshift64::new(4),
        )
        .unwrap();
        for x in 0..300 {
            assert_eq!(raster.get(x, 0), Some([255, 255, 255]), "top row lit at {x}");
            assert_eq!(raster.get(x, 119), Some([255, 255, 255]), "bottom row lit at {x}");
        }
    }

    #[test]
    fn render_is_deterministic_for_a_seed() {
        let p = params(Selection::All);
        let a = render(&p, &mut Xorshift64::new(5)).unwrap();
        let b = render(&p, &mut Xorshift64::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_rejects_invalid_params() {
        let mut p = params(Selection::All);
        p.points = 0;
        assert!(matches!(
            render(&p, &mut Xorshift64::new(6)),
            Err(FractalError::InvalidPointCount)
        ));
        p.points = 10;
        p.height = 0;
        assert!(matches!(
            render(&p, &mut Xorshift64::new(6)),
            Err(FractalError::InvalidDimensions)
        ));
    }

    #[test]
    fn narrow_image_with_three_panels_still_renders() {
        let mut p = params(Selection::All);
        p.width = 2;
        p.height = 2;
        let raster = render(&p, &mut Xorshift64::new(7)).unwrap();
        assert_eq!(raster.data().len(), 2 * 2 * 3);
    }
}
