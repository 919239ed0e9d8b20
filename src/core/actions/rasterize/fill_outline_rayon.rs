use rayon::prelude::*;

use crate::core::actions::rasterize::ports::paint_surface::PaintSurface;
use crate::core::actions::rasterize::scanline::{scanline_crossings, span_to_pixel_run};
use crate::core::data::colour::Colour;
use crate::core::data::outline::Outline;

/// Row-parallel variant of the sequential fill: crossing computation for
/// every scanline runs on rayon's work-stealing scheduler, then the spans
/// are written back in row order. Produces byte-identical output to
/// `fill_outline`.
pub fn fill_outline_rayon<S: PaintSurface>(
    outline: &Outline,
    colour: Colour,
    surface: &mut S,
) -> Result<(), S::Failure> {
    let rect = surface.pixel_rect();

    let rows: Vec<(i32, Vec<(i32, i32)>)> = (rect.top_left().y..=rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            let crossings = scanline_crossings(outline, f64::from(y) + 0.5);
            let runs = crossings
                .chunks_exact(2)
                .filter_map(|pair| span_to_pixel_run(pair[0], pair[1]))
                .collect();
            (y, runs)
        })
        .collect();

    for (y, runs) in rows {
        for (x_start, x_end) in runs {
            surface.paint_span(y, x_start, x_end, colour)?;
        }
    }

    Ok(())
}
