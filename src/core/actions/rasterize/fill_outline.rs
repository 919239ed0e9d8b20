use crate::core::actions::rasterize::ports::paint_surface::PaintSurface;
use crate::core::actions::rasterize::scanline::{scanline_crossings, span_to_pixel_run};
use crate::core::data::colour::Colour;
use crate::core::data::outline::Outline;

/// Fills the interior of a closed outline row by row with the even-odd rule.
///
/// Scanlines are sampled at pixel centers (y + 0.5), so rows tangent to a
/// vertex fill deterministically.
pub fn fill_outline<S: PaintSurface>(
    outline: &Outline,
    colour: Colour,
    surface: &mut S,
) -> Result<(), S::Failure> {
    let rect = surface.pixel_rect();

    for y in rect.top_left().y..=rect.bottom_right().y {
        let crossings = scanline_crossings(outline, f64::from(y) + 0.5);

        for pair in crossings.chunks_exact(2) {
            if let Some((x_start, x_end)) = span_to_pixel_run(pair[0], pair[1]) {
                surface.paint_span(y, x_start, x_end, colour)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::pixel_coord::PixelCoord;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    fn create_buffer(width: i32, height: i32) -> PixelBuffer {
        PixelBuffer::new(
            PixelRect::new(
                PixelCoord { x: 0, y: 0 },
                PixelCoord {
                    x: width - 1,
                    y: height - 1,
                },
            )
            .unwrap(),
        )
    }

    fn pixel_at(buffer: &PixelBuffer, x: usize, y: usize) -> [u8; 3] {
        let width = buffer.pixel_rect().width() as usize;
        let index = (y * width + x) * 3;
        [
            buffer.buffer()[index],
            buffer.buffer()[index + 1],
            buffer.buffer()[index + 2],
        ]
    }

    fn centered_square(low: f64, high: f64) -> Outline {
        Outline::from_points(vec![
            Point { x: low, y: low },
            Point { x: high, y: low },
            Point { x: high, y: high },
            Point { x: low, y: high },
            Point { x: low, y: low },
        ])
        .unwrap()
    }

    #[test]
    fn test_fill_paints_interior_pixels() {
        let mut buffer = create_buffer(10, 10);
        let square = centered_square(2.0, 8.0);

        fill_outline(&square, Colour::SNOW, &mut buffer).unwrap();

        assert_eq!(pixel_at(&buffer, 5, 5), [255, 255, 255]);
        assert_eq!(pixel_at(&buffer, 2, 2), [255, 255, 255]);
    }

    #[test]
    fn test_fill_leaves_exterior_untouched() {
        let mut buffer = create_buffer(10, 10);
        let square = centered_square(2.0, 8.0);

        fill_outline(&square, Colour::SNOW, &mut buffer).unwrap();

        assert_eq!(pixel_at(&buffer, 0, 0), [0, 0, 0]);
        assert_eq!(pixel_at(&buffer, 9, 5), [0, 0, 0]);
        assert_eq!(pixel_at(&buffer, 5, 9), [0, 0, 0]);
    }

    #[test]
    fn test_fill_outline_larger_than_surface_is_clipped() {
        let mut buffer = create_buffer(4, 4);
        let square = centered_square(-100.0, 100.0);

        fill_outline(&square, Colour::SNOW, &mut buffer).unwrap();

        assert!(buffer.buffer().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_fill_outline_entirely_outside_paints_nothing() {
        let mut buffer = create_buffer(4, 4);
        let square = centered_square(50.0, 60.0);

        fill_outline(&square, Colour::SNOW, &mut buffer).unwrap();

        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }
}
