use crate::core::actions::rasterize::ports::paint_surface::PaintSurface;
use crate::core::data::colour::Colour;
use crate::core::data::outline::Outline;
use crate::core::data::pixel_coord::PixelCoord;

/// Strokes the outline path: every boundary segment is walked with a DDA
/// line step and each sampled pixel is painted. Samples that land outside
/// the surface are skipped, so outlines larger than the surface clip cleanly.
pub fn stroke_outline<S: PaintSurface>(
    outline: &Outline,
    colour: Colour,
    surface: &mut S,
) -> Result<(), S::Failure> {
    let rect = surface.pixel_rect();

    for (a, b) in outline.segments() {
        let dx = (b.x - a.x).abs();
        let dy = (b.y - a.y).abs();
        let steps = dx.max(dy).ceil().max(1.0) as u32;

        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            let coord = PixelCoord::from_point(a + (b - a) * t);

            if rect.contains(coord) {
                surface.paint_pixel(coord, colour)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
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

    fn horizontal_bar() -> Outline {
        Outline::from_points(vec![
            Point { x: 1.0, y: 2.0 },
            Point { x: 8.0, y: 2.0 },
            Point { x: 8.0, y: 3.0 },
            Point { x: 1.0, y: 3.0 },
            Point { x: 1.0, y: 2.0 },
        ])
        .unwrap()
    }

    #[test]
    fn test_stroke_paints_every_pixel_on_a_horizontal_edge() {
        let mut buffer = create_buffer(10, 10);

        stroke_outline(&horizontal_bar(), Colour::STROKE, &mut buffer).unwrap();

        for x in 1..=8 {
            assert_eq!(pixel_at(&buffer, x, 2), [0x22, 0x22, 0x22]);
        }
    }

    #[test]
    fn test_stroke_connects_diagonal_segments_without_gaps() {
        let mut buffer = create_buffer(12, 12);
        let diagonal = Outline::from_points(vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 10.0, y: 10.0 },
            Point { x: 0.0, y: 10.0 },
            Point { x: 0.0, y: 0.0 },
        ])
        .unwrap();

        stroke_outline(&diagonal, Colour::STROKE, &mut buffer).unwrap();

        // the main diagonal is sampled at unit steps
        for i in 0..=10 {
            assert_eq!(pixel_at(&buffer, i, i), [0x22, 0x22, 0x22]);
        }
    }

    #[test]
    fn test_stroke_clips_segments_leaving_the_surface() {
        let mut buffer = create_buffer(4, 4);
        let oversized = Outline::from_points(vec![
            Point { x: -20.0, y: 1.0 },
            Point { x: 20.0, y: 1.0 },
            Point { x: 20.0, y: 2.0 },
            Point { x: -20.0, y: 2.0 },
            Point { x: -20.0, y: 1.0 },
        ])
        .unwrap();

        let result = stroke_outline(&oversized, Colour::STROKE, &mut buffer);

        assert!(result.is_ok());
        assert_eq!(pixel_at(&buffer, 0, 1), [0x22, 0x22, 0x22]);
        assert_eq!(pixel_at(&buffer, 3, 1), [0x22, 0x22, 0x22]);
    }

    #[test]
    fn test_stroke_leaves_interior_untouched() {
        let mut buffer = create_buffer(20, 20);
        let square = Outline::from_points(vec![
            Point { x: 2.0, y: 2.0 },
            Point { x: 17.0, y: 2.0 },
            Point { x: 17.0, y: 17.0 },
            Point { x: 2.0, y: 17.0 },
            Point { x: 2.0, y: 2.0 },
        ])
        .unwrap();

        stroke_outline(&square, Colour::STROKE, &mut buffer).unwrap();

        assert_eq!(pixel_at(&buffer, 10, 10), [0, 0, 0]);
    }
}
