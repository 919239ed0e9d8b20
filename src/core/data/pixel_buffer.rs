use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_coord::PixelCoord;
use crate::core::data::pixel_rect::PixelRect;

fn rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    (pixel_rect.width() * pixel_rect.height() * 3) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        coord: PixelCoord,
        pixel_rect: PixelRect,
    },
    RowOutsideBounds {
        y: i32,
        pixel_rect: PixelRect,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { coord, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of rect top:{}, left:{}, bottom:{}, right:{}",
                    coord.x,
                    coord.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
            Self::RowOutsideBounds { y, pixel_rect } => {
                write!(
                    f,
                    "row y:{} outside of rect top:{}, bottom:{}",
                    y,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Packed RGB framebuffer covering a [`PixelRect`], 3 bytes per pixel, row major.
#[derive(Debug)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; rect_to_buffer_size(pixel_rect)],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Floods the whole buffer with one colour.
    pub fn clear(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(3) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    pub fn set_pixel(&mut self, coord: PixelCoord, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.pixel_rect.contains(coord) {
            return Err(PixelBufferError::PixelOutsideBounds {
                coord,
                pixel_rect: self.pixel_rect,
            });
        }

        let index = self.byte_index(coord);
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Writes a horizontal run of pixels on row `y`, from `x_start` to `x_end`
    /// inclusive. The run is clipped to the rect horizontally; the row itself
    /// must be in bounds.
    pub fn set_row_span(
        &mut self,
        y: i32,
        x_start: i32,
        x_end: i32,
        colour: Colour,
    ) -> Result<(), PixelBufferError> {
        if y < self.pixel_rect.top_left().y || y > self.pixel_rect.bottom_right().y {
            return Err(PixelBufferError::RowOutsideBounds {
                y,
                pixel_rect: self.pixel_rect,
            });
        }

        let from = x_start.max(self.pixel_rect.top_left().x);
        let to = x_end.min(self.pixel_rect.bottom_right().x);

        for x in from..=to {
            let index = self.byte_index(PixelCoord { x, y });
            self.buffer[index] = colour.r;
            self.buffer[index + 1] = colour.g;
            self.buffer[index + 2] = colour.b;
        }

        Ok(())
    }

    fn byte_index(&self, coord: PixelCoord) -> usize {
        let relative_x = (coord.x - self.pixel_rect.top_left().x) as u32;
        let relative_y = (coord.y - self.pixel_rect.top_left().y) as u32;
        ((relative_y * self.pixel_rect.width() + relative_x) * 3) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            PixelCoord { x: 0, y: 0 },
            PixelCoord {
                x: width - 1,
                y: height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);

        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_floods_every_pixel() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 3));

        buffer.clear(Colour::SURFACE);

        for pixel in buffer.buffer().chunks_exact(3) {
            assert_eq!(pixel, [0xe3, 0xf2, 0xfd]);
        }
    }

    #[test]
    fn test_set_pixel_valid() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 3));

        let result = buffer.set_pixel(PixelCoord { x: 1, y: 1 }, Colour { r: 255, g: 0, b: 0 });

        assert!(result.is_ok());
        assert_eq!(&buffer.buffer()[12..15], [255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let result = buffer.set_pixel(PixelCoord { x: 5, y: 1 }, Colour::STROKE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                coord: PixelCoord { x: 5, y: 1 },
                pixel_rect
            })
        );
    }

    #[test]
    fn test_set_row_span_fills_inclusive_run() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(5, 2));

        buffer
            .set_row_span(1, 1, 3, Colour { r: 9, g: 9, b: 9 })
            .unwrap();

        let row: Vec<u8> = buffer.buffer()[15..30].to_vec();
        assert_eq!(row, vec![0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0]);
    }

    #[test]
    fn test_set_row_span_clips_horizontally() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 2));

        buffer
            .set_row_span(0, -10, 10, Colour { r: 1, g: 2, b: 3 })
            .unwrap();

        assert_eq!(&buffer.buffer()[0..9], [1, 2, 3, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_set_row_span_rejects_row_outside_rect() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let result = buffer.set_row_span(7, 0, 2, Colour::SNOW);

        assert_eq!(
            result,
            Err(PixelBufferError::RowOutsideBounds { y: 7, pixel_rect })
        );
    }

    #[test]
    fn test_set_row_span_empty_after_clipping_is_noop() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 2));

        buffer.set_row_span(0, 10, 20, Colour::SNOW).unwrap();

        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }
}
