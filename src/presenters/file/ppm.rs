use std::io::Write;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_coord::PixelCoord;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_present_writes_p6_header_and_payload() {
        let pixel_rect =
            PixelRect::new(PixelCoord { x: 0, y: 0 }, PixelCoord { x: 2, y: 1 }).unwrap();
        let buffer = PixelBuffer::new(pixel_rect);
        let presenter = PpmFilePresenter::new();
        let path = std::env::temp_dir().join("fractal_flow_ppm_presenter_test.ppm");

        presenter.present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        let expected_header = b"P6\n3 2\n255\n";
        assert_eq!(written[..expected_header.len()], expected_header[..]);
        assert_eq!(written.len(), expected_header.len() + 18); // 3 * 2 * 3 bytes
        std::fs::remove_file(&path).unwrap();
    }
}
