use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize::fill_outline_rayon::fill_outline_rayon;
use crate::core::actions::rasterize::stroke_outline::stroke_outline;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_coord::PixelCoord;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::koch::params::KochParams;

const SNAPSHOT_WIDTH: i32 = 420;
const SNAPSHOT_HEIGHT: i32 = 420;
const SNAPSHOT_MARGIN: f64 = 32.0;

/// CLI render controller with an injectable file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn render(&mut self, depth: u32) -> Result<(), Box<dyn std::error::Error>> {
        let pixel_rect = PixelRect::new(
            PixelCoord { x: 0, y: 0 },
            PixelCoord {
                x: SNAPSHOT_WIDTH - 1,
                y: SNAPSHOT_HEIGHT - 1,
            },
        )?;
        let center = Point {
            x: f64::from(SNAPSHOT_WIDTH) / 2.0,
            y: f64::from(SNAPSHOT_HEIGHT) / 2.0,
        };
        let radius = f64::from(SNAPSHOT_WIDTH.min(SNAPSHOT_HEIGHT)) / 2.0 - SNAPSHOT_MARGIN;
        let params = KochParams::new(center, radius, depth)?;

        println!("Rendering {}...", params.display_name());
        println!("Image size: {}x{}", SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);
        println!("Recursion depth: {}", depth);

        let start = Instant::now();
        let outline = params.generate()?;
        let duration = start.elapsed();

        println!("Points:     {}", outline.len());
        println!("Duration:   {:?}", duration);

        let mut buffer = PixelBuffer::new(pixel_rect);
        buffer.clear(Colour::SURFACE);
        fill_outline_rayon(&outline, Colour::SNOW, &mut buffer)?;
        stroke_outline(&outline, Colour::STROKE, &mut buffer)?;

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
