mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::cli::render::RenderController;
pub use controllers::interactive::depth_control::{
    DepthControl, INITIAL_DEPTH, MAX_DEPTH, MIN_DEPTH,
};
pub use controllers::snowflake::snowflake_controller;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::rasterize::fill_outline::fill_outline;
pub use crate::core::actions::rasterize::fill_outline_rayon::fill_outline_rayon;
pub use crate::core::actions::rasterize::ports::paint_surface::PaintSurface;
pub use crate::core::actions::rasterize::stroke_outline::stroke_outline;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::outline::{Outline, OutlineError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_coord::PixelCoord;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::koch::algorithm::{generate_snowflake, snowflake_point_count};
pub use crate::core::fractals::koch::errors::KochError;
pub use crate::core::fractals::koch::params::KochParams;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
