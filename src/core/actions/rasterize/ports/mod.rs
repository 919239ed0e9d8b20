pub mod paint_surface;
