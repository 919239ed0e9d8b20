pub mod depth_control;
