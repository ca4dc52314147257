pub mod colour_map;
pub mod fractal_algorithm;
pub mod frame_compute;
