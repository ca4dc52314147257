pub mod compute_frame_rayon_pool;
pub mod compute_frame_scoped_threads;
pub mod errors;
pub mod factory;
pub mod ports;
pub mod render_stripe;
pub mod report;
