pub mod compute_frame;
pub mod zoom_viewport;
