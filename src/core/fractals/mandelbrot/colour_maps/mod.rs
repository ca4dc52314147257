pub mod channel_cycle;
pub mod factory;
pub mod fire_gradient;
pub mod kinds;
