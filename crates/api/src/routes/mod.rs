pub mod health;
pub mod metrics;
pub mod ph_levels;
