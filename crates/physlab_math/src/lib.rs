//! Plane Mathematics Library
//!
//! This crate provides the small 2D math vocabulary shared by the physlab
//! scenario crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//!
//! ## Helpers
//!
//! - [`angle`] - degree/radian conversions and angle normalization

mod vec2;
pub mod angle;

pub use vec2::Vec2;
pub use angle::{deg_to_rad, rad_to_deg, wrap_deg};
