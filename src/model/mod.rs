//! The affine hyperplane model.

pub mod plane;

pub use plane::*;
