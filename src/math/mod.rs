//! Mathematical utilities: covariance proxy and standard errors.

pub mod covariance;

pub use covariance::*;
