//! # Utilities Module
//!
//! Small numeric helpers shared by generation and visibility.

pub mod math;

pub use math::*;
