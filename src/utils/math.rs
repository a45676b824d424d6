//! # Game Mathematics
//!
//! Mathematical utility functions for game calculations.

use rand::Rng;

/// Unit vector `(dx, dy)` for a ray cast at `degrees`.
///
/// Angles grow clockwise on screen because `y` points down the grid.
///
/// # Examples
///
/// ```
/// use delve::ray_direction;
///
/// let (dx, dy) = ray_direction(90);
/// assert!(dx.abs() < 1e-9);
/// assert!((dy - 1.0).abs() < 1e-9);
/// ```
pub fn ray_direction(degrees: u32) -> (f64, f64) {
    let (sin, cos) = (degrees as f64).to_radians().sin_cos();
    (cos, sin)
}

/// Rolls an integer uniformly from `min..=max`.
///
/// An inverted range collapses to `min` instead of panicking.
pub fn roll<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..=max)
    }
}
