//! Geometric utility functions for distance calculations and boundary clamping.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

/// Euclidean distance between two 2D positions.
pub fn distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let p = Point::new(a[0], a[1]);
    let q = Point::new(b[0], b[1]);
    Euclidean.distance(p, q)
}

/// Clamps a position so that a square of side `size` centred on it stays
/// inside a `width` x `height` box.
///
/// # Arguments
///
/// * `v` - Mutable position vector to clamp
/// * `size` - Side length of the entity's body
/// * `width` - Width of the arena
/// * `height` - Height of the arena
///
/// An axis narrower than the body pins the position to its centre.
pub fn clamp_into_mut(v: &mut Array1<f64>, size: f64, width: f64, height: f64) {
    v[0] = clamp_axis(v[0], size / 2.0, width);
    v[1] = clamp_axis(v[1], size / 2.0, height);
}

fn clamp_axis(x: f64, half: f64, extent: f64) -> f64 {
    if extent < 2.0 * half {
        return extent / 2.0;
    }
    x.clamp(half, extent - half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Array1::from_vec(vec![0.0, 0.0]);
        let b = Array1::from_vec(vec![3.0, 4.0]);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_keeps_half_size_margin() {
        let mut v = Array1::from_vec(vec![-20.0, 900.0]);
        clamp_into_mut(&mut v, 10.0, 800.0, 600.0);
        assert_eq!(v[0], 5.0);
        assert_eq!(v[1], 595.0);
    }

    #[test]
    fn clamp_centres_body_in_narrow_arena() {
        let mut v = Array1::from_vec(vec![3.0, 40.0]);
        clamp_into_mut(&mut v, 15.0, 12.0, 600.0);
        assert_eq!(v[0], 6.0);
        assert_eq!(v[1], 40.0);
    }
}
