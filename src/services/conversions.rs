//! Closed-form conversions between planetary measurements.

use std::f64::consts::PI;

/// Radius of a sphere from its surface area, inverting `A = 4πr²`.
///
/// Units are preserved: square miles in, miles out.
pub fn radius_from_surface_area(area: f64) -> f64 {
    (area / (4.0 * PI)).sqrt()
}

/// Round to 4 fractional decimal digits.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Convert an angle from degrees to radians. No rounding applied.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_sphere_radius() {
        // A sphere of area 4π has radius exactly 1.
        let radius = radius_from_surface_area(4.0 * PI);
        assert!((radius - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_earth_radius_from_surface_area() {
        // Earth: ~196.9 million sq miles -> ~3958.8 mile radius.
        let radius = radius_from_surface_area(196_900_000.0);
        assert!((radius - 3958.8).abs() < 1.0);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(1.000_04), 1.0);
        assert_eq!(round4(1.000_06), 1.0001);
        assert_eq!(round4(3958.755_49), 3958.7555);
        assert_eq!(round4(-2.718_281_8), -2.7183);
    }

    #[test]
    fn test_degrees_to_radians_half_turn() {
        assert_eq!(degrees_to_radians(180.0), PI);
    }

    #[test]
    fn test_degrees_to_radians_keeps_full_precision() {
        // f64::to_radians applies the same π/180 factor, so the results
        // must agree to the last bit.
        assert_eq!(degrees_to_radians(23.44), 23.44_f64.to_radians());
        assert!((degrees_to_radians(23.44) - 0.409_105_176_667_470_87).abs() < 1e-15);
    }

    #[test]
    fn test_degrees_to_radians_zero() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }
}
