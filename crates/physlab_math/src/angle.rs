//! Degree/radian helpers
//!
//! Scenario parameters cross the API boundary in degrees (what the sliders
//! show); all trigonometry happens in radians.

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / std::f32::consts::PI
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_deg(deg: f32) -> f32 {
    let wrapped = deg % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_to_rad() {
        assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((deg_to_rad(90.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_rad_to_deg() {
        assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip() {
        for deg in [0.0, 30.0, 45.0, 120.0, 359.0] {
            assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() < 1e-3);
        }
    }

    #[test]
    fn test_wrap_deg() {
        assert_eq!(wrap_deg(0.0), 0.0);
        assert_eq!(wrap_deg(360.0), 0.0);
        assert_eq!(wrap_deg(450.0), 90.0);
        assert_eq!(wrap_deg(-90.0), 270.0);
    }
}
