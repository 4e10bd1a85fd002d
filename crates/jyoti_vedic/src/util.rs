//! Shared utility functions for sidereal calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed shortest arc from `a` to `b` in degrees, in (-180, 180].
pub fn arc_delta(a: f64, b: f64) -> f64 {
    let mut d = (b - a) % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_identity() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps_full_turn() {
        assert!(normalize_360(360.0).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn arc_delta_short_way() {
        assert!((arc_delta(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((arc_delta(10.0, 350.0) + 20.0).abs() < 1e-12);
        assert!(arc_delta(90.0, 90.0).abs() < 1e-15);
    }
}
