//! Pixel-to-time conversion and grid snapping.
//!
//! Pure helpers shared by the gesture engine. The UI layer hands the core
//! raw vertical pixel deltas; everything downstream works in seconds.

/// Convert a vertical pixel delta to a time delta in seconds, given how many
/// pixels one hour occupies on screen.
pub fn pixels_to_seconds(delta_pixels: f64, hour_height_pixels: f64) -> f64 {
    delta_pixels / hour_height_pixels * 3600.0
}

/// Round `seconds` to the nearest multiple of `increment`.
///
/// `increment` must be positive; any grid size is supported.
pub fn snap(seconds: f64, increment: i64) -> i64 {
    debug_assert!(increment > 0, "snap increment must be positive");
    (seconds / increment as f64).round() as i64 * increment
}

/// Snap with an increment chosen by drag velocity: deliberate slow drags get
/// fine-grained control, fast flicks land on the coarse grid.
pub fn snap_velocity_aware(
    seconds: f64,
    slow_increment: i64,
    fast_increment: i64,
    velocity: f64,
    threshold: f64,
) -> i64 {
    let increment = if velocity.abs() < threshold {
        slow_increment
    } else {
        fast_increment
    };
    snap(seconds, increment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_to_seconds() {
        // 60px per hour: one pixel is one minute
        assert_eq!(pixels_to_seconds(1.0, 60.0), 60.0);
        assert_eq!(pixels_to_seconds(30.0, 60.0), 1800.0);
        assert_eq!(pixels_to_seconds(-15.0, 60.0), -900.0);
        // 80px per hour
        assert_eq!(pixels_to_seconds(40.0, 80.0), 1800.0);
    }

    #[test]
    fn test_snap_rounds_to_nearest() {
        assert_eq!(snap(449.0, 300), 300);
        assert_eq!(snap(450.0, 300), 600);
        assert_eq!(snap(-449.0, 300), -300);
        assert_eq!(snap(0.0, 300), 0);
        assert_eq!(snap(899.0, 900), 900);
    }

    #[test]
    fn test_snap_idempotent() {
        for increment in [60, 300, 600, 900] {
            for x in [-7_241.0, 0.0, 123.0, 35_999.0, 86_399.0] {
                let once = snap(x, increment);
                assert_eq!(snap(once as f64, increment), once);
            }
        }
    }

    #[test]
    fn test_snap_velocity_aware_picks_increment() {
        // Slow drag: 1-minute precision
        assert_eq!(snap_velocity_aware(1_234.0, 60, 900, 10.0, 50.0), 1_260);
        // Fast flick: coarse grid
        assert_eq!(snap_velocity_aware(1_234.0, 60, 900, 120.0, 50.0), 900);
        // Negative velocity compares by magnitude
        assert_eq!(snap_velocity_aware(1_234.0, 60, 900, -120.0, 50.0), 900);
    }
}
