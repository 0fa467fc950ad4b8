// Easing
// Timing curves for animated strip transitions

/// CSS `ease-in-out`, i.e. cubic-bezier(0.42, 0, 0.58, 1).
///
/// `t` is the elapsed fraction of the transition; the result is the
/// progressed fraction. Inputs outside [0, 1] are clamped.
pub fn ease_in_out(t: f32) -> f32 {
    const X1: f32 = 0.42;
    const X2: f32 = 0.58;

    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    // Solve x(s) = t for the curve parameter s, then evaluate y(s)
    let mut s = t;
    for _ in 0..8 {
        let x = bezier(s, X1, X2) - t;
        let dx = bezier_slope(s, X1, X2);
        if dx.abs() < 1e-6 {
            break;
        }
        s = (s - x / dx).clamp(0.0, 1.0);
    }

    // y control points are (0, 1), so y(s) is the bezier with p1=0, p2=1
    bezier(s, 0.0, 1.0)
}

fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Linear interpolation between two offsets
pub fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    from + (to - from) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn test_symmetric_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_slow_start_and_monotonic() {
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);

        let mut last = 0.0;
        for step in 1..=20 {
            let value = ease_in_out(step as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(-100.0, -300.0, 0.5), -200.0);
    }
}
