//! Small interpolation and folding helpers shared by the synthesis layers.

/// Linear interpolation between `a` and `b` by `t` (not clamped).
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Hermite smoothstep of `x` between `edge0` and `edge1`.
/// Clamps outside the edge range; degenerate edges collapse to a step.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Triangle-wave fold: `pingpong(t, l) = l − |t mod 2l − l|`, period `2l`.
///
/// Maps any real `t` into `[0, l]`, alternating up/down ramps. Used to fold
/// noise into repeating ridge/valley and river-channel bands. A non-positive
/// `l` returns 0.
#[inline]
pub fn pingpong(t: f64, l: f64) -> f64 {
    if l <= 0.0 {
        return 0.0;
    }
    l - ((t.rem_euclid(2.0 * l)) - l).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_endpoints() {
        assert_relative_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_relative_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_relative_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn smoothstep_clamps_and_centers() {
        assert_relative_eq!(smoothstep(0.0, 1.0, -2.0), 0.0);
        assert_relative_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert_relative_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    }

    #[test]
    fn pingpong_folds_into_band() {
        // Ramp up over [0, l], back down over [l, 2l], then repeat.
        assert_relative_eq!(pingpong(0.25, 1.0), 0.25);
        assert_relative_eq!(pingpong(1.5, 1.0), 0.5);
        assert_relative_eq!(pingpong(2.25, 1.0), 0.25);
        assert_relative_eq!(pingpong(0.75, 0.5), 0.25);
    }

    #[test]
    fn pingpong_handles_negative_input() {
        // rem_euclid keeps the fold continuous across zero.
        assert_relative_eq!(pingpong(-0.25, 1.0), 0.25);
        assert_relative_eq!(pingpong(-1.5, 1.0), 0.5);
    }

    #[test]
    fn pingpong_degenerate_period_is_zero() {
        assert_eq!(pingpong(3.7, 0.0), 0.0);
        assert_eq!(pingpong(3.7, -1.0), 0.0);
    }
}
