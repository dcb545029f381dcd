//! Parametric heart curve

use heartlock_core::{Vec2, Viewport};

/// Point on the heart curve at parameter `t`, centered in `viewport`
///
/// y is negated because surface y grows downward.
pub fn heart_point(t: f32, scale: f32, viewport: Viewport) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    viewport.center() + Vec2::new(x * scale, -y * scale)
}

/// Curve scale so the heart fits the shorter viewport side
pub fn heart_scale(viewport: Viewport, divisor: f32) -> f32 {
    viewport.min_dimension() / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const VP: Viewport = Viewport::new(1000.0, 800.0);

    #[test]
    fn phase_zero_is_on_symmetry_axis() {
        let p = heart_point(0.0, 20.0, VP);
        assert!((p.x - 500.0).abs() < 1e-4);
        // 13 - 5 - 2 - 1 = 5 units above center
        assert!((p.y - (400.0 - 5.0 * 20.0)).abs() < 1e-3);
    }

    #[test]
    fn quarter_phase_is_right_lobe_top() {
        let p = heart_point(FRAC_PI_2, 20.0, VP);
        assert!((p.x - (500.0 + 16.0 * 20.0)).abs() < 1e-3);
        // cos terms: 0 - 5(-1) - 2(0) - 1 = 4 → above center
        assert!((p.y - (400.0 - 4.0 * 20.0)).abs() < 1e-3);
    }

    #[test]
    fn half_phase_is_bottom_tip() {
        let p = heart_point(PI, 10.0, VP);
        assert!((p.x - 500.0).abs() < 1e-3);
        // -13 - 5 + 2 - 1 = -17 → below center
        assert!((p.y - (400.0 + 17.0 * 10.0)).abs() < 1e-3);
    }

    #[test]
    fn curve_is_mirror_symmetric() {
        for i in 1..16 {
            let t = i as f32 * 0.2;
            let a = heart_point(t, 12.0, VP);
            let b = heart_point(TAU - t, 12.0, VP);
            assert!((a.x - 500.0 + (b.x - 500.0)).abs() < 1e-2);
            assert!((a.y - b.y).abs() < 1e-2);
        }
    }

    #[test]
    fn scale_tracks_shorter_side() {
        assert!((heart_scale(Viewport::new(1600.0, 800.0), 40.0) - 20.0).abs() < 1e-6);
        assert!((heart_scale(Viewport::new(400.0, 900.0), 40.0) - 10.0).abs() < 1e-6);
    }
}
