//! Pure geometry behind the painter: corner clamping, text centering and quad rotation.

use sigil_engine::coords::{Rect, Vec2};

/// Clamps a corner-bracket arm so the two arms of one corner never reach the
/// neighbouring corner: the result is at most half the width and half the height.
#[inline]
pub fn clamp_corner_len(rect: Rect, len: f32) -> f32 {
    len.min(rect.size.x * 0.5).min(rect.size.y * 0.5)
}

/// Top-left origin that centers a block of `content` size inside `rect`.
#[inline]
pub fn centered_origin(rect: Rect, content: Vec2) -> Vec2 {
    rect.origin + (rect.size - content) / 2.0
}

/// Rotates `p` about `center` by `angle` radians.
///
/// Positive angles turn clockwise on screen because +Y points down.
#[inline]
pub fn rotate_about(p: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    let d = p - center;
    center + Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c)
}

/// Corners of `rect` (top-left, top-right, bottom-right, bottom-left) rotated about
/// its center.
pub fn rotated_corners(rect: Rect, angle: f32) -> [Vec2; 4] {
    let center = rect.center();
    rect.corners().map(|p| rotate_about(p, center, angle))
}

/// Twice the signed area of a polygon; the sign gives the winding.
pub fn signed_area2(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n).map(|i| points[i].perp_dot(points[(i + 1) % n])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < EPS
    }

    fn pairwise(points: &[Vec2; 4]) -> [f32; 6] {
        let p = points;
        [
            p[0].distance(p[1]),
            p[0].distance(p[2]),
            p[0].distance(p[3]),
            p[1].distance(p[2]),
            p[1].distance(p[3]),
            p[2].distance(p[3]),
        ]
    }

    const ANGLES: [f32; 5] = [0.0, FRAC_PI_6, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];

    // ── corner clamp ──────────────────────────────────────────────────────

    #[test]
    fn corner_len_kept_when_small() {
        assert_eq!(clamp_corner_len(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0), 10.0);
    }

    #[test]
    fn corner_len_clamped_to_half_of_short_side() {
        assert_eq!(clamp_corner_len(Rect::new(0.0, 0.0, 100.0, 12.0), 10.0), 6.0);
        assert_eq!(clamp_corner_len(Rect::new(0.0, 0.0, 7.0, 100.0), 10.0), 3.5);
    }

    #[test]
    fn corner_len_never_exceeds_half_extent() {
        for w in [0.5f32, 1.0, 3.0, 19.0, 20.0, 21.0, 250.0] {
            for h in [0.5f32, 2.0, 9.0, 40.0, 1000.0] {
                for len in [0.0f32, 1.0, 10.0, 500.0] {
                    let used = clamp_corner_len(Rect::new(3.0, -4.0, w, h), len);
                    assert!(used <= len);
                    assert!(used <= w.min(h) / 2.0, "w={w} h={h} len={len} used={used}");
                }
            }
        }
    }

    // ── centering ─────────────────────────────────────────────────────────

    #[test]
    fn centered_origin_splits_slack_evenly() {
        let o = centered_origin(Rect::new(0.0, 0.0, 100.0, 20.0), Vec2::new(40.0, 10.0));
        assert_eq!(o, Vec2::new(30.0, 5.0));
    }

    #[test]
    fn oversized_content_overhangs_both_sides() {
        let o = centered_origin(Rect::new(10.0, 10.0, 20.0, 20.0), Vec2::new(40.0, 20.0));
        assert_eq!(o, Vec2::new(0.0, 10.0));
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn zero_angle_is_identity() {
        let rect = Rect::new(12.0, 7.0, 30.0, 18.0);
        let rotated = rotated_corners(rect, 0.0);
        for (r, c) in rotated.iter().zip(rect.corners()) {
            assert!(close(*r, c), "{r:?} != {c:?}");
        }
    }

    #[test]
    fn quarter_turn_moves_top_left_to_top_right() {
        let rect = Rect::new(0.0, 0.0, 2.0, 2.0);
        let rotated = rotated_corners(rect, FRAC_PI_2);
        assert!(close(rotated[0], Vec2::new(2.0, 0.0)));
        assert!(close(rotated[1], Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn rotation_is_rigid() {
        let rect = Rect::new(5.0, 5.0, 1.0, 1.0);
        let reference = pairwise(&rect.corners());
        for angle in ANGLES {
            let d = pairwise(&rotated_corners(rect, angle));
            for (a, b) in d.iter().zip(reference) {
                assert!((a - b).abs() < EPS, "angle {angle}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn rotation_preserves_area_and_center() {
        let rect = Rect::new(-3.0, 8.0, 40.0, 10.0);
        let area = signed_area2(&rect.corners());
        for angle in ANGLES {
            let rotated = rotated_corners(rect, angle);
            assert!((signed_area2(&rotated) - area).abs() < 1e-2);
            let centroid = rotated.iter().fold(Vec2::zero(), |acc, p| acc + *p) / 4.0;
            assert!(close(centroid, rect.center()));
        }
    }

    #[test]
    fn rotation_preserves_winding() {
        let rect = Rect::new(0.0, 0.0, 64.0, 32.0);
        let before = signed_area2(&rect.corners()).signum();
        assert!(before > 0.0);
        for angle in ANGLES.into_iter().chain([-1.0, 2.5, 10.0]) {
            assert_eq!(signed_area2(&rotated_corners(rect, angle)).signum(), before);
        }
    }
}
