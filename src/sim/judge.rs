//! Hit judgment
//!
//! A thrown knife sticks only if the wedge under it matches its color and it
//! keeps at least `min_angle` degrees from every knife already in the wheel.

use serde::{Deserialize, Serialize};

use super::state::{LandedKnife, Target};
use crate::shortest_between_degrees;

/// Outcome of a throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Legal hit
    Stuck,
    /// Knife landed on a different color
    WrongColor { segment: usize, expected: usize },
    /// Knife landed too close to an existing one
    TooClose { knife_id: u32, distance_deg: f32 },
}

impl Verdict {
    pub fn is_legal(&self) -> bool {
        matches!(self, Verdict::Stuck)
    }
}

/// Angular width of one color wedge (degrees)
#[inline]
pub fn segment_width(segment_count: usize) -> f32 {
    360.0 / segment_count as f32
}

/// Segment under the throwing position for a wheel rotated by `rotation_deg`
///
/// Segment 0 starts a quarter turn past the bottom of the wheel, and indices
/// grow with the rotation. Boundaries belong to the higher segment. Worked in
/// degrees so whole-degree boundaries are exact.
pub fn segment_index(rotation_deg: f32, segment_count: usize) -> usize {
    debug_assert!(segment_count > 0);
    let slice = segment_width(segment_count);
    let normalized = (rotation_deg - 90.0).rem_euclid(360.0);
    let index = (normalized / slice).floor() as usize;
    // rem_euclid of a tiny negative rounds up to 360
    index.min(segment_count - 1)
}

/// Judge a knife of `color_index` hitting `target` right now
pub fn judge(
    target: &Target,
    color_index: usize,
    landed: &[LandedKnife],
    min_angle: f32,
) -> Verdict {
    let segment = target.segment_index();
    if segment != color_index {
        return Verdict::WrongColor {
            segment,
            expected: color_index,
        };
    }

    landed
        .iter()
        .find_map(|knife| {
            let distance =
                shortest_between_degrees(target.angle_deg, knife.impact_angle_deg).abs();
            (distance < min_angle).then_some(Verdict::TooClose {
                knife_id: knife.id,
                distance_deg: distance,
            })
        })
        .unwrap_or(Verdict::Stuck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn target_at(angle_deg: f32, segment_count: usize) -> Target {
        let mut target = Target::new(Vec2::new(375.0, 333.5), 250.0, segment_count);
        target.angle_deg = angle_deg;
        target
    }

    fn landed_at(id: u32, impact_angle_deg: f32) -> LandedKnife {
        LandedKnife {
            id,
            impact_angle_deg,
            angle_deg: 0.0,
            color_index: 2,
            pos: Vec2::ZERO,
        }
    }

    #[test]
    fn test_segment_index_three_colors() {
        // rotation - 90 = -180 -> 180 degrees -> second wedge
        assert_eq!(segment_index(-90.0, 3), 1);
        // rotation - 90 = 0 -> first wedge
        assert_eq!(segment_index(90.0, 3), 0);
        // rotation - 90 = -47 -> 313 degrees -> third wedge
        assert_eq!(segment_index(43.0, 3), 2);
    }

    #[test]
    fn test_segment_boundary_resolves_to_one_side() {
        // 4 wedges of 90 degrees: rotation 180 puts the normalized angle exactly on 90
        assert_eq!(segment_index(180.0, 4), 1);
        assert_eq!(segment_index(179.9, 4), 0);
        // Just short of a full turn stays in the last wedge
        assert_eq!(segment_index(89.99, 4), 3);
        assert_eq!(segment_index(90.0, 4), 0);
    }

    #[test]
    fn test_segment_width() {
        assert_eq!(segment_width(3), 120.0);
        assert_eq!(segment_width(4), 90.0);
    }

    #[test]
    fn test_wrong_color_rejected() {
        let target = target_at(-90.0, 3);
        assert_eq!(
            judge(&target, 0, &[], 5.0),
            Verdict::WrongColor {
                segment: 1,
                expected: 0
            }
        );
    }

    #[test]
    fn test_matching_color_on_empty_wheel_sticks() {
        let target = target_at(-90.0, 3);
        assert_eq!(judge(&target, 1, &[], 5.0), Verdict::Stuck);
    }

    #[test]
    fn test_too_close_rejected_even_with_matching_color() {
        let target = target_at(43.0, 3);
        let verdict = judge(&target, 2, &[landed_at(1, 40.0)], 5.0);
        match verdict {
            Verdict::TooClose {
                knife_id,
                distance_deg,
            } => {
                assert_eq!(knife_id, 1);
                assert!((distance_deg - 3.0).abs() < 1e-4);
            }
            other => panic!("expected TooClose, got {other:?}"),
        }
    }

    #[test]
    fn test_spacing_at_least_min_angle_sticks() {
        let target = target_at(46.0, 3);
        assert_eq!(judge(&target, 2, &[landed_at(1, 40.0)], 5.0), Verdict::Stuck);
    }

    #[test]
    fn test_spacing_measured_across_wraparound() {
        // 178 and -179 are 3 degrees apart
        let target = target_at(-179.0, 3);
        let segment = target.segment_index();
        let verdict = judge(&target, segment, &[landed_at(4, 178.0)], 5.0);
        assert!(matches!(verdict, Verdict::TooClose { knife_id: 4, .. }));
    }

    #[test]
    fn test_first_violation_reported() {
        let target = target_at(46.0, 3);
        let landed = [landed_at(1, 120.0), landed_at(2, 44.0), landed_at(3, 47.0)];
        assert!(matches!(
            judge(&target, 2, &landed, 5.0),
            Verdict::TooClose { knife_id: 2, .. }
        ));
    }

    proptest! {
        #[test]
        fn prop_segment_index_in_range(angle in -10_000.0f32..10_000.0, n in 2usize..32) {
            prop_assert!(segment_index(angle, n) < n);
        }

        #[test]
        fn prop_segment_index_is_pure(angle in -720.0f32..720.0, n in 2usize..32) {
            prop_assert_eq!(segment_index(angle, n), segment_index(angle, n));
        }
    }
}
