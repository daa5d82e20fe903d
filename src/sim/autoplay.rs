//! Demo autopilot
//!
//! Throws only when the hit predicted for the end of the throw animation is
//! legal with some room to spare. Used by the headless host; the simulation
//! itself never calls it.

use super::judge::segment_index;
use super::state::{RoundState, ThrowPhase};
use crate::config::RoundConfig;
use crate::{lerp, shortest_between_degrees, wrap_degrees};

/// Degrees of slack kept from wedge edges and from other knives
pub const DEFAULT_MARGIN_DEG: f32 = 4.0;

/// Wheel angle at which a knife thrown this frame would be judged
///
/// Assumes the host keeps a steady `frame_ms` and that no speed re-target
/// fires during the throw.
pub fn predict_impact_angle(state: &RoundState, config: &RoundConfig, frame_ms: f32) -> f32 {
    // The throw tick counts toward the tween; the wheel turns on every tick
    // before the one where the tween completes
    let ticks = (config.throw_speed / frame_ms).ceil().max(1.0) as u32;
    let t = (frame_ms / 1000.0).clamp(0.0, 1.0);

    let mut angle = state.target.angle_deg;
    let mut speed = state.speed.current;
    for _ in 1..ticks {
        angle += speed;
        speed = lerp(speed, state.speed.target, t);
    }
    wrap_degrees(angle)
}

/// Whether throwing right now should stick
pub fn should_throw(
    state: &RoundState,
    config: &RoundConfig,
    frame_ms: f32,
    margin_deg: f32,
) -> bool {
    if state.phase != ThrowPhase::Idle || !state.can_throw {
        return false;
    }
    let Some(knife) = state.active.as_ref() else {
        return false;
    };

    let impact = predict_impact_angle(state, config, frame_ms);
    let segments = config.segment_count();
    let clear_of_edges = [impact - margin_deg, impact, impact + margin_deg]
        .iter()
        .all(|&angle| segment_index(angle, segments) == knife.color_index);
    if !clear_of_edges {
        return false;
    }

    let clearance = config.min_angle + margin_deg;
    state
        .landed
        .iter()
        .all(|other| shortest_between_degrees(impact, other.impact_angle_deg).abs() >= clearance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::sim::state::{LandedKnife, RotationSpeed};
    use crate::sim::{Round, TickInput};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn still_state(angle_deg: f32, color_index: usize) -> (RoundConfig, RoundState) {
        let config = RoundConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = RoundState::new(&config, &mut rng);
        state.speed = RotationSpeed::new(0.0);
        state.target.angle_deg = angle_deg;
        state.active.as_mut().unwrap().color_index = color_index;
        (config, state)
    }

    #[test]
    fn test_prediction_follows_speed() {
        let (config, mut state) = still_state(0.0, 0);
        state.speed = RotationSpeed::new(3.0);
        // 150 ms in 10 ms frames: judged on the 15th tick after 14 rotations
        assert!((predict_impact_angle(&state, &config, 10.0) - 42.0).abs() < 1e-3);
    }

    #[test]
    fn test_throws_on_matching_wedge() {
        let (config, state) = still_state(-90.0, 1);
        assert!(should_throw(&state, &config, FRAME_MS, DEFAULT_MARGIN_DEG));
    }

    #[test]
    fn test_holds_on_wrong_wedge() {
        let (config, state) = still_state(-90.0, 0);
        assert!(!should_throw(&state, &config, FRAME_MS, DEFAULT_MARGIN_DEG));
    }

    #[test]
    fn test_holds_near_wedge_edge() {
        // -150 is the edge between wedges 0 and 1
        let (config, state) = still_state(-148.0, 1);
        assert!(!should_throw(&state, &config, FRAME_MS, DEFAULT_MARGIN_DEG));
    }

    #[test]
    fn test_holds_near_landed_knife() {
        let (config, mut state) = still_state(-90.0, 1);
        state.landed.push(LandedKnife {
            id: 1,
            impact_angle_deg: -84.0,
            angle_deg: 0.0,
            color_index: 1,
            pos: Vec2::ZERO,
        });
        assert!(!should_throw(&state, &config, FRAME_MS, DEFAULT_MARGIN_DEG));
    }

    #[test]
    fn test_autoplay_sticks_knives() {
        let mut round = Round::new(RoundConfig::default(), 2024).unwrap();
        let mut stuck = 0;
        for _ in 0..3600 {
            let throw = should_throw(round.state(), round.config(), FRAME_MS, DEFAULT_MARGIN_DEG);
            for event in round.tick(&TickInput { throw }, FRAME_MS) {
                if matches!(event, crate::sim::RoundEvent::KnifeStuck { .. }) {
                    stuck += 1;
                }
            }
        }
        assert!(stuck > 0);
    }
}
