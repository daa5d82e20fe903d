//! Per-frame round update
//!
//! Order within a tick follows the host engine: input, the speed re-target
//! timer, running tweens (and their completion transitions), then the wheel
//! and the knives stuck in it.

use glam::Vec2;
use rand::Rng;

use super::judge::{Verdict, judge};
use super::state::{FallingKnife, LandedKnife, RotationSpeed, RoundEvent, RoundState, ThrowPhase};
use super::tween::{Tween, TweenKind};
use crate::config::RoundConfig;
use crate::consts::FALL_ROTATION;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary action (click/tap/space): throw the active knife
    pub throw: bool,
}

/// What the host has to do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The missed knife left the field, the round must be reinitialized
    RoundOver { knives_stuck: u32 },
}

/// Advance the round by one frame of `dt` ms
pub fn tick<R: Rng + ?Sized>(
    state: &mut RoundState,
    config: &RoundConfig,
    rng: &mut R,
    input: &TickInput,
    dt: f32,
    events: &mut Vec<RoundEvent>,
) -> TickOutcome {
    if input.throw {
        throw_knife(state, config, events);
    }

    // Periodic speed re-target, at most once per tick; the carried remainder
    // never exceeds one interval
    state.change_elapsed += dt;
    if state.change_elapsed >= config.change_time {
        state.change_elapsed =
            (state.change_elapsed - config.change_time).clamp(0.0, config.change_time);
        let target = change_speed(&mut state.speed, config, rng);
        log::debug!("Rotation speed re-targeted to {target:.2}");
        events.push(RoundEvent::SpeedChanged { target });
    }

    // Fall first, so a fall started this tick only begins moving next tick
    let mut finished = Vec::new();
    if let Some(falling) = state.falling.as_mut() {
        if falling.tween.advance(dt) {
            finished.push(falling.tween.kind);
        }
        falling.pos = falling.tween.position();
        falling.rotation = falling.tween.rotation();
    }
    if let Some(knife) = state.active.as_mut() {
        if let Some(tween) = knife.tween.as_mut() {
            let done = tween.advance(dt);
            knife.pos = tween.position();
            knife.rotation = tween.rotation();
            if done {
                finished.push(tween.kind);
                knife.tween = None;
            }
        }
    }
    for kind in finished {
        if let TickOutcome::RoundOver { knives_stuck } =
            complete_tween(state, config, rng, kind, events)
        {
            return TickOutcome::RoundOver { knives_stuck };
        }
    }

    // Angle advances per frame, speed eases per elapsed time
    let speed = state.speed.current;
    state.target.rotate(speed);
    for knife in &mut state.landed {
        knife.orbit(speed, &state.target);
    }
    state.speed.interpolate(dt);

    TickOutcome::Continue
}

/// Start a throw if one is allowed, returns whether it started
pub fn throw_knife(
    state: &mut RoundState,
    config: &RoundConfig,
    events: &mut Vec<RoundEvent>,
) -> bool {
    if !state.can_throw {
        return false;
    }
    let Some(knife) = state.active.as_mut() else {
        return false;
    };

    state.can_throw = false;
    state.phase = ThrowPhase::InFlight;

    let landing = Vec2::new(knife.pos.x, state.target.bottom_edge_y());
    knife.tween = Some(Tween::movement(
        TweenKind::Throw,
        knife.pos,
        landing,
        config.throw_speed,
    ));

    log::debug!("Knife thrown (color {})", knife.color_index);
    events.push(RoundEvent::KnifeThrown {
        color_index: knife.color_index,
    });
    true
}

/// Run the transition tagged on a finished tween
pub fn complete_tween<R: Rng + ?Sized>(
    state: &mut RoundState,
    config: &RoundConfig,
    rng: &mut R,
    kind: TweenKind,
    events: &mut Vec<RoundEvent>,
) -> TickOutcome {
    match kind {
        TweenKind::Throw => {
            resolve_throw(state, config, rng, events);
            TickOutcome::Continue
        }
        TweenKind::Fall => {
            state.falling = None;
            let knives_stuck = state.knives_stuck();
            log::info!("Round over with {knives_stuck} knives stuck");
            events.push(RoundEvent::RoundOver { knives_stuck });
            TickOutcome::RoundOver { knives_stuck }
        }
    }
}

/// Judge the active knife where it stands and stick it or drop it
///
/// Returns `None` when there is no active knife to judge.
pub fn resolve_throw<R: Rng + ?Sized>(
    state: &mut RoundState,
    config: &RoundConfig,
    rng: &mut R,
    events: &mut Vec<RoundEvent>,
) -> Option<Verdict> {
    let mut knife = state.active.take()?;
    let verdict = judge(
        &state.target,
        knife.color_index,
        &state.landed,
        config.min_angle,
    );

    if verdict.is_legal() {
        let knife_id = state.next_knife_id();
        let impact_angle_deg = state.target.angle_deg;
        state.landed.push(LandedKnife {
            id: knife_id,
            impact_angle_deg,
            angle_deg: 0.0,
            color_index: knife.color_index,
            pos: knife.pos,
        });
        log::debug!(
            "Knife {knife_id} stuck at {impact_angle_deg:.1} deg ({} in wheel)",
            state.landed.len()
        );
        events.push(RoundEvent::KnifeStuck {
            knife_id,
            impact_angle_deg,
            color_index: knife.color_index,
        });

        knife.rearm(config.knife_start(), config.segment_count(), rng);
        state.active = Some(knife);
        state.can_throw = true;
        state.phase = ThrowPhase::Idle;
    } else {
        let off_screen = Vec2::new(knife.pos.x, config.field_height + config.knife_length);
        let tween = Tween::movement(TweenKind::Fall, knife.pos, off_screen, config.fall_duration())
            .with_rotation(knife.rotation, FALL_ROTATION);
        state.falling = Some(FallingKnife {
            pos: knife.pos,
            rotation: knife.rotation,
            color_index: knife.color_index,
            tween,
        });
        state.phase = ThrowPhase::Falling;
        log::debug!("Knife rejected: {verdict:?}");
        events.push(RoundEvent::KnifeRejected { verdict });
    }

    Some(verdict)
}

/// Draw a new target rotation speed, returns it
pub fn change_speed<R: Rng + ?Sized>(
    speed: &mut RotationSpeed,
    config: &RoundConfig,
    rng: &mut R,
) -> f32 {
    let variation = rng.random_range(-config.rotation_variation..=config.rotation_variation);
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    speed.retarget(variation, sign, config.max_rotation_speed)
}
