//! Round state and core simulation types
//!
//! Everything that a round reset throws away lives in `RoundState`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::judge::{Verdict, segment_index};
use super::tween::Tween;
use crate::config::RoundConfig;
use crate::{lerp, polar_to_cartesian, wrap_degrees};

/// Where the throw cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowPhase {
    /// Knife waiting at the start position, a throw is allowed
    Idle,
    /// Throw animation running
    InFlight,
    /// Illegal hit, knife falling off screen before the round restarts
    Falling,
}

/// The spinning color wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub center: Vec2,
    pub radius: f32,
    /// Rotation in degrees, wrapped to [-180, 180)
    pub angle_deg: f32,
    pub segment_count: usize,
}

impl Target {
    pub fn new(center: Vec2, radius: f32, segment_count: usize) -> Self {
        Self {
            center,
            radius,
            angle_deg: 0.0,
            segment_count,
        }
    }

    /// Segment currently facing the throwing position
    pub fn segment_index(&self) -> usize {
        segment_index(self.angle_deg, self.segment_count)
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.angle_deg = wrap_degrees(self.angle_deg + degrees);
    }

    /// Point on the rim at `angle_deg`, measured from straight down
    pub fn rim_point(&self, angle_deg: f32) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, (angle_deg + 90.0).to_radians())
    }

    /// Lowest point of the wheel, where thrown knives land
    pub fn bottom_edge_y(&self) -> f32 {
        self.center.y + self.radius
    }
}

/// Current and target angular speed (degrees per frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationSpeed {
    pub current: f32,
    pub target: f32,
}

impl RotationSpeed {
    pub fn new(speed: f32) -> Self {
        Self {
            current: speed,
            target: speed,
        }
    }

    /// Pick a new target from the current speed, a variation and a direction
    pub fn retarget(&mut self, variation: f32, sign: f32, max: f32) -> f32 {
        self.target = ((self.current + variation) * sign).clamp(-max, max);
        self.target
    }

    /// Ease the current speed toward the target, `dt` in ms
    pub fn interpolate(&mut self, dt: f32) {
        let t = (dt / 1000.0).clamp(0.0, 1.0);
        self.current = lerp(self.current, self.target, t);
    }
}

/// The knife waiting at (or flying from) the throwing position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveKnife {
    pub pos: Vec2,
    /// Sprite rotation (radians)
    pub rotation: f32,
    /// Segment this knife must hit
    pub color_index: usize,
    /// Throw animation while in flight
    pub tween: Option<Tween>,
}

impl ActiveKnife {
    /// Arm a knife at `pos` with a random color
    pub fn armed<R: Rng + ?Sized>(pos: Vec2, segment_count: usize, rng: &mut R) -> Self {
        Self {
            pos,
            rotation: 0.0,
            color_index: rng.random_range(0..segment_count),
            tween: None,
        }
    }

    /// Send the knife back to `pos` with a fresh color
    pub fn rearm<R: Rng + ?Sized>(&mut self, pos: Vec2, segment_count: usize, rng: &mut R) {
        *self = Self::armed(pos, segment_count, rng);
    }
}

/// A knife that missed and is dropping out of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingKnife {
    pub pos: Vec2,
    pub rotation: f32,
    pub color_index: usize,
    pub tween: Tween,
}

/// A knife stuck in the wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandedKnife {
    pub id: u32,
    /// Target rotation at the moment of impact (degrees)
    pub impact_angle_deg: f32,
    /// Rotation accumulated since impact (degrees), drives the orbit
    pub angle_deg: f32,
    pub color_index: usize,
    pub pos: Vec2,
}

impl LandedKnife {
    /// Advance with the wheel and re-derive the rim position
    pub fn orbit(&mut self, speed: f32, target: &Target) {
        self.angle_deg = wrap_degrees(self.angle_deg + speed);
        self.pos = target.rim_point(self.angle_deg);
    }
}

/// Things that happened during a tick, for hosts to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A fresh round began
    RoundStarted { round: u32 },
    /// The player threw the active knife
    KnifeThrown { color_index: usize },
    /// Legal hit
    KnifeStuck {
        knife_id: u32,
        impact_angle_deg: f32,
        color_index: usize,
    },
    /// Illegal hit, the knife starts falling
    KnifeRejected { verdict: Verdict },
    /// Periodic speed re-target
    SpeedChanged { target: f32 },
    /// Fall finished, the round is about to restart
    RoundOver { knives_stuck: u32 },
}

/// Complete mutable state of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub target: Target,
    pub speed: RotationSpeed,
    pub phase: ThrowPhase,
    /// Throw gate, false while any animation runs
    pub can_throw: bool,
    /// Present while the round is in progress, absent while falling
    pub active: Option<ActiveKnife>,
    pub falling: Option<FallingKnife>,
    pub landed: Vec<LandedKnife>,
    /// Time accumulated toward the next speed re-target (ms)
    pub change_elapsed: f32,
    next_id: u32,
}

impl RoundState {
    /// Fresh round built from the configuration
    pub fn new<R: Rng + ?Sized>(config: &RoundConfig, rng: &mut R) -> Self {
        let segment_count = config.segment_count();
        Self {
            target: Target::new(config.target_center(), config.target_radius, segment_count),
            speed: RotationSpeed::new(config.rotation_speed),
            phase: ThrowPhase::Idle,
            can_throw: true,
            active: Some(ActiveKnife::armed(config.knife_start(), segment_count, rng)),
            falling: None,
            landed: Vec::new(),
            change_elapsed: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new landed knife ID
    pub fn next_knife_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Knives stuck so far this round
    pub fn knives_stuck(&self) -> u32 {
        self.landed.len() as u32
    }
}
