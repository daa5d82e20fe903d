//! Linear tweens for knife animations
//!
//! A tween moves a position and a rotation toward target values over a fixed
//! duration. When it completes, its `kind` tells the tick which transition to
//! run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which transition runs when a tween finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TweenKind {
    /// Knife reached the wheel, judge the hit
    Throw,
    /// Missed knife left the field, restart the round
    Fall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub kind: TweenKind,
    pub from: Vec2,
    pub to: Vec2,
    pub from_rotation: f32,
    pub to_rotation: f32,
    /// Total duration (ms)
    pub duration: f32,
    /// Time spent so far (ms)
    pub elapsed: f32,
}

impl Tween {
    /// Tween that only moves
    pub fn movement(kind: TweenKind, from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            kind,
            from,
            to,
            from_rotation: 0.0,
            to_rotation: 0.0,
            duration,
            elapsed: 0.0,
        }
    }

    /// Add a rotation leg to the tween
    pub fn with_rotation(mut self, from: f32, to: f32) -> Self {
        self.from_rotation = from;
        self.to_rotation = to;
        self
    }

    /// Advance by `dt` ms, returns true once the tween has finished
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.from.lerp(self.to, self.progress())
    }

    /// Current rotation (radians)
    pub fn rotation(&self) -> f32 {
        crate::lerp(self.from_rotation, self.to_rotation, self.progress())
    }
}
