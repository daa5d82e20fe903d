//! Color Knife - A knife throwing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (target spin, throws, hit judgment)
//! - `config`: Immutable round configuration with JSON loading
//! - `error`: Configuration errors
//! - `highscores`: Knives-stuck leaderboard

pub mod config;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::RoundConfig;
pub use error::ConfigError;
pub use highscores::HighScores;

use glam::Vec2;

/// Game configuration defaults
pub mod consts {
    /// Frame duration the native host drives the simulation with (ms)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Playfield dimensions (pixels, y grows downward)
    pub const FIELD_WIDTH: f32 = 750.0;
    pub const FIELD_HEIGHT: f32 = 1334.0;

    /// Target wheel
    pub const TARGET_RADIUS: f32 = 250.0;
    /// Target center as a fraction of field height
    pub const TARGET_Y: f32 = 1.0 / 4.0;
    /// Red, green, blue
    pub const TARGET_COLORS: [u32; 3] = [0xff0000, 0x00ff00, 0x0000ff];

    /// Rotation speed in degrees per frame
    pub const ROTATION_SPEED: f32 = 3.0;
    pub const MAX_ROTATION_SPEED: f32 = 6.0;
    /// Max random change applied on every speed re-target
    pub const ROTATION_VARIATION: f32 = 2.0;
    /// Interval between speed re-targets (ms)
    pub const CHANGE_TIME: f32 = 2000.0;

    /// Throw animation duration (ms)
    pub const THROW_SPEED: f32 = 150.0;
    /// Fall animation is this many times longer than a throw
    pub const FALL_DURATION_FACTOR: f32 = 4.0;
    /// Rotation reached at the end of the fall (radians)
    pub const FALL_ROTATION: f32 = 5.0;

    /// Minimum angular spacing between landed knives (degrees)
    pub const MIN_ANGLE: f32 = 5.0;

    /// Knife sprite length (pixels)
    pub const KNIFE_LENGTH: f32 = 180.0;
    /// Knife start position as a fraction of field height
    pub const KNIFE_START_Y: f32 = 4.0 / 5.0;
}

/// Wrap an angle in degrees to [-180, 180)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360
    if wrapped >= 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Signed shortest rotation from `from` to `to`, in degrees, within (-180, 180]
#[inline]
pub fn shortest_between_degrees(from: f32, to: f32) -> f32 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Linear interpolation from `a` to `b` by `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
