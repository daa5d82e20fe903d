//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autoplay;
pub mod judge;
pub mod round;
pub mod state;
pub mod tick;
pub mod tween;

pub use judge::{Verdict, judge, segment_index, segment_width};
pub use round::Round;
pub use state::{
    ActiveKnife, FallingKnife, LandedKnife, RotationSpeed, RoundEvent, RoundState, Target,
    ThrowPhase,
};
pub use tick::{TickInput, TickOutcome, tick};
pub use tween::{Tween, TweenKind};
