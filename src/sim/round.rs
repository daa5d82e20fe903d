//! Round controller
//!
//! Owns the immutable configuration, the seeded RNG and the current
//! `RoundState`. A finished round is never patched back to a clean state: the
//! whole state is rebuilt from the configuration.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{RoundEvent, RoundState};
use super::tick::{TickInput, TickOutcome, tick};
use crate::config::RoundConfig;
use crate::error::ConfigError;
use crate::highscores::HighScores;

#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    seed: u64,
    rng: Pcg32,
    state: RoundState,
    /// 1-based number of the round in progress
    round: u32,
    scores: HighScores,
}

impl Round {
    /// Validate the configuration and start the first round
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = RoundState::new(&config, &mut rng);
        log::info!(
            "Round 1 started (seed {seed}, {} colors)",
            config.segment_count()
        );
        Ok(Self {
            config,
            seed,
            rng,
            state,
            round: 1,
            scores: HighScores::new(),
        })
    }

    /// Advance one frame of `dt` ms, returns what happened
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        let outcome = tick(
            &mut self.state,
            &self.config,
            &mut self.rng,
            input,
            dt,
            &mut events,
        );
        if let TickOutcome::RoundOver { knives_stuck } = outcome {
            if let Some(rank) = self.scores.add_score(knives_stuck, self.round) {
                log::info!("Round {} placed #{rank} with {knives_stuck} knives", self.round);
            }
            self.restart();
            events.push(RoundEvent::RoundStarted { round: self.round });
        }
        events
    }

    /// Throw away the current round and start a fresh one
    pub fn restart(&mut self) {
        self.state = RoundState::new(&self.config, &mut self.rng);
        self.round += 1;
        log::info!("Round {} started", self.round);
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Mutable access for hosts that stage a situation (tests, tutorials)
    pub fn state_mut(&mut self) -> &mut RoundState {
        &mut self.state
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }
}
