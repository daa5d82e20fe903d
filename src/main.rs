//! Color Knife entry point
//!
//! Headless native host: drives the round controller with a fixed 60 Hz frame
//! clock and lets the autopilot play. Rendering and audio are left to real
//! front ends.
//!
//! Usage: `color-knife [config.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use color_knife::consts::FRAME_MS;
    use color_knife::sim::autoplay::{DEFAULT_MARGIN_DEG, should_throw};
    use color_knife::sim::{Round, RoundEvent, TickInput};
    use color_knife::{ConfigError, RoundConfig};

    /// One minute of play
    const DEFAULT_FRAMES: u32 = 60 * 60;

    pub fn run() -> Result<(), ConfigError> {
        let mut args = std::env::args().skip(1);
        let config = match args.next() {
            Some(path) => RoundConfig::load(path)?,
            None => RoundConfig::default(),
        };
        let frames = match args.next() {
            Some(n) => n.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring frame count {n:?}, using {DEFAULT_FRAMES}");
                DEFAULT_FRAMES
            }),
            None => DEFAULT_FRAMES,
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut round = Round::new(config, seed)?;

        for _ in 0..frames {
            let throw = should_throw(round.state(), round.config(), FRAME_MS, DEFAULT_MARGIN_DEG);
            for event in round.tick(&TickInput { throw }, FRAME_MS) {
                match event {
                    RoundEvent::KnifeStuck {
                        knife_id,
                        impact_angle_deg,
                        color_index,
                    } => log::info!(
                        "Knife {knife_id} stuck at {impact_angle_deg:.1} deg on #{:06x}",
                        round.config().color(color_index).unwrap_or_default()
                    ),
                    RoundEvent::KnifeRejected { verdict } => log::info!("Missed: {verdict:?}"),
                    RoundEvent::RoundOver { knives_stuck } => {
                        log::info!("Round over, {knives_stuck} knives stuck")
                    }
                    other => log::debug!("{other:?}"),
                }
            }
        }

        let scores = round.scores();
        if scores.is_empty() {
            println!("No knives stuck in {} rounds", round.round());
        } else {
            println!("Best rounds (seed {}):", round.seed());
            for (rank, entry) in scores.entries.iter().enumerate() {
                println!("{:>2}. round {:<4} {} knives", rank + 1, entry.round, entry.knives);
            }
        }
        println!(
            "Round {} in progress: {} knives stuck",
            round.round(),
            round.state().knives_stuck()
        );

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Color Knife (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web front ends embed the library and drive `Round::tick` themselves
}
