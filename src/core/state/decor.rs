use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::{
    core::cmd::Cmd,
    domain::{
        entropy::Entropy,
        heart::Heart,
        timer::{Schedule, TimerId, HEART_SPAWN_MS, WALL_CLOCK_MS},
    },
};

pub const FALLBACK_CLOCK_FORMAT: &str = "%H:%M:%S";

/// Session-wide decorations
#[derive(Debug, Clone, Default)]
pub struct DecorState {
    pub hearts: Vec<Heart>,
    pub clock_text: String,
}

impl DecorState {
    /// Timers that run for the whole session
    pub fn start(&mut self, hearts_enabled: bool) -> Vec<Cmd> {
        let mut cmds = vec![Cmd::start(
            TimerId::WallClock,
            Schedule::every_ms(WALL_CLOCK_MS),
        )];
        if hearts_enabled {
            cmds.push(Cmd::start(
                TimerId::HeartSpawn,
                Schedule::every_ms(HEART_SPAWN_MS),
            ));
        }
        cmds
    }

    pub fn spawn_heart(&mut self, now: DateTime<Local>, entropy: &dyn Entropy) {
        self.prune(now);
        self.hearts.push(Heart::from_samples(
            now,
            entropy.unit(),
            entropy.unit(),
            entropy.unit(),
        ));
    }

    pub fn prune(&mut self, now: DateTime<Local>) {
        self.hearts.retain(|heart| !heart.is_expired(now));
    }

    pub fn clock_tick(&mut self, now: DateTime<Local>, format: &str) {
        self.clock_text = format_clock(now, format);
    }
}

/// Formats `now`, falling back to 24h time when `format` is not a valid
/// strftime pattern.
pub fn format_clock(now: DateTime<Local>, format: &str) -> String {
    let mut text = String::new();
    if write!(text, "{}", now.format(format)).is_ok() {
        return text;
    }
    now.format(FALLBACK_CLOCK_FORMAT).to_string()
}
