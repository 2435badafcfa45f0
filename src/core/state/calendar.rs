use chrono::{DateTime, Local};

use crate::{
    core::cmd::Cmd,
    domain::{
        elapsed::{ElapsedBreakdown, Epoch},
        timer::{Schedule, TimerId, ELAPSED_TICK_MS},
    },
};

/// Elapsed-time widget state
#[derive(Debug, Clone, Default)]
pub struct CalendarState {
    pub breakdown: ElapsedBreakdown,
    pub running: bool,
    /// Number of breakdowns published since startup
    pub published: u64,
}

impl CalendarState {
    /// Publishes a breakdown for `now` right away and (re)starts the tick.
    /// The scheduler cancels a previous tick before starting the new one.
    pub fn start(&mut self, epoch: &Epoch, now: DateTime<Local>) -> Vec<Cmd> {
        self.publish(epoch, now);
        self.running = true;
        vec![Cmd::start(
            TimerId::ElapsedTick,
            Schedule::every_ms(ELAPSED_TICK_MS),
        )]
    }

    pub fn stop(&mut self) -> Vec<Cmd> {
        if !self.running {
            return vec![];
        }
        self.running = false;
        vec![Cmd::stop(TimerId::ElapsedTick)]
    }

    pub fn tick(&mut self, epoch: &Epoch, now: DateTime<Local>) {
        if self.running {
            self.publish(epoch, now);
        }
    }

    fn publish(&mut self, epoch: &Epoch, now: DateTime<Local>) {
        self.breakdown = ElapsedBreakdown::since(&epoch.at(), &now);
        self.published += 1;
    }
}
