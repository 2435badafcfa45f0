//! Cancellable timer tasks keyed by [`TimerId`].
//!
//! Each live id owns one tokio task. Tasks only report `(id, generation)`
//! over a channel; the generation lets the receiver drop firings that were
//! already queued when their task was cancelled or replaced.

use std::{collections::HashMap, time::Duration};

use color_eyre::eyre::{eyre, Result};
use tokio::{
    runtime::Handle,
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, sleep, Instant, MissedTickBehavior},
};

use crate::domain::timer::{Schedule, TimerId};

type Fired = (TimerId, u64);

#[derive(Debug)]
struct LiveTimer {
    generation: u64,
    schedule: Schedule,
    handle: JoinHandle<()>,
}

#[derive(Debug)]
pub struct Scheduler {
    live: HashMap<TimerId, LiveTimer>,
    next_generation: u64,
    fired_tx: mpsc::UnboundedSender<Fired>,
    fired_rx: mpsc::UnboundedReceiver<Fired>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            live: HashMap::new(),
            next_generation: 0,
            fired_tx,
            fired_rx,
        }
    }

    /// Starts `id`, aborting a live task with the same id first
    pub fn start(&mut self, id: TimerId, schedule: Schedule) -> Result<()> {
        let runtime = Handle::try_current()
            .map_err(|e| eyre!("cannot start timer {id}: no tokio runtime ({e})"))?;
        if schedule == Schedule::Every(Duration::ZERO) {
            return Err(eyre!("cannot start timer {id}: period must be non-zero"));
        }

        self.cancel(id);
        self.next_generation += 1;
        let generation = self.next_generation;
        let tx = self.fired_tx.clone();

        let handle = match schedule {
            Schedule::After(delay) => runtime.spawn(async move {
                sleep(delay).await;
                let _ = tx.send((id, generation));
            }),
            Schedule::Every(period) => runtime.spawn(async move {
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    if tx.send((id, generation)).is_err() {
                        break;
                    }
                }
            }),
        };

        log::debug!("timer {id} started: {schedule:?}");
        self.live.insert(
            id,
            LiveTimer {
                generation,
                schedule,
                handle,
            },
        );
        Ok(())
    }

    /// Cancels `id`; a no-op when nothing is live under it
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.live.remove(&id) {
            Some(timer) => {
                timer.handle.abort();
                log::debug!("timer {id} cancelled");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, timer) in self.live.drain() {
            timer.handle.abort();
        }
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Waits for the next firing that still belongs to a live task
    pub async fn next_fired(&mut self) -> Option<TimerId> {
        loop {
            let fired = self.fired_rx.recv().await?;
            if let Some(id) = self.accept(fired) {
                return Some(id);
            }
        }
    }

    /// Firings already queued, stale ones dropped
    pub fn drain_fired(&mut self) -> Vec<TimerId> {
        let mut ids = Vec::new();
        while let Ok(fired) = self.fired_rx.try_recv() {
            if let Some(id) = self.accept(fired) {
                ids.push(id);
            }
        }
        ids
    }

    fn accept(&mut self, (id, generation): Fired) -> Option<TimerId> {
        let timer = self.live.get(&id)?;
        if timer.generation != generation {
            return None;
        }
        if !timer.schedule.is_repeating() {
            self.live.remove(&id);
        }
        Some(id)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
