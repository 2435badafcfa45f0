use std::{collections::VecDeque, sync::Arc};

use futures::future;

use tokio::sync::Mutex;

use crate::infrastructure::tui;

/// Where the runner pulls terminal events from
pub enum EventSource {
    /// The terminal's own event stream
    Real(Arc<Mutex<dyn tui::TuiLike + Send>>),
    /// A fixed script. Once it runs out the source stays silent, so only
    /// timers can still wake the runner.
    Test(VecDeque<tui::Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<tui::Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => match queue.pop_front() {
                Some(event) => Some(event),
                None => future::pending().await,
            },
        }
    }

    /// Events left in a scripted source
    pub fn remaining(&self) -> Option<usize> {
        match self {
            EventSource::Real(_) => None,
            EventSource::Test(queue) => Some(queue.len()),
        }
    }
}
