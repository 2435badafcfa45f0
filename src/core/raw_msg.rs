use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::timer::TimerId;

/// Raw external events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // Terminal
    Key(KeyEvent),
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,
    Tick,
    Render,

    // Scheduler
    Timer(TimerId),

    // Reports from the runtime
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::Timer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Timer(TimerId::HeartSpawn).is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)).is_frequent());
    }
}
