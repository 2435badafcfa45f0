use serde::{Deserialize, Serialize};

/// Session-wide decorations: floating hearts and the dashboard clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorMsg {
    /// Start the session timers once the terminal is up
    Start,
    SpawnHeart,
    ClockTick,
}
