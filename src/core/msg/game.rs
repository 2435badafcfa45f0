use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Puzzle widget messages. `Select` picks up the focused piece, or drops the
/// held one at the focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMsg {
    MoveFocus(Direction),
    SwitchArea,
    Select,
    Cancel,
}
