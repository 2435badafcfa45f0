use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod decor;
pub mod game;
pub mod letter;
pub mod login;
pub mod memories;
pub mod nav;
pub mod system;

use calendar::CalendarMsg;
use decor::DecorMsg;
use game::GameMsg;
use letter::LetterMsg;
use login::LoginMsg;
use memories::MemoriesMsg;
use nav::NavMsg;
use system::SystemMsg;

/// Domain messages representing application intent.
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Nav(NavMsg),
    Login(LoginMsg),
    Calendar(CalendarMsg),
    Game(GameMsg),
    Letter(LetterMsg),
    Memories(MemoriesMsg),
    Decor(DecorMsg),
}

impl Msg {
    /// Helper to exclude periodic messages from debug logging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            Msg::Calendar(CalendarMsg::Tick)
                | Msg::Decor(DecorMsg::SpawnHeart | DecorMsg::ClockTick)
                | Msg::Memories(MemoriesMsg::Advance)
        )
    }
}
