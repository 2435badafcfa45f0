pub mod calendar;
pub mod decor;
pub mod game;
pub mod letter;
pub mod login;
pub mod memories;
pub mod system;

use crate::{
    core::{cmd::Cmd, update::UpdateContext},
    domain::view::ViewId,
    infrastructure::config::Config,
};

use calendar::CalendarState;
use decor::DecorState;
use game::GameState;
use letter::LetterState;
use login::LoginState;
use memories::MemoriesState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The single visible panel
    pub active_view: ViewId,
    pub login: LoginState,
    pub calendar: CalendarState,
    pub game: GameState,
    pub letter: LetterState,
    pub memories: MemoriesState,
    pub decor: DecorState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.active_view == view
    }

    pub fn is_unlocked(&self) -> bool {
        self.active_view != ViewId::Login
    }

    /// Makes `view` the only visible panel. Exit actions of the current
    /// panel run first, then entry actions of `view`; activating the current
    /// panel again re-runs both.
    pub fn activate(&mut self, view: ViewId, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        let previous = self.active_view;
        log::info!("activate view: {previous} -> {view}");

        let mut cmds = self.leave(previous);
        self.active_view = view;
        cmds.extend(self.enter(view, ctx));
        cmds
    }

    fn leave(&mut self, view: ViewId) -> Vec<Cmd> {
        match view {
            ViewId::Calendar => self.calendar.stop(),
            ViewId::Memories => self.memories.pause(),
            ViewId::Letter => self.letter.reset(),
            ViewId::Login | ViewId::Dashboard | ViewId::Game => vec![],
        }
    }

    fn enter(&mut self, view: ViewId, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        let config = &self.config.config;
        match view {
            ViewId::Calendar => self.calendar.start(&config.epoch, ctx.clock.now()),
            ViewId::Game => {
                self.game.reset(&ctx.entropy.piece_order());
                vec![]
            }
            ViewId::Memories => self.memories.play(config.memories.interval_ms.get()),
            ViewId::Letter => self.letter.reset(),
            ViewId::Login => self.login.clear(),
            ViewId::Dashboard => vec![],
        }
    }

    /// Caption currently shown on the memories panel
    pub fn current_memory(&self) -> Option<&str> {
        self.config
            .config
            .memories
            .captions
            .get(self.memories.index)
            .map(String::as_str)
    }
}
