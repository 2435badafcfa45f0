//! Component collection
//!
//! Components are stateless renderers: each receives the state it draws as a
//! parameter and keeps nothing between frames.

use chrono::{DateTime, Local};
use ratatui::prelude::*;

use crate::{core::state::AppState, domain::view::ViewId};

pub mod calendar;
pub mod dashboard;
pub mod game;
pub mod hearts;
pub mod letter;
pub mod login;
pub mod memories;
pub mod status_bar;

pub use calendar::CalendarComponent;
pub use dashboard::DashboardComponent;
pub use game::GameComponent;
pub use hearts::HeartsComponent;
pub use letter::LetterComponent;
pub use login::LoginComponent;
pub use memories::MemoriesComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub login: LoginComponent,
    pub dashboard: DashboardComponent,
    pub calendar: CalendarComponent,
    pub game: GameComponent,
    pub memories: MemoriesComponent,
    pub letter: LetterComponent,
    pub hearts: HeartsComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the hearts, then the active panel over them, then the status bar.
    /// Only the active panel is drawn.
    pub fn render(&self, frame: &mut Frame, state: &AppState, now: DateTime<Local>) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        self.hearts.view(state, frame, main, now);

        match state.active_view {
            ViewId::Login => self.login.view(state, frame, main),
            ViewId::Dashboard => self.dashboard.view(state, frame, main),
            ViewId::Calendar => self.calendar.view(state, frame, main),
            ViewId::Game => self.game.view(state, frame, main),
            ViewId::Memories => self.memories.view(state, frame, main),
            ViewId::Letter => self.letter.view(state, frame, main),
        }

        self.status_bar.view(state, frame, status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{msg::letter::LetterMsg, state::login::Feedback},
        domain::elapsed::ElapsedBreakdown,
        infrastructure::{
            config::Config,
            tui::{test::TestTui, Frame as TuiFrame, TuiLike},
        },
    };

    fn state_in(view: ViewId) -> AppState {
        let mut config = Config::default();
        config.recipient = "Robin".to_string();
        config.sender = "Sam".to_string();
        config.letter = vec!["Thank you for every day.".to_string()];
        config.memories.captions = vec!["The first walk".to_string(), "Rainy cafe".to_string()];
        let mut state = AppState::new_with_config(config);
        state.active_view = view;
        state
    }

    fn draw(state: &AppState) -> TestTui {
        let mut tui = TestTui::new(80, 24).expect("test terminal");
        let components = Components::new();
        let now = Local::now();
        tui.draw(&mut |f: &mut TuiFrame<'_>| components.render(f, state, now))
            .expect("draw");
        tui
    }

    #[test]
    fn login_shows_dots_and_error() {
        let mut state = state_in(ViewId::Login);
        state.login.buffer.push('1');
        state.login.buffer.push('2');
        let tui = draw(&state);
        assert!(tui.contains("● ● ○ ○"));
        assert!(!tui.contains("Wrong code"));

        state.login.show_error = true;
        state.login.pending = Some(Feedback::Rejected);
        assert!(draw(&state).contains("Wrong code"));
    }

    #[test]
    fn dashboard_greets_recipient_with_clock() {
        let mut state = state_in(ViewId::Dashboard);
        state.decor.clock_text = "9:41:00 AM".to_string();
        let tui = draw(&state);
        assert!(tui.contains("Hi Robin"));
        assert!(tui.contains("9:41:00 AM"));
        assert!(tui.contains("Our Time"));
        assert!(tui.contains("A Letter"));
    }

    #[test]
    fn calendar_shows_every_field() {
        let mut state = state_in(ViewId::Calendar);
        state.calendar.breakdown = ElapsedBreakdown {
            years: 1,
            months: 2,
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 42,
        };
        let tui = draw(&state);
        for label in ["Years", "Months", "Days", "Hours", "Minutes", "Seconds"] {
            assert!(tui.contains(label), "missing {label}");
        }
        assert!(tui.contains("42"));
    }

    #[test]
    fn game_shows_board_tray_and_progress() {
        let mut state = state_in(ViewId::Game);
        state.game.reset(&[8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let tui = draw(&state);
        assert!(tui.contains("board"));
        assert!(tui.contains("pieces"));
        assert!(tui.contains("0/9 in place"));
    }

    #[test]
    fn memories_shows_caption_and_position() {
        let mut state = state_in(ViewId::Memories);
        state.memories.index = 1;
        let tui = draw(&state);
        assert!(tui.contains("Rainy cafe"));
        assert!(tui.contains("2/2"));
        assert!(!tui.contains("The first walk"));
    }

    #[test]
    fn letter_modal_only_after_reveal() {
        let mut state = state_in(ViewId::Letter);
        assert!(!draw(&state).contains("Thank you"));

        state.letter.update(LetterMsg::ToggleEnvelope);
        assert!(!draw(&state).contains("Thank you"));

        state.letter.update(LetterMsg::Reveal);
        let tui = draw(&state);
        assert!(tui.contains("Thank you for every day."));
        assert!(tui.contains("Love, Sam"));
    }

    #[test]
    fn only_the_active_panel_is_drawn() {
        let state = state_in(ViewId::Calendar);
        let tui = draw(&state);
        assert!(!tui.contains("Enter our code"));
        assert!(!tui.contains("Hi Robin"));
    }

    #[test]
    fn status_message_replaces_hints() {
        let mut state = state_in(ViewId::Dashboard);
        assert!(draw(&state).contains("1-4 open"));
        state.system.status_message = Some("Error: unknown view id `x`".to_string());
        let tui = draw(&state);
        assert!(tui.contains("unknown view id"));
        assert!(!tui.contains("1-4 open"));
    }
}
