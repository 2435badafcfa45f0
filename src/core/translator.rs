use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            calendar::CalendarMsg,
            decor::DecorMsg,
            game::{Direction, GameMsg},
            letter::LetterMsg,
            login::LoginMsg,
            memories::MemoriesMsg,
            nav::NavMsg,
            system::SystemMsg,
            Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{timer::TimerId, view::ViewId},
    infrastructure::config::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on the active view and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Timer(id) => vec![translate_timer(id)],

        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_timer(id: TimerId) -> Msg {
    match id {
        TimerId::ElapsedTick => Msg::Calendar(CalendarMsg::Tick),
        TimerId::PasscodeFeedback => Msg::Login(LoginMsg::FeedbackDue),
        TimerId::EnvelopeReveal => Msg::Letter(LetterMsg::Reveal),
        TimerId::MemoriesAdvance => Msg::Memories(MemoriesMsg::Advance),
        TimerId::HeartSpawn => Msg::Decor(DecorMsg::SpawnHeart),
        TimerId::WallClock => Msg::Decor(DecorMsg::ClockTick),
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // The gate takes digits directly; everything else goes through bindings
    if state.is_active(ViewId::Login) {
        if let KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } = key
        {
            if c.is_ascii_digit() {
                return vec![Msg::Login(LoginMsg::Append(c))];
            }
        }
    }

    match state
        .config
        .config
        .keybindings
        .action_for(state.active_view, key)
    {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Back => {
            // Esc in the puzzle puts a held piece back before leaving
            if state.is_active(ViewId::Game) && state.game.held.is_some() {
                vec![Msg::Game(GameMsg::Cancel)]
            } else {
                vec![Msg::Nav(NavMsg::Back)]
            }
        }
        Action::Lock => vec![Msg::Nav(NavMsg::Activate(ViewId::Login))],
        Action::OpenCalendar => vec![Msg::Nav(NavMsg::Activate(ViewId::Calendar))],
        Action::OpenGame => vec![Msg::Nav(NavMsg::Activate(ViewId::Game))],
        Action::OpenMemories => vec![Msg::Nav(NavMsg::Activate(ViewId::Memories))],
        Action::OpenLetter => vec![Msg::Nav(NavMsg::Activate(ViewId::Letter))],
        Action::ClearDigits => vec![Msg::Login(LoginMsg::Clear)],
        Action::FocusUp => vec![Msg::Game(GameMsg::MoveFocus(Direction::Up))],
        Action::FocusDown => vec![Msg::Game(GameMsg::MoveFocus(Direction::Down))],
        Action::FocusLeft => vec![Msg::Game(GameMsg::MoveFocus(Direction::Left))],
        Action::FocusRight => vec![Msg::Game(GameMsg::MoveFocus(Direction::Right))],
        Action::SwitchArea => vec![Msg::Game(GameMsg::SwitchArea)],
        Action::Select => vec![Msg::Game(GameMsg::Select)],
        Action::Cancel => vec![Msg::Game(GameMsg::Cancel)],
        Action::ToggleEnvelope => vec![Msg::Letter(LetterMsg::ToggleEnvelope)],
        Action::DismissLetter => vec![Msg::Letter(LetterMsg::Dismiss)],
        Action::NextMemory => vec![Msg::Memories(MemoriesMsg::Next)],
        Action::PreviousMemory => vec![Msg::Memories(MemoriesMsg::Previous)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::state::game::{Held, Origin},
        domain::puzzle::Piece,
        infrastructure::config::Config,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn state_in(view: ViewId) -> AppState {
        let dir = std::env::temp_dir().join("keepsake-translator-tests");
        let config = Config::load_from(&dir, &dir).expect("default config");
        let mut state = AppState::new_with_config(config);
        state.active_view = view;
        state
    }

    fn press(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let state = state_in(ViewId::Login);
        let msgs = translate_raw_to_domain(
            RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &state,
        );
        assert_eq!(msgs, vec![Msg::System(SystemMsg::Quit)]);
    }

    #[test]
    fn digits_go_to_the_gate_only_on_login() {
        let login = state_in(ViewId::Login);
        assert_eq!(
            translate_raw_to_domain(press(KeyCode::Char('7')), &login),
            vec![Msg::Login(LoginMsg::Append('7'))]
        );

        let dashboard = state_in(ViewId::Dashboard);
        assert_eq!(
            translate_raw_to_domain(press(KeyCode::Char('1')), &dashboard),
            vec![Msg::Nav(NavMsg::Activate(ViewId::Calendar))]
        );
    }

    #[test]
    fn letters_are_not_digits_on_login() {
        let login = state_in(ViewId::Login);
        assert!(translate_raw_to_domain(press(KeyCode::Char('a')), &login).is_empty());
        assert_eq!(
            translate_raw_to_domain(press(KeyCode::Esc), &login),
            vec![Msg::Login(LoginMsg::Clear)]
        );
    }

    #[rstest]
    #[case(TimerId::ElapsedTick, Msg::Calendar(CalendarMsg::Tick))]
    #[case(TimerId::PasscodeFeedback, Msg::Login(LoginMsg::FeedbackDue))]
    #[case(TimerId::EnvelopeReveal, Msg::Letter(LetterMsg::Reveal))]
    #[case(TimerId::MemoriesAdvance, Msg::Memories(MemoriesMsg::Advance))]
    #[case(TimerId::HeartSpawn, Msg::Decor(DecorMsg::SpawnHeart))]
    #[case(TimerId::WallClock, Msg::Decor(DecorMsg::ClockTick))]
    fn timers_map_to_widget_messages(#[case] id: TimerId, #[case] expected: Msg) {
        let state = AppState::default();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Timer(id), &state),
            vec![expected]
        );
    }

    #[test]
    fn escape_in_game_cancels_held_piece_first() {
        let mut state = state_in(ViewId::Game);
        assert_eq!(
            translate_raw_to_domain(press(KeyCode::Esc), &state),
            vec![Msg::Nav(NavMsg::Back)]
        );

        state.game.held = Some(Held {
            piece: Piece(0),
            origin: Origin::Tray(0),
        });
        assert_eq!(
            translate_raw_to_domain(press(KeyCode::Esc), &state),
            vec![Msg::Game(GameMsg::Cancel)]
        );
    }

    #[test]
    fn same_key_means_different_things_per_view() {
        let game = state_in(ViewId::Game);
        let letter = state_in(ViewId::Letter);
        assert_eq!(
            translate_raw_to_domain(press(KeyCode::Enter), &game),
            vec![Msg::Game(GameMsg::Select)]
        );
        assert_eq!(
            translate_raw_to_domain(press(KeyCode::Enter), &letter),
            vec![Msg::Letter(LetterMsg::ToggleEnvelope)]
        );
    }

    #[test]
    fn frequent_events_are_ignored() {
        let state = AppState::default();
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
