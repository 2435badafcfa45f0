use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{login::Feedback, AppState},
    domain::passcode::PASSCODE_LEN,
    presentation::widgets::card::{card, centered},
};

/// Passcode gate: one dot per digit, filled as they are typed
#[derive(Debug, Clone, Default)]
pub struct LoginComponent;

impl LoginComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn dots(filled: usize) -> String {
        (0..PASSCODE_LEN)
            .map(|i| if i < filled { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let login = &state.login;
        let area = centered(area, 34, 9);
        let block = card("Locked");
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let dots_style = match login.pending {
            Some(Feedback::Accepted) => Style::default().fg(Color::LightGreen),
            Some(Feedback::Rejected) => Style::default().fg(Color::Red),
            None => Style::default().fg(Color::LightRed),
        };

        let message = if login.show_error {
            Line::styled("Wrong code, try again", Style::default().fg(Color::Red).bold())
        } else if login.pending == Some(Feedback::Accepted) {
            Line::styled("Welcome ♥", Style::default().fg(Color::LightGreen))
        } else {
            Line::styled("digits to type, esc to clear", Style::default().fg(Color::DarkGray))
        };

        let lines = vec![
            Line::from(""),
            Line::from("Enter our code"),
            Line::from(""),
            Line::styled(Self::dots(login.filled()), dots_style.bold()),
            Line::from(""),
            message,
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
