//! Status bar component
//!
//! One line at the bottom: the current status message when there is one,
//! otherwise the key hints of the active panel.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::view::ViewId};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(view: ViewId) -> &'static str {
        match view {
            ViewId::Login => "0-9 enter code · esc clear · q quit",
            ViewId::Dashboard => "1-4 open · x lock · q quit",
            ViewId::Calendar => "esc back · q quit",
            ViewId::Game => "arrows move · tab switch · enter pick/drop · x cancel · esc back",
            ViewId::Memories => "←/→ browse · esc back · q quit",
            ViewId::Letter => "enter open/close · d dismiss · esc back",
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let line = match &state.system.status_message {
            Some(message) => Line::styled(message.clone(), Style::default().fg(Color::Yellow)),
            None => Line::styled(
                Self::hints(state.active_view),
                Style::default().fg(Color::Gray).italic(),
            ),
        };
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(Color::Black)),
            area,
        );
    }
}
