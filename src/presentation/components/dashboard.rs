use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::view::ViewId,
    presentation::widgets::card::{card, centered},
};

#[derive(Debug, Clone, Default)]
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn greeting(state: &AppState) -> String {
        let recipient = state.config.config.recipient.trim();
        if recipient.is_empty() {
            "Hi ♥".to_string()
        } else {
            format!("Hi {recipient} ♥")
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let area = centered(area, 40, 14);
        let block = card(ViewId::Dashboard.title());
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::styled(Self::greeting(state), Style::default().fg(Color::LightMagenta).bold()),
            Line::styled(state.decor.clock_text.clone(), Style::default().fg(Color::Gray)),
            Line::from(""),
        ];
        for (number, view) in ViewId::menu().iter().enumerate() {
            let shortcut = view.to_string().chars().next().unwrap_or(' ');
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", number + 1),
                    Style::default().fg(Color::LightRed).bold(),
                ),
                Span::raw(format!("{:<10}", view.title())),
                Span::styled(format!(" ({shortcut})"), Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled("x to lock, q to quit", Style::default().fg(Color::DarkGray)));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
