use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{elapsed::EPOCH_FORMAT, view::ViewId},
    presentation::widgets::card::{card, centered},
};

const FIELD_WIDTH: u16 = 10;

/// Time since the configured epoch as six labelled counters
#[derive(Debug, Clone, Default)]
pub struct CalendarComponent;

impl CalendarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let area = centered(area, FIELD_WIDTH * 6 + 4, 10);
        let block = card(ViewId::Calendar.title());
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [header, fields, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(inner);

        let since = state.config.config.epoch.at().format(EPOCH_FORMAT).to_string();
        frame.render_widget(
            Paragraph::new(format!("Together since {since}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            header,
        );

        let columns = Layout::horizontal([Constraint::Length(FIELD_WIDTH); 6])
            .flex(Flex::Center)
            .split(fields);
        for ((label, value), column) in state.calendar.breakdown.fields().iter().zip(columns.iter()) {
            let lines = vec![
                Line::styled(value.to_string(), Style::default().fg(Color::LightRed).bold()),
                Line::styled(*label, Style::default().fg(Color::DarkGray)),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM)),
                *column,
            );
        }

        if !state.calendar.running {
            frame.render_widget(
                Paragraph::new("paused").alignment(Alignment::Center),
                footer,
            );
        }
    }
}
