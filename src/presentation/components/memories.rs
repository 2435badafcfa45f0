use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{text::wrap_words, view::ViewId},
    presentation::widgets::card::{card, centered},
};

#[derive(Debug, Clone, Default)]
pub struct MemoriesComponent;

impl MemoriesComponent {
    pub fn new() -> Self {
        Self
    }

    /// "2/5" style position, empty when there is nothing to show
    pub fn position(state: &AppState) -> String {
        let count = state.config.config.memories.captions.len();
        if count == 0 {
            return String::new();
        }
        format!("{}/{}", state.memories.index + 1, count)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let area = centered(area, 56, 12);
        let block = card(ViewId::Memories.title());
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [caption_area, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let mut lines = vec![Line::from("")];
        match state.current_memory() {
            Some(caption) => lines.extend(
                wrap_words(caption, caption_area.width.saturating_sub(4) as usize)
                    .into_iter()
                    .map(|line| Line::styled(line, Style::default().fg(Color::LightMagenta).italic())),
            ),
            None => lines.push(Line::styled("No memories yet", Style::default().fg(Color::DarkGray))),
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), caption_area);

        let playing = if state.memories.playing { "▶" } else { "⏸" };
        frame.render_widget(
            Paragraph::new(format!("{playing} {}", Self::position(state)))
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }
}
