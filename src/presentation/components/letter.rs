use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        text::{max_width, truncate_lines, wrap_words},
        view::ViewId,
    },
    presentation::widgets::card::{card, centered},
};

const ENVELOPE_CLOSED: [&str; 7] = [
    "┌───────────────────────┐",
    "│╲                     ╱│",
    "│  ╲                 ╱  │",
    "│    ╲──────♥──────╱    │",
    "│                       │",
    "│                       │",
    "└───────────────────────┘",
];

const ENVELOPE_OPEN: [&str; 7] = [
    "    ╱‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾╲    ",
    "  ╱                   ╲  ",
    "┌───────────────────────┐",
    "│╲                     ╱│",
    "│  ╲                 ╱  │",
    "│    ╲─────────────╱    │",
    "└───────────────────────┘",
];

const LETTER_WIDTH: u16 = 50;

/// The envelope and, once revealed, the letter as a modal on top of it
#[derive(Debug, Clone, Default)]
pub struct LetterComponent;

impl LetterComponent {
    pub fn new() -> Self {
        Self
    }

    /// Letter body wrapped to `width`, paragraphs separated by a blank line,
    /// signed with the sender's name
    pub fn letter_lines(state: &AppState, width: usize) -> Vec<String> {
        let config = &state.config.config;
        let mut lines = Vec::new();
        for (i, paragraph) in config.letter.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(wrap_words(paragraph, width));
        }
        if !config.sender.trim().is_empty() {
            lines.push(String::new());
            lines.push(format!("Love, {}", config.sender.trim()));
        }
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let letter = &state.letter;
        let outer = centered(area, 40, 14);
        let block = card(ViewId::Letter.title());
        let inner = block.inner(outer);
        frame.render_widget(Clear, outer);
        frame.render_widget(block, outer);

        let art = if letter.envelope_open {
            ENVELOPE_OPEN
        } else {
            ENVELOPE_CLOSED
        };
        let hint = if letter.envelope_open {
            "enter to close"
        } else {
            "enter to open"
        };
        let mut lines: Vec<Line> = art
            .iter()
            .map(|row| Line::styled(*row, Style::default().fg(Color::LightRed)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

        if letter.letter_visible {
            self.render_modal(state, frame, area);
        }
    }

    fn render_modal(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let text_width = LETTER_WIDTH.min(area.width.saturating_sub(4)) as usize;
        let max_height = area.height.saturating_sub(4) as usize;
        let body = truncate_lines(Self::letter_lines(state, text_width), max_height);

        let width = max_width(body.iter().map(String::as_str)).max(20) as u16 + 4;
        let height = body.len() as u16 + 2;
        let modal = centered(area, width, height);

        let recipient = state.config.config.recipient.trim();
        let title = if recipient.is_empty() {
            "for you".to_string()
        } else {
            format!("for {recipient}")
        };
        let block = card(&title).border_style(Style::default().fg(Color::LightMagenta));
        let lines: Vec<Line> = body.into_iter().map(Line::from).collect();

        frame.render_widget(Clear, modal);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block.padding(Padding::horizontal(1)))
                .style(Style::default().bg(Color::Black)),
            modal,
        );
    }
}
