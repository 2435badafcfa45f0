use chrono::{DateTime, Local};
use ratatui::prelude::*;

use crate::{core::state::AppState, domain::heart::Heart};

/// Floating hearts drawn behind every panel
#[derive(Debug, Clone, Default)]
pub struct HeartsComponent;

impl HeartsComponent {
    pub fn new() -> Self {
        Self
    }

    /// Cell for `heart` at `now`, rising from the bottom row to the top one.
    /// `None` once the heart has expired.
    pub fn position(heart: &Heart, area: Rect, now: DateTime<Local>) -> Option<Position> {
        if area.is_empty() {
            return None;
        }
        let progress = heart.progress(now)?;
        let max_x = area.width.saturating_sub(1) as f64;
        let max_y = area.height.saturating_sub(1) as f64;
        let x = (heart.column * max_x).round() as u16;
        let y = ((1.0 - progress) * max_y).round() as u16;
        Some(Position::new(area.x + x, area.y + y))
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, now: DateTime<Local>) {
        let buf = frame.buffer_mut();
        for heart in &state.decor.hearts {
            if let Some(at) = Self::position(heart, area, now) {
                buf.set_string(
                    at.x,
                    at.y,
                    heart.glyph.to_string(),
                    Style::default().fg(Color::Red),
                );
            }
        }
    }
}
