use chrono::{DateTime, Local};

pub const MIN_LIFETIME_MS: i64 = 5_000;
pub const MAX_LIFETIME_MS: i64 = 10_000;
pub const GLYPHS: [char; 3] = ['♥', '❤', '♡'];

/// A decorative heart floating from the bottom edge to the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    /// Horizontal position as a fraction of the screen width, in [0, 1)
    pub column: f64,
    pub born_at: DateTime<Local>,
    pub lifetime_ms: i64,
    pub glyph: char,
}

impl Heart {
    /// Builds a heart from three uniform samples in [0, 1).
    pub fn from_samples(born_at: DateTime<Local>, column: f64, lifetime: f64, glyph: f64) -> Self {
        let span = (MAX_LIFETIME_MS - MIN_LIFETIME_MS) as f64;
        let glyph_index = ((glyph.clamp(0.0, 1.0) * GLYPHS.len() as f64) as usize).min(GLYPHS.len() - 1);
        Self {
            column: column.clamp(0.0, 1.0),
            born_at,
            lifetime_ms: MIN_LIFETIME_MS + (lifetime.clamp(0.0, 1.0) * span) as i64,
            glyph: GLYPHS[glyph_index],
        }
    }

    pub fn age_ms(&self, now: DateTime<Local>) -> i64 {
        now.timestamp_millis() - self.born_at.timestamp_millis()
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        self.age_ms(now) >= self.lifetime_ms
    }

    /// Fraction of the flight completed, `None` once expired
    pub fn progress(&self, now: DateTime<Local>) -> Option<f64> {
        if self.is_expired(now) {
            return None;
        }
        Some((self.age_ms(now).max(0) as f64 / self.lifetime_ms as f64).clamp(0.0, 1.0))
    }
}
