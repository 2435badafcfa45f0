use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `s` at word boundaries so that no line is wider than `width`
/// columns. Words wider than a whole line are split by character.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in s.split_whitespace() {
        let needed = if line.is_empty() {
            word.width()
        } else {
            line.width() + 1 + word.width()
        };
        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if word.width() <= width {
            line.push_str(word);
        } else {
            for c in word.chars() {
                if line.width() + c.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(c);
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Keeps at most `max_height` lines, replacing the last kept one with an
/// ellipsis when something was cut
pub fn truncate_lines(mut lines: Vec<String>, max_height: usize) -> Vec<String> {
    if lines.len() > max_height {
        lines.truncate(max_height);
        if let Some(last) = lines.last_mut() {
            *last = String::from("…");
        }
    }
    lines
}

/// Widest line in display columns
pub fn max_width<'a>(lines: impl IntoIterator<Item = &'a str>) -> usize {
    lines.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0)
}
