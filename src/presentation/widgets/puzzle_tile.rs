use ratatui::{prelude::*, widgets::Widget};

use crate::domain::puzzle::{Piece, GRID};

pub const TILE_WIDTH: u16 = 5;
pub const TILE_HEIGHT: u16 = 3;

/// The picture the nine pieces are cut from, `TILE_HEIGHT` rows and
/// `TILE_WIDTH` columns per piece
const PICTURE: [&str; 9] = [
    "  ####   ####  ",
    " ###### ###### ",
    "###############",
    "###############",
    " ############# ",
    "   #########   ",
    "     #####     ",
    "      ###      ",
    "       #       ",
];

/// Rows of the picture fragment shown on `piece`
pub fn fragment(piece: Piece) -> Vec<String> {
    let (row, col) = piece.cell();
    let width = TILE_WIDTH as usize;
    let height = TILE_HEIGHT as usize;
    PICTURE[row * height..(row + 1) * height]
        .iter()
        .map(|line| {
            line.chars()
                .skip(col * width)
                .take(width)
                .map(|c| if c == '#' { '█' } else { ' ' })
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// A piece lying in the tray or on the board
    Piece(Piece),
    /// An empty drop zone, labelled with its number
    EmptyZone(usize),
    /// An empty tray slot
    Gap,
}

/// One puzzle cell. Focused tiles are drawn reversed.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleTile {
    pub kind: TileKind,
    pub focused: bool,
    /// Draw the piece as correctly placed
    pub correct: bool,
}

impl PuzzleTile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            focused: false,
            correct: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn correct(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }
}

impl Widget for PuzzleTile {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = match self.kind {
            TileKind::Piece(_) if self.correct => Style::default().fg(Color::LightRed).bg(Color::Rgb(60, 20, 30)),
            TileKind::Piece(_) => Style::default().fg(Color::Red).bg(Color::Rgb(40, 40, 40)),
            TileKind::EmptyZone(_) => Style::default().fg(Color::DarkGray),
            TileKind::Gap => Style::default(),
        };
        if self.focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let rows: Vec<String> = match self.kind {
            TileKind::Piece(piece) => fragment(piece),
            TileKind::EmptyZone(index) => vec![
                "·   ·".to_string(),
                format!("  {}  ", index + 1),
                "·   ·".to_string(),
            ],
            TileKind::Gap => vec![" ".repeat(TILE_WIDTH as usize); TILE_HEIGHT as usize],
        };

        for (dy, row) in rows.iter().enumerate().take(area.height as usize) {
            buf.set_stringn(
                area.x,
                area.y + dy as u16,
                row,
                area.width as usize,
                style,
            );
        }
    }
}

/// Top-left corner of zone `index` inside a board whose inner area starts at
/// `origin`, with one column and one row of spacing between zones
pub fn zone_origin(origin: Position, index: usize) -> Position {
    let row = (index / GRID) as u16;
    let col = (index % GRID) as u16;
    Position::new(
        origin.x + col * (TILE_WIDTH + 1),
        origin.y + row * (TILE_HEIGHT + 1),
    )
}
