//! 3x3 picture puzzle: nine pieces, nine drop zones, each piece belongs in
//! the zone with its own index.

use serde::{Deserialize, Serialize};

pub const GRID: usize = 3;
pub const PIECES: usize = GRID * GRID;

/// A puzzle piece, identified by the zone it belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece(pub u8);

impl Piece {
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// (row, col) of this piece in the picture
    pub fn cell(&self) -> (usize, usize) {
        (self.index() / GRID, self.index() % GRID)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleBoard {
    tray: Vec<Piece>,
    zones: [Option<Piece>; PIECES],
}

impl PuzzleBoard {
    /// Board with empty zones and the tray filled in `order`.
    /// Indices outside the picture or repeated ones are dropped.
    pub fn new(order: &[u8]) -> Self {
        let mut tray: Vec<Piece> = Vec::with_capacity(PIECES);
        for &i in order {
            let piece = Piece(i);
            if piece.index() < PIECES && !tray.contains(&piece) {
                tray.push(piece);
            }
        }
        Self {
            tray,
            zones: [None; PIECES],
        }
    }

    pub fn tray(&self) -> &[Piece] {
        &self.tray
    }

    pub fn zones(&self) -> &[Option<Piece>; PIECES] {
        &self.zones
    }

    pub fn zone(&self, index: usize) -> Option<Piece> {
        self.zones.get(index).copied().flatten()
    }

    pub fn take_from_tray(&mut self, index: usize) -> Option<Piece> {
        (index < self.tray.len()).then(|| self.tray.remove(index))
    }

    pub fn take_from_zone(&mut self, index: usize) -> Option<Piece> {
        self.zones.get_mut(index).and_then(Option::take)
    }

    /// Puts `piece` into an empty zone; an occupied or missing zone hands it back.
    pub fn place(&mut self, index: usize, piece: Piece) -> Result<(), Piece> {
        match self.zones.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(piece);
                Ok(())
            }
            _ => Err(piece),
        }
    }

    pub fn return_to_tray(&mut self, piece: Piece) {
        self.tray.push(piece);
    }

    pub fn insert_into_tray(&mut self, index: usize, piece: Piece) {
        let at = index.min(self.tray.len());
        self.tray.insert(at, piece);
    }

    pub fn correct_count(&self) -> usize {
        self.zones
            .iter()
            .enumerate()
            .filter(|(i, zone)| matches!(zone, Some(p) if p.index() == *i))
            .count()
    }

    pub fn is_solved(&self) -> bool {
        self.correct_count() == PIECES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ordered() -> Vec<u8> {
        (0..PIECES as u8).collect()
    }

    #[test]
    fn new_board_has_every_piece_in_tray() {
        let board = PuzzleBoard::new(&[4, 2, 8, 0, 1, 3, 5, 7, 6]);
        assert_eq!(board.tray().len(), PIECES);
        assert_eq!(board.tray()[0], Piece(4));
        assert!(board.zones().iter().all(Option::is_none));
        assert!(!board.is_solved());
    }

    #[test]
    fn new_board_ignores_bad_indices() {
        let board = PuzzleBoard::new(&[0, 0, 9, 42, 1]);
        assert_eq!(board.tray(), &[Piece(0), Piece(1)]);
    }

    #[test]
    fn occupied_zone_rejects_piece() {
        let mut board = PuzzleBoard::new(&ordered());
        let first = board.take_from_tray(0).expect("piece 0");
        let second = board.take_from_tray(0).expect("piece 1");
        assert_eq!(board.place(4, first), Ok(()));
        assert_eq!(board.place(4, second), Err(second));
        assert_eq!(board.place(PIECES, second), Err(second));
        assert_eq!(board.zone(4), Some(first));
    }

    #[test]
    fn solved_only_when_every_zone_holds_its_piece() {
        let mut board = PuzzleBoard::new(&ordered());
        for i in 0..PIECES {
            let piece = board.take_from_tray(0).expect("piece available");
            board.place(i, piece).expect("zone empty");
        }
        assert!(board.is_solved());

        let a = board.take_from_zone(0).expect("zone 0");
        let b = board.take_from_zone(1).expect("zone 1");
        board.place(0, b).expect("zone 0 empty");
        board.place(1, a).expect("zone 1 empty");
        assert_eq!(board.correct_count(), PIECES - 2);
        assert!(!board.is_solved());
    }

    #[test]
    fn piece_cell_is_row_major() {
        assert_eq!(Piece(0).cell(), (0, 0));
        assert_eq!(Piece(5).cell(), (1, 2));
        assert_eq!(Piece(7).cell(), (2, 1));
    }
}
