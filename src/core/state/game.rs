use crate::{
    core::{
        cmd::Cmd,
        msg::game::{Direction, GameMsg},
    },
    domain::puzzle::{Piece, PuzzleBoard, GRID, PIECES},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Area {
    #[default]
    Tray,
    Board,
}

/// Cursor position: a tray slot or a drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    pub area: Area,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Tray(usize),
    Zone(usize),
}

/// The piece currently being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Held {
    pub piece: Piece,
    pub origin: Origin,
}

/// Puzzle widget state
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: PuzzleBoard,
    pub focus: Focus,
    pub held: Option<Held>,
    pub solved: bool,
    pub moves: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: PuzzleBoard::new(&[]),
            focus: Focus::default(),
            held: None,
            solved: false,
            moves: 0,
        }
    }
}

impl GameState {
    /// Fresh game: empty zones, all pieces in the tray in `order`
    pub fn reset(&mut self, order: &[u8]) {
        *self = Self {
            board: PuzzleBoard::new(order),
            ..Self::default()
        };
    }

    pub fn update(&mut self, msg: GameMsg) -> Vec<Cmd> {
        match msg {
            GameMsg::MoveFocus(direction) => self.move_focus(direction),
            GameMsg::SwitchArea => {
                self.focus = match self.focus.area {
                    Area::Tray => Focus {
                        area: Area::Board,
                        index: 0,
                    },
                    Area::Board => Focus {
                        area: Area::Tray,
                        index: 0,
                    },
                };
            }
            GameMsg::Select => {
                if self.held.is_some() {
                    let was_solved = self.solved;
                    self.drop_held();
                    if self.solved && !was_solved {
                        return vec![Cmd::LogInfo {
                            message: format!("puzzle solved in {} moves", self.moves),
                        }];
                    }
                } else {
                    self.pick();
                }
            }
            GameMsg::Cancel => self.cancel(),
        }
        vec![]
    }

    fn move_focus(&mut self, direction: Direction) {
        let Focus { area, index } = self.focus;
        self.focus = match (area, direction) {
            (Area::Board, Direction::Left) if index % GRID > 0 => Focus {
                area,
                index: index - 1,
            },
            (Area::Board, Direction::Right) if index % GRID < GRID - 1 => Focus {
                area,
                index: index + 1,
            },
            (Area::Board, Direction::Up) if index >= GRID => Focus {
                area,
                index: index - GRID,
            },
            (Area::Board, Direction::Down) if index + GRID < PIECES => Focus {
                area,
                index: index + GRID,
            },
            (Area::Board, Direction::Down) => Focus {
                area: Area::Tray,
                index: (index % GRID).min(self.tray_last()),
            },
            (Area::Tray, Direction::Left) => Focus {
                area,
                index: index.saturating_sub(1),
            },
            (Area::Tray, Direction::Right) => Focus {
                area,
                index: (index + 1).min(self.tray_last()),
            },
            (Area::Tray, Direction::Up) => Focus {
                area: Area::Board,
                index: GRID * (GRID - 1) + index.min(GRID - 1),
            },
            _ => self.focus,
        };
    }

    fn tray_last(&self) -> usize {
        self.board.tray().len().saturating_sub(1)
    }

    fn pick(&mut self) {
        let Focus { area, index } = self.focus;
        let taken = match area {
            Area::Tray => self
                .board
                .take_from_tray(index)
                .map(|piece| (piece, Origin::Tray(index))),
            Area::Board => self
                .board
                .take_from_zone(index)
                .map(|piece| (piece, Origin::Zone(index))),
        };
        if let Some((piece, origin)) = taken {
            self.held = Some(Held { piece, origin });
            self.clamp_tray_focus();
        }
    }

    fn drop_held(&mut self) {
        let Some(held) = self.held.take() else {
            return;
        };
        match self.focus.area {
            Area::Board => match self.board.place(self.focus.index, held.piece) {
                Ok(()) => {
                    self.moves += 1;
                    if self.board.is_solved() {
                        self.solved = true;
                    }
                }
                // occupied zone: keep dragging
                Err(_) => self.held = Some(held),
            },
            Area::Tray => {
                self.board.return_to_tray(held.piece);
                self.moves += 1;
            }
        }
    }

    fn cancel(&mut self) {
        let Some(held) = self.held.take() else {
            return;
        };
        match held.origin {
            Origin::Tray(index) => self.board.insert_into_tray(index, held.piece),
            Origin::Zone(index) => {
                if let Err(piece) = self.board.place(index, held.piece) {
                    self.board.return_to_tray(piece);
                }
            }
        }
    }

    fn clamp_tray_focus(&mut self) {
        if self.focus.area == Area::Tray {
            self.focus.index = self.focus.index.min(self.tray_last());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ordered_game() -> GameState {
        let mut game = GameState::default();
        game.reset(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        game
    }

    fn focus(game: &mut GameState, area: Area, index: usize) {
        game.focus = Focus { area, index };
    }

    #[test]
    fn pick_and_drop_into_empty_zone() {
        let mut game = ordered_game();
        game.update(GameMsg::Select);
        assert_eq!(
            game.held,
            Some(Held {
                piece: Piece(0),
                origin: Origin::Tray(0)
            })
        );
        assert_eq!(game.board.tray().len(), 8);

        focus(&mut game, Area::Board, 0);
        game.update(GameMsg::Select);
        assert!(game.held.is_none());
        assert_eq!(game.board.zone(0), Some(Piece(0)));
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn dropping_on_occupied_zone_keeps_piece_held() {
        let mut game = ordered_game();
        game.update(GameMsg::Select);
        focus(&mut game, Area::Board, 4);
        game.update(GameMsg::Select);

        focus(&mut game, Area::Tray, 0);
        game.update(GameMsg::Select);
        focus(&mut game, Area::Board, 4);
        game.update(GameMsg::Select);

        assert_eq!(game.held.map(|h| h.piece), Some(Piece(1)));
        assert_eq!(game.board.zone(4), Some(Piece(0)));
    }

    #[test]
    fn dropping_on_tray_returns_piece_to_the_end() {
        let mut game = ordered_game();
        game.update(GameMsg::Select);
        focus(&mut game, Area::Tray, 3);
        game.update(GameMsg::Select);
        assert_eq!(game.board.tray().last(), Some(&Piece(0)));
        assert_eq!(game.board.tray().len(), PIECES);
    }

    #[test]
    fn cancel_restores_origin() {
        let mut game = ordered_game();
        focus(&mut game, Area::Tray, 2);
        game.update(GameMsg::Select);
        game.update(GameMsg::Cancel);
        assert_eq!(game.board.tray()[2], Piece(2));
        assert!(game.held.is_none());
    }

    #[test]
    fn placing_every_piece_correctly_solves() {
        let mut game = ordered_game();
        let mut last = vec![];
        for zone in 0..PIECES {
            focus(&mut game, Area::Tray, 0);
            game.update(GameMsg::Select);
            focus(&mut game, Area::Board, zone);
            last = game.update(GameMsg::Select);
        }
        assert!(game.solved);
        assert!(game.board.tray().is_empty());
        assert_eq!(
            last,
            vec![Cmd::LogInfo {
                message: "puzzle solved in 9 moves".to_string()
            }]
        );
    }

    #[test]
    fn focus_moves_within_grid_and_into_tray() {
        let mut game = ordered_game();
        focus(&mut game, Area::Board, 0);
        game.update(GameMsg::MoveFocus(Direction::Left));
        assert_eq!(game.focus.index, 0);
        game.update(GameMsg::MoveFocus(Direction::Right));
        game.update(GameMsg::MoveFocus(Direction::Down));
        assert_eq!(game.focus, Focus { area: Area::Board, index: 4 });
        game.update(GameMsg::MoveFocus(Direction::Down));
        game.update(GameMsg::MoveFocus(Direction::Down));
        assert_eq!(game.focus, Focus { area: Area::Tray, index: 1 });
        game.update(GameMsg::MoveFocus(Direction::Up));
        assert_eq!(game.focus, Focus { area: Area::Board, index: 7 });
    }

    #[test]
    fn reset_discards_progress() {
        let mut game = ordered_game();
        game.update(GameMsg::Select);
        focus(&mut game, Area::Board, 0);
        game.update(GameMsg::Select);

        game.reset(&[8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert!(game.board.zones().iter().all(Option::is_none));
        assert_eq!(game.board.tray()[0], Piece(8));
        assert_eq!(game.moves, 0);
        assert!(!game.solved);
    }
}
