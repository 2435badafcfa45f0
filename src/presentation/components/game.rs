use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        game::{Area, GameState},
        AppState,
    },
    domain::{
        puzzle::{GRID, PIECES},
        view::ViewId,
    },
    presentation::widgets::{
        card::{card, centered},
        puzzle_tile::{zone_origin, PuzzleTile, TileKind, TILE_HEIGHT, TILE_WIDTH},
    },
};

const BOARD_WIDTH: u16 = GRID as u16 * (TILE_WIDTH + 1) + 1;
const BOARD_HEIGHT: u16 = GRID as u16 * (TILE_HEIGHT + 1) + 1;
const TRAY_WIDTH: u16 = PIECES as u16 * (TILE_WIDTH + 1) + 1;
const TRAY_HEIGHT: u16 = TILE_HEIGHT + 2;

/// The 3x3 puzzle: drop zones on top, the tray of loose pieces below
#[derive(Debug, Clone, Default)]
pub struct GameComponent;

impl GameComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn status_line(game: &GameState) -> String {
        if game.solved {
            return format!("You did it! ♥  ({} moves)", game.moves);
        }
        match game.held {
            Some(held) => format!("Holding piece {}", held.piece.index() + 1),
            None => format!(
                "{}/{} in place  ({} moves)",
                game.board.correct_count(),
                PIECES,
                game.moves
            ),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let game = &state.game;
        let area = centered(area, TRAY_WIDTH + 4, BOARD_HEIGHT + TRAY_HEIGHT + 5);
        let block = card(ViewId::Game.title());
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [board_row, tray_row, status_row] = Layout::vertical([
            Constraint::Length(BOARD_HEIGHT + 1),
            Constraint::Length(TRAY_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_board(game, frame, centered(board_row, BOARD_WIDTH + 2, BOARD_HEIGHT + 1));
        self.render_tray(game, frame, centered(tray_row, TRAY_WIDTH + 2, TRAY_HEIGHT));

        let status_style = if game.solved {
            Style::default().fg(Color::LightGreen).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Self::status_line(game))
                .alignment(Alignment::Center)
                .style(status_style),
            status_row,
        );
    }

    fn render_board(&self, game: &GameState, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" board ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let origin = Position::new(inner.x, inner.y);
        for (index, zone) in game.board.zones().iter().enumerate() {
            let at = zone_origin(origin, index);
            let kind = match zone {
                Some(piece) => TileKind::Piece(*piece),
                None => TileKind::EmptyZone(index),
            };
            let tile = PuzzleTile::new(kind)
                .focused(game.focus.area == Area::Board && game.focus.index == index)
                .correct(zone.is_some_and(|piece| piece.index() == index));
            frame.render_widget(tile, Rect::new(at.x, at.y, TILE_WIDTH, TILE_HEIGHT).intersection(inner));
        }
    }

    fn render_tray(&self, game: &GameState, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" pieces ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tray = game.board.tray();
        let slots = tray.len().max(1);
        for index in 0..slots {
            let kind = tray.get(index).map_or(TileKind::Gap, |piece| TileKind::Piece(*piece));
            let x = inner.x + index as u16 * (TILE_WIDTH + 1);
            let tile = PuzzleTile::new(kind)
                .focused(game.focus.area == Area::Tray && game.focus.index == index);
            frame.render_widget(tile, Rect::new(x, inner.y, TILE_WIDTH, TILE_HEIGHT).intersection(inner));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::game::GameMsg;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_line_tracks_progress() {
        let mut game = GameState::default();
        game.reset(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(GameComponent::status_line(&game), "0/9 in place  (0 moves)");

        game.update(GameMsg::Select);
        assert_eq!(GameComponent::status_line(&game), "Holding piece 1");
    }
}
