pub mod card;
pub mod puzzle_tile;
