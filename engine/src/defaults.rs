use crate::game::Point;

pub const DEFAULT_BOARD_SIZE: usize = 20;
pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 100;

pub fn default_game_snake() -> Vec<Point> {
    vec![Point::new(7, 5), Point::new(6, 5), Point::new(5, 5)]
}

pub fn default_snake_body() -> Vec<Point> {
    vec![Point::new(1, 0), Point::new(0, 0)]
}
