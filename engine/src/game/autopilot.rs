use super::types::{Board, Direction, Point};
use super::ui::{DirectionInput, Renderer};
use crate::session_rng::SessionRng;

struct Frame {
    snake: Vec<Point>,
    egg: Point,
}

/// Computer player that heads for the egg.
///
/// It sees the game only through what is drawn, so it remembers the latest
/// frame and answers the next direction request from it. Ties between equally
/// close cells are broken at random.
pub struct Autopilot {
    board: Board,
    rng: SessionRng,
    frame: Option<Frame>,
}

impl Autopilot {
    pub fn new(board: Board, rng: SessionRng) -> Self {
        Self {
            board,
            rng,
            frame: None,
        }
    }

    pub fn calculate_move(&mut self) -> Option<Direction> {
        let frame = self.frame.as_ref()?;
        let head = *frame.snake.first()?;
        let neck = *frame.snake.get(1)?;
        let current_direction = Direction::infer(&self.board, head, neck)?;

        let candidates: Vec<(Direction, usize)> = Self::get_valid_directions(current_direction)
            .into_iter()
            .map(|dir| (dir, self.board.step(head, dir)))
            .filter(|&(_, next_pos)| Self::is_safe_position(next_pos, frame))
            .map(|(dir, next_pos)| (dir, self.board.distance(next_pos, frame.egg)))
            .collect();

        let best_distance = candidates.iter().map(|&(_, distance)| distance).min()?;
        let best_directions: Vec<Direction> = candidates
            .into_iter()
            .filter(|&(_, distance)| distance == best_distance)
            .map(|(dir, _)| dir)
            .collect();

        let idx = self.rng.random_range(0..best_directions.len());
        Some(best_directions[idx])
    }

    fn get_valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_reversal_of(&current))
            .collect()
    }

    // the tail moves out of the way unless the egg is eaten, and the egg is
    // never on the tail
    fn is_safe_position(pos: Point, frame: &Frame) -> bool {
        match frame.snake.iter().position(|p| *p == pos) {
            None => true,
            Some(index) => index == frame.snake.len() - 1,
        }
    }
}

impl DirectionInput for Autopilot {
    fn direction(&mut self) -> Option<Direction> {
        self.calculate_move()
    }
}

impl Renderer for Autopilot {
    fn draw(&mut self, snake: &[Point], egg: Point) {
        self.frame = Some(Frame {
            snake: snake.to_vec(),
            egg,
        });
    }
}
