use super::types::{Board, Point};
use crate::session_rng::SessionRng;

/// Source of candidate egg positions.
///
/// Candidates may land on the snake; the game rejects those and asks again.
pub trait EggCreator {
    fn create(&mut self) -> Point;
}

pub struct RandomEggCreator {
    board: Board,
    rng: SessionRng,
}

impl RandomEggCreator {
    pub fn new(board: Board, rng: SessionRng) -> Self {
        Self { board, rng }
    }

    pub fn from_random(board: Board) -> Self {
        Self::new(board, SessionRng::from_random())
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl EggCreator for RandomEggCreator {
    fn create(&mut self) -> Point {
        let x = self.rng.random_range(0..self.board.width);
        let y = self.rng.random_range(0..self.board.height);
        Point::new(x, y)
    }
}

/// Replays a fixed list of candidates, then keeps returning the last one.
pub struct ScriptedEggCreator {
    candidates: Vec<Point>,
    next_index: usize,
}

impl ScriptedEggCreator {
    pub fn new(candidates: Vec<Point>) -> Self {
        Self {
            candidates,
            next_index: 0,
        }
    }

    pub fn fixed(position: Point) -> Self {
        Self::new(vec![position])
    }

    pub fn calls(&self) -> usize {
        self.next_index
    }
}

impl EggCreator for ScriptedEggCreator {
    fn create(&mut self) -> Point {
        let index = self.next_index.min(self.candidates.len().saturating_sub(1));
        self.next_index += 1;
        self.candidates.get(index).copied().unwrap_or(Point::new(0, 0))
    }
}
