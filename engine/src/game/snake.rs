use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::types::{Board, Direction, Point};
use crate::defaults::default_snake_body;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidSnakeError {
    TooShort { length: usize },
    OutOfBounds { position: Point },
    NotAdjacent { head: Point, neck: Point },
    Duplicate { position: Point },
}

impl fmt::Display for InvalidSnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSnakeError::TooShort { .. } => {
                write!(f, "snake should have a length of at least 2")
            }
            InvalidSnakeError::OutOfBounds { position } => {
                write!(f, "snake segment {} is outside the board", position)
            }
            InvalidSnakeError::NotAdjacent { head, neck } => {
                write!(f, "snake head {} is not next to {}", head, neck)
            }
            InvalidSnakeError::Duplicate { position } => {
                write!(f, "snake occupies {} more than once", position)
            }
        }
    }
}

impl std::error::Error for InvalidSnakeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitesItselfError {
    pub position: Point,
}

impl fmt::Display for BitesItselfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snake bites itself at {}", self.position)
    }
}

impl std::error::Error for BitesItselfError {}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    direction: Direction,
    board: Board,
}

impl Snake {
    pub fn new(board: Board, positions: &[Point]) -> Result<Self, InvalidSnakeError> {
        if positions.len() < 2 {
            return Err(InvalidSnakeError::TooShort {
                length: positions.len(),
            });
        }
        if let Some(&position) = positions.iter().find(|p| !board.contains(**p)) {
            return Err(InvalidSnakeError::OutOfBounds { position });
        }

        let mut body_set = HashSet::with_capacity(positions.len());
        if let Some(&position) = positions.iter().find(|p| !body_set.insert(**p)) {
            return Err(InvalidSnakeError::Duplicate { position });
        }

        let (head, neck) = (positions[0], positions[1]);
        let direction = Direction::infer(&board, head, neck)
            .ok_or(InvalidSnakeError::NotAdjacent { head, neck })?;

        Ok(Self {
            body: positions.iter().copied().collect(),
            body_set,
            direction,
            board,
        })
    }

    pub fn with_default_body(board: Board) -> Result<Self, InvalidSnakeError> {
        Self::new(board, &default_snake_body())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turns the snake. `None` and 180° turns leave the heading as it is.
    pub fn set_direction(&mut self, requested: Option<Direction>) {
        if let Some(direction) = requested
            && !direction.is_reversal_of(&self.direction)
        {
            self.direction = direction;
        }
    }

    /// Advances the head one cell.
    ///
    /// The tail is dropped before the collision check, so moving into the cell
    /// the tail is leaving is legal. On collision the dropped tail stays gone and
    /// no head is added.
    pub fn move_snake(&mut self, keep_tail: bool) -> Result<(), BitesItselfError> {
        if !keep_tail && let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }

        let new_head = self.next_head();
        if self.body_set.contains(&new_head) {
            return Err(BitesItselfError { position: new_head });
        }

        self.body.push_front(new_head);
        self.body_set.insert(new_head);
        Ok(())
    }

    pub fn will_eat_egg(&self, egg: Point) -> bool {
        self.next_head() == egg
    }

    pub fn next_head(&self) -> Point {
        self.board.step(self.head(), self.direction)
    }

    pub fn fills_board(&self) -> bool {
        self.len() == self.board.size()
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.body.iter()
    }

    pub fn positions(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn board(&self) -> Board {
        self.board
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = &'a Point;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(usize, usize)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn snake(board: Board, coords: &[(usize, usize)]) -> Snake {
        Snake::new(board, &points(coords)).unwrap()
    }

    #[test]
    fn test_create_default_positions() {
        let snake = Snake::with_default_body(Board::new(4, 4)).unwrap();
        assert_eq!(snake.positions(), points(&[(1, 0), (0, 0)]));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_create_must_have_two_or_more_positions() {
        let board = Board::new(4, 4);
        let err = Snake::new(board, &[]).unwrap_err();
        assert_eq!(err, InvalidSnakeError::TooShort { length: 0 });
        assert_eq!(err.to_string(), "snake should have a length of at least 2");

        let err = Snake::new(board, &points(&[(0, 0)])).unwrap_err();
        assert_eq!(err, InvalidSnakeError::TooShort { length: 1 });
    }

    #[test]
    fn test_create_rejects_out_of_bounds_segment() {
        let err = Snake::new(Board::new(4, 4), &points(&[(1, 0), (0, 0), (0, 4)])).unwrap_err();
        assert_eq!(
            err,
            InvalidSnakeError::OutOfBounds {
                position: Point::new(0, 4)
            }
        );
    }

    #[test]
    fn test_create_rejects_detached_head() {
        let err = Snake::new(Board::new(4, 4), &points(&[(2, 2), (0, 0)])).unwrap_err();
        assert!(matches!(err, InvalidSnakeError::NotAdjacent { .. }));
    }

    #[test]
    fn test_create_rejects_repeated_cell() {
        let err = Snake::new(Board::square(20), &points(&[(1, 0), (0, 0), (1, 0)])).unwrap_err();
        assert_eq!(
            err,
            InvalidSnakeError::Duplicate {
                position: Point::new(1, 0)
            }
        );

        let err = Snake::new(Board::new(4, 4), &points(&[(1, 0), (0, 0), (0, 1), (0, 0)])).unwrap_err();
        assert_eq!(
            err,
            InvalidSnakeError::Duplicate {
                position: Point::new(0, 0)
            }
        );
    }

    #[test]
    fn test_compute_direction() {
        let board = Board::new(4, 4);
        assert_eq!(snake(board, &[(1, 0), (0, 0)]).direction(), Direction::Right);
        assert_eq!(snake(board, &[(0, 0), (1, 0)]).direction(), Direction::Left);
        assert_eq!(snake(board, &[(0, 0), (0, 1)]).direction(), Direction::Up);
        assert_eq!(snake(board, &[(0, 1), (0, 0)]).direction(), Direction::Down);
        assert_eq!(snake(board, &[(3, 0), (0, 0)]).direction(), Direction::Left);
        assert_eq!(snake(board, &[(0, 0), (3, 0)]).direction(), Direction::Right);
        assert_eq!(snake(board, &[(0, 3), (0, 0)]).direction(), Direction::Up);
        assert_eq!(snake(board, &[(0, 0), (0, 3)]).direction(), Direction::Down);
    }

    #[test]
    fn test_move_in_each_direction() {
        let board = Board::new(4, 4);
        let cases = [
            (&[(1, 0), (0, 0)], &[(2, 0), (1, 0)]),
            (&[(1, 0), (2, 0)], &[(0, 0), (1, 0)]),
            (&[(0, 1), (0, 2)], &[(0, 0), (0, 1)]),
            (&[(0, 1), (0, 0)], &[(0, 2), (0, 1)]),
        ];
        for (start, expected) in cases {
            let mut snake = snake(board, start);
            snake.move_snake(false).unwrap();
            assert_eq!(snake.positions(), points(expected));
        }
    }

    #[test]
    fn test_move_keep_tail() {
        let mut snake = snake(Board::new(4, 4), &[(1, 0), (0, 0)]);
        snake.move_snake(true).unwrap();
        assert_eq!(snake.positions(), points(&[(2, 0), (1, 0), (0, 0)]));
    }

    #[test]
    fn test_repeated_moves_wrap_around() {
        let board = Board::new(4, 6);
        let mut snake = snake(board, &[(0, 1), (0, 0)]);
        for step in 1..=12 {
            snake.move_snake(false).unwrap();
            assert_eq!(snake.head(), Point::new(0, (1 + step) % 6));
            assert_eq!(snake.len(), 2);
        }
    }

    #[test]
    fn test_loop_over_edges() {
        let board = Board::new(4, 6);
        let cases = [
            (&[(0, 0), (1, 0)], &[(3, 0), (0, 0)]),
            (&[(3, 0), (2, 0)], &[(0, 0), (3, 0)]),
            (&[(0, 0), (0, 1)], &[(0, 5), (0, 0)]),
            (&[(0, 5), (0, 4)], &[(0, 0), (0, 5)]),
        ];
        for (start, expected) in cases {
            let mut snake = snake(board, start);
            snake.move_snake(false).unwrap();
            assert_eq!(snake.positions(), points(expected));
        }
    }

    #[test]
    fn test_reversal_is_ignored() {
        let board = Board::new(4, 6);
        let mut left = snake(board, &[(0, 0), (1, 0)]);
        left.set_direction(Some(Direction::Right));
        assert_eq!(left.direction(), Direction::Left);
        left.move_snake(false).unwrap();
        assert_eq!(left.positions(), points(&[(3, 0), (0, 0)]));

        let mut up = snake(board, &[(0, 0), (0, 1)]);
        up.set_direction(Some(Direction::Down));
        assert_eq!(up.direction(), Direction::Up);
    }

    #[test]
    fn test_no_change_keeps_heading() {
        let mut snake = snake(Board::new(4, 6), &[(0, 0), (1, 0)]);
        snake.set_direction(None);
        snake.move_snake(false).unwrap();
        assert_eq!(snake.positions(), points(&[(3, 0), (0, 0)]));
    }

    #[test]
    fn test_perpendicular_turn_is_applied() {
        let mut snake = snake(Board::new(4, 4), &[(1, 0), (0, 0)]);
        snake.set_direction(Some(Direction::Down));
        assert_eq!(snake.direction(), Direction::Down);
        snake.move_snake(false).unwrap();
        assert_eq!(snake.positions(), points(&[(1, 1), (1, 0)]));
    }

    #[test]
    fn test_bite_itself() {
        let mut snake = snake(Board::new(4, 4), &[(0, 1), (0, 0), (1, 0), (1, 1), (1, 2)]);
        snake.set_direction(Some(Direction::Right));
        let err = snake.move_snake(false).unwrap_err();
        assert_eq!(err.position, Point::new(1, 1));
        // tail already dropped, no head inserted
        assert_eq!(snake.positions(), points(&[(0, 1), (0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn test_chasing_own_tail_is_not_a_bite() {
        let mut snake = snake(Board::new(2, 1), &[(1, 0), (0, 0)]);
        snake.move_snake(false).unwrap();
        assert_eq!(snake.positions(), points(&[(0, 0), (1, 0)]));
    }

    #[test]
    fn test_chasing_own_tail_while_growing_is_a_bite() {
        let mut snake = snake(Board::new(2, 1), &[(1, 0), (0, 0)]);
        assert!(snake.move_snake(true).is_err());
    }

    #[test]
    fn test_fills_board() {
        let board = Board::new(2, 3);
        let small = snake(board, &[(0, 0), (1, 0)]);
        let big = snake(board, &[(0, 2), (0, 1), (0, 0), (1, 0), (1, 1), (1, 2)]);
        assert!(!small.fills_board());
        assert!(big.fills_board());
    }

    #[test]
    fn test_will_eat_egg_is_pure() {
        let snake = snake(Board::new(4, 4), &[(1, 0), (0, 0)]);
        let before = snake.positions();
        assert!(snake.will_eat_egg(Point::new(2, 0)));
        assert!(snake.will_eat_egg(Point::new(2, 0)));
        assert!(!snake.will_eat_egg(Point::new(1, 1)));
        assert_eq!(snake.positions(), before);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_iter_and_length() {
        let snake = snake(Board::new(4, 4), &[(0, 1), (0, 0)]);
        let collected: Vec<Point> = (&snake).into_iter().copied().collect();
        assert_eq!(collected, points(&[(0, 1), (0, 0)]));
        assert_eq!(snake.len(), 2);
        assert!(snake.contains(Point::new(0, 0)));
        assert_eq!(snake.tail(), Point::new(0, 0));
    }
}
