use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis_delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_reversal_of(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn from_delta(dx: i64, dy: i64) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Heading of a snake whose head sits at `head` right after leaving `neck`.
    ///
    /// A raw delta of `dimension - 1` means the snake crossed an edge, so it is
    /// folded back to the opposite unit step before mapping.
    pub fn infer(board: &Board, head: Point, neck: Point) -> Option<Direction> {
        let dx = wrap_delta(head.x as i64 - neck.x as i64, board.width as i64);
        let dy = wrap_delta(head.y as i64 - neck.y as i64, board.height as i64);
        Self::from_delta(dx, dy)
    }
}

fn wrap_delta(delta: i64, dimension: i64) -> i64 {
    if delta == 0 {
        0
    } else if delta == dimension - 1 {
        -1
    } else if delta == 1 - dimension {
        1
    } else {
        delta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
}

impl Board {
    /// # Panics
    ///
    /// Panics if either dimension is zero. Use [`Board::try_new`] for sizes
    /// that come from outside the program.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self { width, height }
    }

    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max {
            0
        } else {
            value + 1
        }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 {
            max - 1
        } else {
            value - 1
        }
    }

    /// Neighbour of `from` one step along `direction`, wrapping at the edges.
    pub fn step(&self, from: Point, direction: Direction) -> Point {
        match direction {
            Direction::Up => Point::new(from.x, Self::wrapping_dec(from.y, self.height)),
            Direction::Down => Point::new(from.x, Self::wrapping_inc(from.y, self.height)),
            Direction::Left => Point::new(Self::wrapping_dec(from.x, self.width), from.y),
            Direction::Right => Point::new(Self::wrapping_inc(from.x, self.width), from.y),
        }
    }

    /// Manhattan distance on the torus.
    pub fn distance(&self, a: Point, b: Point) -> usize {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.min(self.width - dx) + dy.min(self.height - dy)
    }
}
