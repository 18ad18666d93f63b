use super::types::{Direction, Point};

pub trait DirectionInput {
    /// Direction requested for the coming tick, `None` for no change.
    fn direction(&mut self) -> Option<Direction>;
}

pub trait Renderer {
    /// Receives the snake head first together with the current egg.
    fn draw(&mut self, snake: &[Point], egg: Point);
}

pub trait Ui: DirectionInput + Renderer {}

impl<T: DirectionInput + Renderer> Ui for T {}
