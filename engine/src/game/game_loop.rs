use std::fmt;

use crate::log;
use crate::session_rng::SessionRng;
use super::egg::{EggCreator, RandomEggCreator};
use super::settings::GameSettings;
use super::snake::{InvalidSnakeError, Snake};
use super::types::{Board, Point};
use super::ui::Ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
    Exhausted,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub status: GameStatus,
    pub ticks: u64,
    pub snake_length: usize,
}

#[derive(Debug)]
pub enum GameError {
    InvalidSettings(String),
    InvalidSnake(InvalidSnakeError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSettings(e) => write!(f, "Invalid game settings: {}", e),
            GameError::InvalidSnake(e) => write!(f, "Invalid snake: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<InvalidSnakeError> for GameError {
    fn from(e: InvalidSnakeError) -> Self {
        GameError::InvalidSnake(e)
    }
}

pub struct Game<U: Ui> {
    board: Board,
    snake: Snake,
    egg_creator: Box<dyn EggCreator>,
    egg: Option<Point>,
    remaining_iterations: Option<u32>,
    status: GameStatus,
    ticks: u64,
    ui: U,
}

impl<U: Ui> Game<U> {
    pub fn new(settings: &GameSettings, ui: U) -> Result<Self, GameError> {
        let board = settings
            .checked_board()
            .map_err(GameError::InvalidSettings)?;
        let rng = SessionRng::from_seed(settings.seed);
        log!("Egg placement seed: {}", rng.seed());
        let egg_creator = RandomEggCreator::new(board, rng);
        Self::with_egg_creator(settings, ui, Box::new(egg_creator))
    }

    pub fn with_egg_creator(
        settings: &GameSettings,
        ui: U,
        egg_creator: Box<dyn EggCreator>,
    ) -> Result<Self, GameError> {
        let board = settings
            .checked_board()
            .map_err(GameError::InvalidSettings)?;
        let snake = Snake::new(board, &settings.snake)?;

        Ok(Self {
            board,
            snake,
            egg_creator,
            egg: None,
            remaining_iterations: settings.iterations,
            status: GameStatus::Running,
            ticks: 0,
            ui,
        })
    }

    /// Plays ticks until the snake bites itself, fills the board, or the
    /// iteration budget runs out. Returns `false` only when the snake bit itself.
    ///
    /// A game is played once; calling `run` again reports the stored outcome.
    pub fn run(&mut self) -> bool {
        if self.status == GameStatus::Running {
            self.status = self.play();
            log!(
                "Game over: {:?} after {} ticks, snake length {}",
                self.status,
                self.ticks,
                self.snake.len()
            );
        }
        self.status != GameStatus::Lost
    }

    fn play(&mut self) -> GameStatus {
        // no free cell left to put an egg on
        if self.snake.fills_board() {
            return GameStatus::Won;
        }

        let mut egg = self.place_egg();
        loop {
            self.ui.draw(&self.snake.positions(), egg);
            self.ticks += 1;

            self.snake.set_direction(self.ui.direction());
            let egg_eaten = self.snake.will_eat_egg(egg);

            if let Err(e) = self.snake.move_snake(egg_eaten) {
                log!("Tick {}: {}", self.ticks, e);
                return GameStatus::Lost;
            }

            if self.snake.fills_board() {
                log!("Tick {}: snake fills the board", self.ticks);
                return GameStatus::Won;
            }

            if egg_eaten {
                log!(
                    "Tick {}: ate egg at {}. Length: {}",
                    self.ticks,
                    egg,
                    self.snake.len()
                );
                egg = self.place_egg();
            }

            if let Some(remaining) = self.remaining_iterations.as_mut() {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    return GameStatus::Exhausted;
                }
            }
        }
    }

    /// Asks the egg creator until it offers a free cell.
    ///
    /// Only called while at least one cell is free.
    fn place_egg(&mut self) -> Point {
        loop {
            let candidate = self.egg_creator.create();
            if self.board.contains(candidate) && !self.snake.contains(candidate) {
                log!("Egg placed at {}", candidate);
                self.egg = Some(candidate);
                return candidate;
            }
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn egg(&self) -> Option<Point> {
        self.egg
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn remaining_iterations(&self) -> Option<u32> {
        self.remaining_iterations
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            ticks: self.ticks,
            snake_length: self.snake.len(),
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }
}
