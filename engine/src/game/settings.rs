use serde::{Deserialize, Serialize};

use super::snake::Snake;
use super::types::{Board, Point};
use crate::config::Validate;
use crate::defaults::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, default_game_snake};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub size: usize,
    pub snake: Vec<Point>,
    #[serde(default)]
    pub iterations: Option<u32>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameSettings {
    pub fn board(&self) -> Board {
        Board::square(self.size)
    }

    /// The board, or an error for a zero size. Any positive size is playable;
    /// the tighter range of [`Validate`] only applies to settings files.
    pub(crate) fn checked_board(&self) -> Result<Board, String> {
        Board::try_new(self.size, self.size).ok_or_else(|| "size must be positive".to_string())
    }

    fn validate_size(&self) -> Result<(), String> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(format!(
                "size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        Ok(())
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        self.validate_size()?;
        if self.iterations == Some(0) {
            return Err("iterations must be at least 1 when set".to_string());
        }
        Snake::new(self.board(), &self.snake).map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            snake: default_game_snake(),
            iterations: None,
            seed: None,
        }
    }
}
