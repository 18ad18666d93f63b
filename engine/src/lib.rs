pub mod config;
pub mod game;
pub mod logger;
pub mod session_rng;
mod defaults;

pub use game::{
    Autopilot, BitesItselfError, Board, Direction, DirectionInput, EggCreator, Game, GameError,
    GameSettings, GameStatus, GameSummary, InvalidSnakeError, Point, RandomEggCreator,
    Renderer, ScriptedEggCreator, Snake, Ui,
};
pub use session_rng::SessionRng;
