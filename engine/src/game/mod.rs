mod autopilot;
mod egg;
mod game_loop;
mod settings;
mod snake;
mod types;
mod ui;

pub use autopilot::Autopilot;
pub use egg::{EggCreator, RandomEggCreator, ScriptedEggCreator};
pub use game_loop::{Game, GameError, GameStatus, GameSummary};
pub use settings::GameSettings;
pub use snake::{BitesItselfError, InvalidSnakeError, Snake};
pub use types::{Board, Direction, Point};
pub use ui::{DirectionInput, Renderer, Ui};
