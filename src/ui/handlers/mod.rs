//! Handler modules for keyboard input, game flow and the score board.

mod game_handler;
mod input_handler;
mod score_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
pub use score_handler::ScoreHandler;
