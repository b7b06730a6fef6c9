mod game_type;
mod moves;
mod replay;
mod trajectory;
mod turn;

pub use game_type::GameTypeString;
pub use moves::{format_move, is_pillbug_move, parse_move, MoveString, NextTo};
pub use replay::replay;
pub use trajectory::{load_trajectory, save_trajectory};
pub use turn::{Turn, TurnString};
