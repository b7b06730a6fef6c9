pub(crate) mod board;
pub mod hex;
pub mod movegen;
pub(crate) mod notation;
pub mod outcome;
pub mod piece;
pub(crate) mod rules;
pub mod state;

pub use board::{Board, Stack};
pub use hex::{parity_ok, Direction, Hex};
pub use notation::{format_move, is_pillbug_move, load_trajectory, parse_move, replay, save_trajectory, GameTypeString, MoveString, NextTo, Turn, TurnString};
pub use outcome::{has_lost, outcome, winner, Outcome};
pub use piece::{Color, Piece, PieceKind, Reserves};
pub use rules::{mutual_lock, transfers};
pub use state::{apply, GameState, Move};
