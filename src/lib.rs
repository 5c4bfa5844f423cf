// Logging goes through the `log` facade when the `logging` feature is on
// and compiles away otherwise.
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
    };
}

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
    };
}

pub mod board;

pub use board::{Bitboard, Board, BoardBuilder, Color, GameStatus, Move, Piece, Square};
