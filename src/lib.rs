//! Crate root module declarations for the chess movement quiz.
//!
//! The board and pathfinding modules form the engine: pure functions that
//! answer how many moves a knight or bishop needs between two squares
//! (with a concrete move-by-move path) and which color a square is. The
//! quiz modules wrap the engine in rounds, guess checking with escalating
//! hints, and an interactive stdin shell.

pub mod board {
    pub mod chess_types;
}

pub mod pathfinding {
    pub mod bishop_paths;
    pub mod knight_paths;
}

pub mod quiz {
    pub mod feedback;
    pub mod session;
    pub mod shell;
}

pub mod utils {
    pub mod algebraic;
}
