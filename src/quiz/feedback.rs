//! Quiz feedback text: escalating retry hints and result messages.
//!
//! Pure attempt-count to message mappings. The ladder starts generic and
//! gets more concrete; from the fourth wrong answer on it counts the tries.

use crate::board::chess_types::Color;

/// Which of the three quiz games a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Knight,
    Bishop,
    SquareColor,
}

impl GameKind {
    /// Subject name used in result messages.
    pub const fn piece_name(self) -> &'static str {
        match self {
            GameKind::Knight => "Knight",
            GameKind::Bishop => "Bishop",
            GameKind::SquareColor => "Square",
        }
    }
}

/// Hint for the `attempt`-th wrong answer in a round (1-based).
pub fn incorrect_hint(kind: GameKind, attempt: u32) -> String {
    match (kind, attempt) {
        (_, 0 | 1) => "Incorrect. Try again.".to_string(),
        (GameKind::Knight, 2) => {
            "Still incorrect. Think about the knight's L-shaped moves.".to_string()
        }
        (GameKind::Knight, 3) => {
            "Not quite right. Remember, knights move in an L: 2 squares in one direction, 1 in perpendicular."
                .to_string()
        }
        (GameKind::Knight, _) => {
            format!("Incorrect attempt #{attempt}. Keep trying - you've got this.")
        }
        (GameKind::Bishop, 2) => {
            "Still incorrect. Think about diagonal movement patterns.".to_string()
        }
        (GameKind::Bishop, 3) => {
            "Not quite right. Bishops only move diagonally and can't change square colors."
                .to_string()
        }
        (GameKind::Bishop, _) => {
            format!("Incorrect attempt #{attempt}. Consider the diagonal paths.")
        }
        (GameKind::SquareColor, 2) => {
            "Still incorrect. Think about the checkerboard pattern.".to_string()
        }
        (GameKind::SquareColor, 3) => {
            "Not quite right. Remember: a1 is a dark square, pattern alternates from there."
                .to_string()
        }
        (GameKind::SquareColor, _) => {
            format!("Incorrect attempt #{attempt}. Visualize the board pattern.")
        }
    }
}

/// Message for a correctly answered move-count question. `None` is the
/// bishop's impossible case.
pub fn move_success_message(
    kind: GameKind,
    start: &str,
    end: &str,
    correct_moves: Option<u8>,
) -> String {
    match correct_moves {
        None => format!("Correct. The {} cannot change colors.", kind.piece_name()),
        Some(n) => format!(
            "Correct. The {} can move from {} to {} in {} move{}.",
            kind.piece_name(),
            start,
            end,
            n,
            if n == 1 { "" } else { "s" }
        ),
    }
}

/// Message for a correctly answered color question.
pub fn color_success_message(square: &str, color: Color) -> String {
    format!("Correct. {} is a {} square.", square, color.name())
}

#[cfg(test)]
mod tests {
    use super::{color_success_message, incorrect_hint, move_success_message, GameKind};
    use crate::board::chess_types::Color;

    #[test]
    fn hints_escalate_per_game() {
        assert_eq!(
            incorrect_hint(GameKind::Knight, 1),
            "Incorrect. Try again."
        );
        assert_eq!(
            incorrect_hint(GameKind::Bishop, 1),
            "Incorrect. Try again."
        );
        assert!(incorrect_hint(GameKind::Knight, 2).contains("L-shaped"));
        assert!(incorrect_hint(GameKind::Bishop, 2).contains("diagonal"));
        assert!(incorrect_hint(GameKind::SquareColor, 3).contains("a1 is a dark square"));
        assert_eq!(
            incorrect_hint(GameKind::Knight, 5),
            "Incorrect attempt #5. Keep trying - you've got this."
        );
        assert_eq!(
            incorrect_hint(GameKind::SquareColor, 4),
            "Incorrect attempt #4. Visualize the board pattern."
        );
    }

    #[test]
    fn success_messages_pluralize_moves() {
        assert_eq!(
            move_success_message(GameKind::Knight, "a1", "b3", Some(1)),
            "Correct. The Knight can move from a1 to b3 in 1 move."
        );
        assert_eq!(
            move_success_message(GameKind::Bishop, "a1", "c1", Some(2)),
            "Correct. The Bishop can move from a1 to c1 in 2 moves."
        );
        assert_eq!(
            move_success_message(GameKind::Bishop, "a1", "b1", None),
            "Correct. The Bishop cannot change colors."
        );
    }

    #[test]
    fn color_success_names_square_and_color() {
        assert_eq!(
            color_success_message("e4", Color::Light),
            "Correct. e4 is a light square."
        );
    }
}
