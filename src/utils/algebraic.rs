//! Conversions between algebraic square labels and board coordinates.
//!
//! Converts human-readable squares (for example: `e4`) to the zero-based
//! coordinates the solvers work in, and back.

use crate::board::chess_types::Coord;

/// Convert algebraic notation (for example: "e4") to a board coordinate.
///
/// Accepts exactly two bytes, lowercase file `a..=h` and rank `1..=8`;
/// anything else is rejected rather than guessed at.
#[inline]
pub fn algebraic_to_coord(square: &str) -> Result<Coord, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Coord::new(file - b'a', rank - b'1'))
}

/// Convert a board coordinate back to algebraic notation.
#[inline]
pub fn coord_to_algebraic(coord: Coord) -> String {
    let file_char = char::from(b'a' + coord.file);
    let rank_char = char::from(b'1' + coord.rank);
    format!("{file_char}{rank_char}")
}
