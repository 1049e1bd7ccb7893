//! Shortest knight paths on the 8x8 board.
//!
//! Breadth-first search over the knight's move graph: 64 nodes, at most
//! eight edges each, and connected, so every query succeeds. Neighbors are
//! expanded in [`KNIGHT_MOVE_OFFSETS`] order from a FIFO frontier, which
//! makes the returned path identical on every call with the same inputs.

use std::collections::VecDeque;

use crate::board::chess_types::{Coord, KNIGHT_MOVE_OFFSETS};
use crate::utils::algebraic::{algebraic_to_coord, coord_to_algebraic};

/// Shortest path from `start` to `end`, both endpoints included.
///
/// `start == end` yields the single-element path. The move count is the
/// path length minus one.
pub fn shortest_path(start: Coord, end: Coord) -> Vec<Coord> {
    if start == end {
        return vec![start];
    }

    // Predecessor per square, recorded the first time it enters the
    // frontier. The first visit is along a shortest path.
    let mut previous: [Option<Coord>; 64] = [None; 64];
    let mut visited = [false; 64];
    visited[start.index()] = true;

    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    while let Some(from) = frontier.pop_front() {
        if from == end {
            return reconstruct(end, &previous);
        }
        for (dx, dy) in KNIGHT_MOVE_OFFSETS {
            if let Some(to) = from.offset(dx, dy) {
                if !visited[to.index()] {
                    visited[to.index()] = true;
                    previous[to.index()] = Some(from);
                    frontier.push_back(to);
                }
            }
        }
    }

    unreachable!("knight move graph is connected; every square is reached")
}

/// String-facing form of [`shortest_path`] used by the quiz layer.
pub fn shortest_path_squares(start: &str, end: &str) -> Result<Vec<String>, String> {
    let start = algebraic_to_coord(start)?;
    let end = algebraic_to_coord(end)?;
    Ok(shortest_path(start, end)
        .into_iter()
        .map(coord_to_algebraic)
        .collect())
}

/// Walk the predecessor table back from `end`; the only square without a
/// predecessor on the walk is the origin.
fn reconstruct(end: Coord, previous: &[Option<Coord>; 64]) -> Vec<Coord> {
    let mut path = vec![end];
    let mut cursor = end;
    while let Some(from) = previous[cursor.index()] {
        cursor = from;
        path.push(cursor);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::{shortest_path, shortest_path_squares};
    use crate::board::chess_types::{Coord, KNIGHT_MOVE_OFFSETS};

    fn all_squares() -> Vec<Coord> {
        let mut squares = Vec::with_capacity(64);
        for rank in 0..8u8 {
            for file in 0..8u8 {
                squares.push(Coord::new(file, rank));
            }
        }
        squares
    }

    fn is_knight_move(a: Coord, b: Coord) -> bool {
        let df = a.file.abs_diff(b.file);
        let dr = a.rank.abs_diff(b.rank);
        (df == 2 && dr == 1) || (df == 1 && dr == 2)
    }

    /// Reference search that marks squares visited on dequeue and carries
    /// whole paths through the queue, the way the straightforward version
    /// of this search is usually written.
    fn shortest_path_dequeue_marking(start: Coord, end: Coord) -> Vec<Coord> {
        let mut queue: VecDeque<Vec<Coord>> = VecDeque::new();
        queue.push_back(vec![start]);
        let mut visited = [false; 64];

        while let Some(path) = queue.pop_front() {
            let here = *path.last().expect("queued paths are never empty");
            if here == end {
                return path;
            }
            if visited[here.index()] {
                continue;
            }
            visited[here.index()] = true;
            for (dx, dy) in KNIGHT_MOVE_OFFSETS {
                if let Some(next) = here.offset(dx, dy) {
                    let mut extended = path.clone();
                    extended.push(next);
                    queue.push_back(extended);
                }
            }
        }

        unreachable!("knight move graph is connected");
    }

    #[test]
    fn same_square_is_a_single_element_path() {
        for square in all_squares() {
            assert_eq!(shortest_path(square, square), vec![square]);
        }
    }

    #[test]
    fn a1_to_b3_is_one_direct_move() {
        let path = shortest_path_squares("a1", "b3").expect("valid squares");
        assert_eq!(path, vec!["a1".to_string(), "b3".to_string()]);
    }

    #[test]
    fn a1_to_h8_takes_six_moves() {
        let path = shortest_path_squares("a1", "h8").expect("valid squares");
        assert_eq!(path.len(), 7);
        assert_eq!(path.first().map(String::as_str), Some("a1"));
        assert_eq!(path.last().map(String::as_str), Some("h8"));
    }

    #[test]
    fn every_step_of_every_path_is_a_legal_knight_move() {
        for &start in &all_squares() {
            for &end in &all_squares() {
                let path = shortest_path(start, end);
                assert_eq!(path[0], start);
                assert_eq!(*path.last().expect("paths are never empty"), end);
                for pair in path.windows(2) {
                    assert!(
                        is_knight_move(pair[0], pair[1]),
                        "illegal step {:?} -> {:?}",
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }

    #[test]
    fn move_counts_are_symmetric_and_within_the_diameter() {
        for &start in &all_squares() {
            for &end in &all_squares() {
                let forward = shortest_path(start, end).len() - 1;
                let backward = shortest_path(end, start).len() - 1;
                assert_eq!(forward, backward);
                assert!(forward <= 6, "{start:?} -> {end:?} took {forward} moves");
            }
        }
    }

    #[test]
    fn enqueue_and_dequeue_visit_markings_return_identical_paths() {
        for &start in &all_squares() {
            for &end in &all_squares() {
                assert_eq!(
                    shortest_path(start, end),
                    shortest_path_dequeue_marking(start, end)
                );
            }
        }
    }

    #[test]
    fn repeated_queries_return_identical_paths() {
        let start = Coord::new(3, 3);
        let end = Coord::new(4, 4);
        assert_eq!(shortest_path(start, end), shortest_path(start, end));
    }

    #[test]
    fn invalid_labels_are_rejected() {
        assert!(shortest_path_squares("a1", "z9").is_err());
        assert!(shortest_path_squares("a0", "b3").is_err());
    }
}
