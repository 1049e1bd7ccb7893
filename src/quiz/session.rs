//! Quiz round state and guess checking.
//!
//! Replaces the round bookkeeping a web session would hold: the caller
//! owns a [`QuizSession`] value, starts rounds on it, and feeds guesses
//! back in. Randomness comes from a caller-supplied [`Rng`], so rounds
//! are reproducible under a seeded generator.

use rand::Rng;

use crate::board::chess_types::{Color, Coord};
use crate::pathfinding::{bishop_paths, knight_paths};
use crate::quiz::feedback::{self, GameKind};
use crate::utils::algebraic::coord_to_algebraic;

fn random_coord<R: Rng + ?Sized>(rng: &mut R) -> Coord {
    Coord::new(rng.random_range(0..8), rng.random_range(0..8))
}

fn random_distinct_coords<R: Rng + ?Sized>(rng: &mut R) -> (Coord, Coord) {
    let first = random_coord(rng);
    let mut second = random_coord(rng);
    while second == first {
        second = random_coord(rng);
    }
    (first, second)
}

/// Uniformly random square label.
pub fn random_square<R: Rng + ?Sized>(rng: &mut R) -> String {
    coord_to_algebraic(random_coord(rng))
}

/// Two random square labels, guaranteed distinct.
pub fn random_distinct_pair<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    let (first, second) = random_distinct_coords(rng);
    (coord_to_algebraic(first), coord_to_algebraic(second))
}

/// Outcome of a guess, with the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Round solved. `path` is the witness to display; absent for the
    /// color game and for impossible bishop pairs.
    Correct {
        message: String,
        path: Option<Vec<String>>,
    },
    /// Wrong answer; the round stays active and the hint escalates.
    Incorrect { message: String },
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }
}

/// One active movement question: the chosen squares, the solver's answer,
/// and how many wrong guesses have been made so far.
#[derive(Debug, Clone)]
pub struct MoveRound {
    pub kind: GameKind,
    pub start: String,
    pub end: String,
    /// `None` means the move is impossible (bishop across colors).
    pub correct_moves: Option<u8>,
    /// Witness path realizing `correct_moves`; absent exactly when the
    /// move is impossible.
    pub path: Option<Vec<String>>,
    pub attempts: u32,
}

impl MoveRound {
    /// Fresh knight question over a random pair of distinct squares.
    pub fn new_knight<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (start, end) = random_distinct_coords(rng);
        let path: Vec<String> = knight_paths::shortest_path(start, end)
            .into_iter()
            .map(coord_to_algebraic)
            .collect();
        Self {
            kind: GameKind::Knight,
            start: coord_to_algebraic(start),
            end: coord_to_algebraic(end),
            correct_moves: Some((path.len() - 1) as u8),
            path: Some(path),
            attempts: 0,
        }
    }

    /// Fresh bishop question over a random pair of distinct squares.
    pub fn new_bishop<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (start, end) = random_distinct_coords(rng);
        Self {
            kind: GameKind::Bishop,
            start: coord_to_algebraic(start),
            end: coord_to_algebraic(end),
            correct_moves: bishop_paths::move_count(start, end),
            path: bishop_paths::path(start, end)
                .map(|p| p.into_iter().map(coord_to_algebraic).collect()),
            attempts: 0,
        }
    }

    /// Check a move-count guess; a `None` guess means "impossible".
    pub fn check_guess(&mut self, guess: Option<u8>) -> GuessOutcome {
        if guess == self.correct_moves {
            GuessOutcome::Correct {
                message: feedback::move_success_message(
                    self.kind,
                    &self.start,
                    &self.end,
                    self.correct_moves,
                ),
                path: self.path.clone(),
            }
        } else {
            self.attempts += 1;
            GuessOutcome::Incorrect {
                message: feedback::incorrect_hint(self.kind, self.attempts),
            }
        }
    }
}

/// One active square-color question.
#[derive(Debug, Clone)]
pub struct ColorRound {
    pub square: String,
    pub correct: Color,
    pub attempts: u32,
}

impl ColorRound {
    /// Fresh color question over one random square.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let coord = random_coord(rng);
        Self {
            square: coord_to_algebraic(coord),
            correct: Color::of(coord),
            attempts: 0,
        }
    }

    pub fn check_guess(&mut self, guess: Color) -> GuessOutcome {
        if guess == self.correct {
            GuessOutcome::Correct {
                message: feedback::color_success_message(&self.square, self.correct),
                path: None,
            }
        } else {
            self.attempts += 1;
            GuessOutcome::Incorrect {
                message: feedback::incorrect_hint(GameKind::SquareColor, self.attempts),
            }
        }
    }
}

/// All quiz state a caller holds between prompts: at most one active
/// round per game type. Answering a round correctly retires it.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    knight: Option<MoveRound>,
    bishop: Option<MoveRound>,
    color: Option<ColorRound>,
}

impl QuizSession {
    /// Deal a new knight round, replacing any active one.
    pub fn start_knight<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &MoveRound {
        self.knight.insert(MoveRound::new_knight(rng))
    }

    /// Deal a new bishop round, replacing any active one.
    pub fn start_bishop<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &MoveRound {
        self.bishop.insert(MoveRound::new_bishop(rng))
    }

    /// Deal a new color round, replacing any active one.
    pub fn start_color<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ColorRound {
        self.color.insert(ColorRound::new(rng))
    }

    pub fn knight_round(&self) -> Option<&MoveRound> {
        self.knight.as_ref()
    }

    pub fn bishop_round(&self) -> Option<&MoveRound> {
        self.bishop.as_ref()
    }

    pub fn color_round(&self) -> Option<&ColorRound> {
        self.color.as_ref()
    }

    pub fn guess_knight(&mut self, guess: Option<u8>) -> Result<GuessOutcome, String> {
        Self::apply_move_guess(&mut self.knight, guess, "knight")
    }

    pub fn guess_bishop(&mut self, guess: Option<u8>) -> Result<GuessOutcome, String> {
        Self::apply_move_guess(&mut self.bishop, guess, "bishop")
    }

    pub fn guess_color(&mut self, guess: Color) -> Result<GuessOutcome, String> {
        let round = self
            .color
            .as_mut()
            .ok_or_else(|| "no active color round".to_string())?;
        let outcome = round.check_guess(guess);
        if outcome.is_correct() {
            self.color = None;
        }
        Ok(outcome)
    }

    fn apply_move_guess(
        slot: &mut Option<MoveRound>,
        guess: Option<u8>,
        game: &str,
    ) -> Result<GuessOutcome, String> {
        let round = slot
            .as_mut()
            .ok_or_else(|| format!("no active {game} round"))?;
        let outcome = round.check_guess(guess);
        if outcome.is_correct() {
            *slot = None;
        }
        Ok(outcome)
    }
}
