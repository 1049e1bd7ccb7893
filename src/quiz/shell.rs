//! Interactive quiz front-end.
//!
//! Line-oriented command loop over stdin/stdout: `knight`, `bishop`, and
//! `color` deal new questions, a bare answer token is applied to the most
//! recently dealt question, `quit` leaves. Output goes through any
//! `io::Write`, which keeps the loop scriptable in tests.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::chess_types::Color;
use crate::quiz::feedback::GameKind;
use crate::quiz::session::{GuessOutcome, QuizSession};

const QUIZ_NAME: &str = "Chess Movement Quiz";

/// Read commands from stdin until `quit` or end of input.
pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut shell = QuizShell::new(StdRng::from_os_rng());

    shell.write_banner(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = shell.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Shell state: the quiz session, the random generator dealing rounds,
/// and which game the next bare answer token applies to.
pub struct QuizShell<R: Rng> {
    session: QuizSession,
    rng: R,
    active: Option<GameKind>,
}

impl<R: Rng> QuizShell<R> {
    pub fn new(rng: R) -> Self {
        Self {
            session: QuizSession::default(),
            rng,
            active: None,
        }
    }

    fn write_banner(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{QUIZ_NAME}")?;
        writeln!(
            out,
            "Commands: knight | bishop | color | help | quit. Answer questions on their own line."
        )?;
        Ok(())
    }

    /// Handle one input line; returns `true` when the loop should exit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        match trimmed {
            "quit" | "exit" => return Ok(true),
            "help" => {
                self.write_banner(out)?;
            }
            "knight" => {
                let round = self.session.start_knight(&mut self.rng);
                writeln!(
                    out,
                    "How many moves does a Knight need to get from {} to {}?",
                    round.start, round.end
                )?;
                self.active = Some(GameKind::Knight);
            }
            "bishop" => {
                let round = self.session.start_bishop(&mut self.rng);
                writeln!(
                    out,
                    "How many moves does a Bishop need to get from {} to {}? (answer 'impossible' if it cannot)",
                    round.start, round.end
                )?;
                self.active = Some(GameKind::Bishop);
            }
            "color" => {
                let round = self.session.start_color(&mut self.rng);
                writeln!(out, "Is {} a light or a dark square?", round.square)?;
                self.active = Some(GameKind::SquareColor);
            }
            answer => self.handle_answer(answer, out)?,
        }

        Ok(false)
    }

    fn handle_answer(&mut self, token: &str, out: &mut impl Write) -> io::Result<()> {
        let kind = match self.active {
            Some(kind) => kind,
            None => {
                writeln!(out, "Start a question first: knight | bishop | color")?;
                return Ok(());
            }
        };

        let result = match kind {
            GameKind::Knight => {
                parse_move_guess(token).and_then(|guess| self.session.guess_knight(guess))
            }
            GameKind::Bishop => {
                parse_move_guess(token).and_then(|guess| self.session.guess_bishop(guess))
            }
            GameKind::SquareColor => {
                parse_color_guess(token).and_then(|guess| self.session.guess_color(guess))
            }
        };

        match result {
            Ok(GuessOutcome::Correct { message, path }) => {
                writeln!(out, "{message}")?;
                if let Some(path) = path {
                    writeln!(out, "Path: {}", path.join(" -> "))?;
                }
                self.active = None;
            }
            Ok(GuessOutcome::Incorrect { message }) => {
                writeln!(out, "{message}")?;
            }
            Err(message) => {
                writeln!(out, "{message}")?;
            }
        }

        Ok(())
    }
}

/// Parse a move-count answer; `impossible` (or the short form `x`) guesses
/// that no path exists.
fn parse_move_guess(token: &str) -> Result<Option<u8>, String> {
    if token.eq_ignore_ascii_case("impossible") || token.eq_ignore_ascii_case("x") {
        return Ok(None);
    }
    token
        .parse::<u8>()
        .map(Some)
        .map_err(|_| "Invalid input. Please select a valid number of moves.".to_string())
}

fn parse_color_guess(token: &str) -> Result<Color, String> {
    if token.eq_ignore_ascii_case("light") {
        Ok(Color::Light)
    } else if token.eq_ignore_ascii_case("dark") {
        Ok(Color::Dark)
    } else {
        Err("Please answer 'light' or 'dark'.".to_string())
    }
}
