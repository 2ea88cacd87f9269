//! Terminal Shell
//!
//! Line-oriented host for a [`RoundController`]: reads one token per line,
//! prints what the controller reports, and returns when the session ends.
//! The binary maps the returned summary to a process exit status.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::core::rng::EntropySource;
use crate::game::controller::{Response, RoundController};
use crate::game::round::RoundReport;
use crate::game::rules::Outcome;
use crate::proof::commitment::CommitmentError;

/// Printed for any rejected selection.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please try again.";

/// Printed when the session ends.
pub const FAREWELL_MESSAGE: &str = "Exiting game.";

/// Session errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Terminal read or write failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A round could not be committed.
    #[error("commitment failed: {0}")]
    Commitment(#[from] CommitmentError),
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Player entered the exit token.
    ExitToken,
    /// Input closed.
    EndOfInput,
}

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds resolved.
    pub rounds: u64,
    /// Player wins.
    pub wins: u64,
    /// Player losses.
    pub losses: u64,
    /// Draws.
    pub draws: u64,
    /// How it ended.
    pub reason: ExitReason,
}

impl SessionSummary {
    fn new() -> Self {
        Self {
            rounds: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            reason: ExitReason::EndOfInput,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Reads tokens from `input`, writes the game to `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Wrap an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Play until the exit token or end of input.
    pub fn run<E: EntropySource>(
        &mut self,
        controller: &mut RoundController<E>,
    ) -> Result<SessionSummary, GameError> {
        let mut summary = SessionSummary::new();
        self.print_menu(controller)?;

        // Raw bytes: a line that is not UTF-8 is bad input, not an I/O error.
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                controller.terminate();
                writeln!(self.output, "{}", FAREWELL_MESSAGE)?;
                self.output.flush()?;
                summary.reason = ExitReason::EndOfInput;
                break;
            }

            match controller.handle(&String::from_utf8_lossy(&buf))? {
                Response::Help(table) => {
                    writeln!(self.output, "\nHelp table:")?;
                    write!(self.output, "{}", table)?;
                }
                Response::Resolved(report) => {
                    self.print_report(&report)?;
                    summary.record(report.outcome);
                    controller.next_round()?;
                }
                Response::Invalid(_) => {
                    writeln!(self.output, "{}", INVALID_INPUT_MESSAGE)?;
                }
                Response::Terminated => {
                    writeln!(self.output, "{}", FAREWELL_MESSAGE)?;
                    self.output.flush()?;
                    summary.reason = ExitReason::ExitToken;
                    break;
                }
            }
            self.print_menu(controller)?;
        }

        info!(
            rounds = summary.rounds,
            wins = summary.wins,
            losses = summary.losses,
            draws = summary.draws,
            "session finished"
        );
        Ok(summary)
    }

    fn print_menu<E: EntropySource>(&mut self, controller: &RoundController<E>) -> io::Result<()> {
        if let Some(prompt) = controller.prompt() {
            write!(self.output, "{}", prompt)?;
        }
        self.output.flush()
    }

    fn print_report(&mut self, report: &RoundReport) -> io::Result<()> {
        writeln!(self.output, "Your move: {}", report.player_move)?;
        writeln!(self.output, "Computer move: {}", report.computer_move)?;
        writeln!(self.output, "{}", report.outcome.verdict())?;
        writeln!(self.output, "HMAC key: {}", report.key_hex())
    }
}

// =============================================================================
// TESTS
// =============================================================================
