//! Round Controller
//!
//! The interactive state machine. It takes one trimmed input token at a
//! time and returns what happened; it never prints and never exits the
//! process. The hosting shell decides how to render each [`Response`].
//!
//! ```text
//!            "?" (help)
//!           ┌──────────┐
//!           ▼          │
//!    ┌─────────────────┴┐  "1".."N"   ┌──────────┐
//!    │  AwaitingInput   │────────────►│ Resolved │
//!    └─────────────────┬┘◄────────────└──────────┘
//!           ▲   │      │  next_round()
//!           └───┘      │ "0"
//!          invalid     ▼
//!                 ┌────────────┐
//!                 │ Terminated │
//!                 └────────────┘
//! ```

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::moves::MoveSet;
use super::round::{RoundReport, RoundState};
use super::rules::HelpTable;
use crate::core::rng::EntropySource;
use crate::proof::commitment::{CommitmentError, KEY_LEN};

/// Token that shows the help table.
pub const HELP_TOKEN: &str = "?";

/// Token that ends the session.
pub const EXIT_TOKEN: &str = "0";

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A committed round is waiting for the player's move.
    AwaitingInput,
    /// The last round resolved; the next one has not started.
    Resolved,
    /// Session over.
    Terminated,
}

/// Rejected move selections. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Blank line.
    #[error("empty input")]
    Empty,

    /// Not a number and not a command.
    #[error("not a move number: {0:?}")]
    NotANumber(String),

    /// A number outside `1..=max`.
    #[error("move {choice} is out of range 1..={max}")]
    OutOfRange {
        /// The number entered.
        choice: u64,
        /// Largest valid move number.
        max: usize,
    },
}

/// What a single token did.
#[derive(Debug)]
pub enum Response {
    /// Help requested; the round is untouched.
    Help(HelpTable),
    /// The round resolved and the key is revealed.
    Resolved(RoundReport),
    /// Bad selection; the round is untouched.
    Invalid(InputError),
    /// Session ended.
    Terminated,
}

/// Menu for the round in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Round number.
    pub round: u64,
    /// Published commitment digest.
    pub digest_hex: String,
    /// Move names, listed as `1..=N`.
    pub moves: Vec<String>,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HMAC: {}", self.digest_hex)?;
        writeln!(f, "Available moves:")?;
        for (i, name) in self.moves.iter().enumerate() {
            writeln!(f, "{} - {}", i + 1, name)?;
        }
        writeln!(f, "{} - exit", EXIT_TOKEN)?;
        writeln!(f, "{} - help", HELP_TOKEN)
    }
}

/// Drives rounds over a fixed move set.
pub struct RoundController<E: EntropySource> {
    moves: MoveSet,
    entropy: E,
    key_len: usize,
    round: Option<RoundState>,
    phase: Phase,
    rounds_played: u64,
}

impl<E: EntropySource> RoundController<E> {
    /// Create a controller and commit the first round.
    pub fn new(moves: MoveSet, entropy: E) -> Result<Self, CommitmentError> {
        Self::with_key_len(moves, entropy, KEY_LEN)
    }

    /// Same as [`RoundController::new`] with a custom key length in bytes.
    pub fn with_key_len(moves: MoveSet, entropy: E, key_len: usize) -> Result<Self, CommitmentError> {
        let mut controller = Self {
            moves,
            entropy,
            key_len,
            round: None,
            phase: Phase::Resolved,
            rounds_played: 0,
        };
        controller.next_round()?;
        Ok(controller)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The move set.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Rounds resolved so far.
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Menu for the current round, if one is waiting for input.
    pub fn prompt(&self) -> Option<Prompt> {
        match (&self.round, self.phase) {
            (Some(round), Phase::AwaitingInput) => Some(Prompt {
                round: round.number(),
                digest_hex: round.digest_hex(),
                moves: self.moves.names().to_vec(),
            }),
            _ => None,
        }
    }

    /// Start the next round after a resolution.
    ///
    /// No-op while a round is already waiting. A failure here terminates
    /// the session.
    pub fn next_round(&mut self) -> Result<(), CommitmentError> {
        match self.phase {
            Phase::AwaitingInput | Phase::Terminated => return Ok(()),
            Phase::Resolved => {}
        }

        let number = self.rounds_played + 1;
        match RoundState::begin(number, &self.moves, self.key_len, &mut self.entropy) {
            Ok(round) => {
                info!(round = number, digest = %round.digest_hex(), "round started");
                self.round = Some(round);
                self.phase = Phase::AwaitingInput;
                Ok(())
            }
            Err(e) => {
                warn!(round = number, error = %e, "could not commit round, terminating");
                self.phase = Phase::Terminated;
                Err(e)
            }
        }
    }

    /// Handle one input token.
    ///
    /// Only cryptographic failures come back as `Err`; bad input is a
    /// [`Response::Invalid`].
    pub fn handle(&mut self, token: &str) -> Result<Response, CommitmentError> {
        if self.phase == Phase::Resolved {
            self.next_round()?;
        }
        if self.phase == Phase::Terminated {
            return Ok(Response::Terminated);
        }

        let token = token.trim();
        match token {
            HELP_TOKEN => {
                debug!("help requested");
                Ok(Response::Help(HelpTable::new(&self.moves)))
            }
            EXIT_TOKEN => {
                self.terminate();
                Ok(Response::Terminated)
            }
            _ => match self.parse_choice(token) {
                Ok(player_index) => Ok(self.resolve(player_index)),
                Err(e) => {
                    debug!(error = %e, "invalid input");
                    Ok(Response::Invalid(e))
                }
            },
        }
    }

    /// End the session. The pending round and its key are dropped.
    pub fn terminate(&mut self) {
        if self.phase != Phase::Terminated {
            info!(rounds = self.rounds_played, "session terminated");
        }
        self.round = None;
        self.phase = Phase::Terminated;
    }

    fn parse_choice(&self, token: &str) -> Result<usize, InputError> {
        if token.is_empty() {
            return Err(InputError::Empty);
        }
        let choice: u64 = token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))?;

        let max = self.moves.count();
        if choice == 0 || choice > max as u64 {
            return Err(InputError::OutOfRange { choice, max });
        }
        Ok(choice as usize - 1)
    }

    fn resolve(&mut self, player_index: usize) -> Response {
        let Some(round) = self.round.take() else {
            self.phase = Phase::Terminated;
            return Response::Terminated;
        };

        let report = round.resolve(player_index, &self.moves);
        self.rounds_played += 1;
        self.phase = Phase::Resolved;

        info!(
            round = report.round,
            player = %report.player_move,
            computer = %report.computer_move,
            outcome = %report.outcome,
            "round resolved"
        );
        debug!(round = report.round, key = %report.key_hex(), "key revealed");

        Response::Resolved(report)
    }
}

impl<E: EntropySource> fmt::Debug for RoundController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundController")
            .field("moves", &self.moves)
            .field("phase", &self.phase)
            .field("rounds_played", &self.rounds_played)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
