//! # Fair RPS
//!
//! Provably-fair rock-paper-scissors over any odd set of moves.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         FAIR RPS                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Primitives                              │
//! │  ├── rng.rs       - Injected entropy sources                │
//! │  └── hash.rs      - HMAC-SHA256                             │
//! │                                                             │
//! │  proof/           - Fairness                                │
//! │  └── commitment.rs- Commit-reveal of the computer's move    │
//! │                                                             │
//! │  game/            - Game logic (no I/O)                     │
//! │  ├── moves.rs     - Validated move set                      │
//! │  ├── rules.rs     - Beats relation, outcomes, help table    │
//! │  ├── round.rs     - One committed round                     │
//! │  └── controller.rs- Input-token state machine               │
//! │                                                             │
//! │  shell.rs         - Line-oriented terminal host             │
//! │  config.rs        - Environment configuration               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! Each round the computer picks its move, draws a fresh 256-bit key from
//! the OS CSPRNG and publishes `HMAC-SHA256(key, move)` before the player
//! chooses. The key is only reachable by resolving the round, so it cannot
//! be shown before the player's move is locked in. Afterwards the player
//! recomputes the MAC with [`proof::verify`].
//!
//! ## Example
//!
//! ```
//! use fair_rps::{MoveSet, Response, RoundController, ScriptedEntropy};
//!
//! let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
//! let mut game = RoundController::new(moves, ScriptedEntropy::fixed(2)).unwrap();
//! let digest = game.prompt().unwrap().digest_hex;
//!
//! let Response::Resolved(report) = game.handle("1").unwrap() else { panic!() };
//! assert_eq!(report.computer_move, "scissors");
//! assert!(fair_rps::proof::verify(report.key.as_bytes(), "scissors", &digest));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod proof;
pub mod shell;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use crate::core::rng::{EntropySource, OsEntropy, ScriptedEntropy, SeededEntropy};
pub use game::{HelpTable, MoveSet, MoveSetError, Outcome, Phase, Response, RoundController};
pub use proof::{Commitment, CommitmentError};
pub use shell::{ExitReason, GameError, SessionSummary, Shell};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
