//! Game Logic Module
//!
//! Pure game code: no terminal I/O, no process exits.
//!
//! ## Module Structure
//!
//! - `moves`: Validated move set
//! - `rules`: Beats relation, outcomes, help table
//! - `round`: One committed round and its resolution
//! - `controller`: Input-token state machine

pub mod controller;
pub mod moves;
pub mod round;
pub mod rules;

// Re-export key types
pub use controller::{InputError, Phase, Prompt, Response, RoundController};
pub use moves::{MoveSet, MoveSetError};
pub use round::{RoundReport, RoundState};
pub use rules::{beats, resolve, HelpTable, Outcome};
