//! Move Set
//!
//! The validated, ordered list of move names. Index is the move's identity;
//! names are only for display and for the commitment message.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

/// Minimum number of moves.
pub const MIN_MOVES: usize = 3;

/// Guidance shown with every rejection.
pub const USAGE_EXAMPLE: &str = "rock paper scissors";

/// Rejected move lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer than three moves.
    #[error("you must provide an odd number of unique moves (at least 3), got {count}. Example: rock paper scissors")]
    TooFewMoves {
        /// Number of moves supplied.
        count: usize,
    },

    /// Even number of moves; the relation needs an odd count.
    #[error("you must provide an odd number of unique moves, got {count}. Example: rock paper scissors")]
    EvenMoveCount {
        /// Number of moves supplied.
        count: usize,
    },

    /// The same name appears twice.
    #[error("moves must be unique, \"{0}\" appears more than once. Example: rock paper scissors")]
    DuplicateMove(String),
}

/// Ordered sequence of unique move names, odd length, at least three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Checks run in order: minimum count, odd count, uniqueness.
    pub fn new<I, S>(moves: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = moves.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES {
            return Err(MoveSetError::TooFewMoves { count: names.len() });
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount { count: names.len() });
        }

        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (N).
    #[inline]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Name at `index`, if in range.
    #[inline]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate `(index, name)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}
