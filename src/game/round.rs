//! Round State
//!
//! One round: the computer's hidden move and the commitment to it. A round
//! is consumed by exactly one resolution, which is the only way to get at
//! the key.

use tracing::debug;

use super::moves::MoveSet;
use super::rules::{resolve, Outcome};
use crate::core::rng::{EntropyError, EntropySource};
use crate::proof::commitment::{Commitment, CommitmentError, RevealedKey};

/// A round waiting for the player's move.
#[derive(Debug)]
pub struct RoundState {
    number: u64,
    computer_index: usize,
    commitment: Commitment,
}

impl RoundState {
    /// Draw the computer's move and commit to its name.
    pub fn begin<E: EntropySource + ?Sized>(
        number: u64,
        moves: &MoveSet,
        key_len: usize,
        entropy: &mut E,
    ) -> Result<Self, CommitmentError> {
        let computer_index = entropy.pick_index(moves.count())?;
        let name = moves.name(computer_index).ok_or(EntropyError::IndexOutOfRange {
            index: computer_index,
            n: moves.count(),
        })?;
        let commitment = Commitment::commit_with_key_len(name, key_len, entropy)?;

        debug!(round = number, digest = %commitment.digest_hex(), "committed to computer move");

        Ok(Self {
            number,
            computer_index,
            commitment,
        })
    }

    /// Round number, starting at 1.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Published digest for this round.
    pub fn digest_hex(&self) -> String {
        self.commitment.digest_hex()
    }

    /// Lock in the player's move, classify, and reveal the key.
    ///
    /// `player_index` must be valid for `moves`.
    pub fn resolve(self, player_index: usize, moves: &MoveSet) -> RoundReport {
        let digest_hex = self.commitment.digest_hex();
        let outcome = resolve(player_index, self.computer_index, moves);

        RoundReport {
            round: self.number,
            player_index,
            player_move: moves.name(player_index).unwrap_or_default().to_string(),
            computer_index: self.computer_index,
            computer_move: moves.name(self.computer_index).unwrap_or_default().to_string(),
            outcome,
            digest_hex,
            key: self.commitment.reveal(),
        }
    }
}

/// Everything disclosed once a round resolves.
#[derive(Debug)]
pub struct RoundReport {
    /// Round number.
    pub round: u64,
    /// Player's move index.
    pub player_index: usize,
    /// Player's move name.
    pub player_move: String,
    /// Computer's move index.
    pub computer_index: usize,
    /// Computer's move name (the committed message).
    pub computer_move: String,
    /// Result from the player's point of view.
    pub outcome: Outcome,
    /// Digest published at round start.
    pub digest_hex: String,
    /// Revealed key.
    pub key: RevealedKey,
}

impl RoundReport {
    /// Revealed key as hex.
    pub fn key_hex(&self) -> String {
        self.key.to_hex()
    }

    /// Run the player's check: the key and computer move reproduce the digest.
    pub fn verify(&self) -> bool {
        self.key.verify(&self.computer_move, &self.digest_hex)
    }
}
