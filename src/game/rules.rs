//! Win Rules
//!
//! The generalized "beats" relation over N moves (N odd), outcome
//! classification, and the full pairwise help table.
//!
//! Moves sit on a circle. Each move beats the `N / 2` moves that follow it
//! (wrapping) and loses to the `N / 2` that precede it, so every pair of
//! distinct moves has exactly one winner.

use std::fmt;

use super::moves::MoveSet;

/// Whether move `a` beats move `b` among `n` moves.
///
/// Defined for `a != b`, `a, b < n`, `n` odd and at least 3.
#[inline]
pub fn beats(a: usize, b: usize, n: usize) -> bool {
    debug_assert!(n >= 3 && n % 2 == 1, "move count must be odd and >= 3");
    debug_assert!(a < n && b < n, "move index out of range");
    debug_assert!(a != b, "a move does not beat itself");

    let half = n / 2;
    let reach = a + half;
    // The second clause only applies once a's winning window wraps past n.
    (b > a && b <= reach) || (b < a && reach >= n && b <= reach % n)
}

/// Round outcome from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Same move.
    Draw,
    /// This side's move beats the other.
    Win,
    /// The other side's move beats this one.
    Lose,
}

impl Outcome {
    /// Short label used in the help table.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        }
    }

    /// Sentence shown to the player after a round.
    pub fn verdict(self) -> &'static str {
        match self {
            Outcome::Draw => "It's a draw!",
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
        }
    }

}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `(player, computer)` from the player's point of view.
///
/// Both indices must be valid for `moves`.
pub fn resolve(player: usize, computer: usize, moves: &MoveSet) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if beats(player, computer, moves.count()) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Pairwise outcome table, rows from the row mover's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTable {
    names: Vec<String>,
    cells: Vec<Vec<Outcome>>,
}

impl HelpTable {
    /// Build the table for a move set.
    pub fn new(moves: &MoveSet) -> Self {
        let n = moves.count();
        let cells = (0..n)
            .map(|row| (0..n).map(|col| resolve(row, col, moves)).collect())
            .collect();

        Self {
            names: moves.names().to_vec(),
            cells,
        }
    }

    /// Number of moves (the table is `size + 1` square with headers).
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Outcome for the row mover against the column mover.
    pub fn cell(&self, row: usize, col: usize) -> Option<Outcome> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Header and body rows as text, header first.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        let mut rows = Vec::with_capacity(self.size() + 1);

        let mut header = vec![""];
        header.extend(self.names.iter().map(String::as_str));
        rows.push(header);

        for (name, cells) in self.names.iter().zip(&self.cells) {
            let mut row = vec![name.as_str()];
            row.extend(cells.iter().map(|c| c.label()));
            rows.push(row);
        }
        rows
    }
}

impl fmt::Display for HelpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let widths: Vec<usize> = (0..=self.size())
            .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
            .collect();

        let rule: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";

        writeln!(f, "{}", rule)?;
        for (i, row) in rows.iter().enumerate() {
            for (text, width) in row.iter().zip(&widths) {
                write!(f, "| {:<width$} ", text, width = width)?;
            }
            writeln!(f, "|")?;
            if i == 0 {
                writeln!(f, "{}", rule)?;
            }
        }
        writeln!(f, "{}", rule)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn moves(n: usize) -> MoveSet {
        MoveSet::new((0..n).map(|i| format!("m{}", i))).unwrap()
    }

    #[test]
    fn test_classic_three() {
        // rock, paper, scissors: each beats the next one around the circle.
        assert!(beats(0, 1, 3));
        assert!(beats(1, 2, 3));
        assert!(beats(2, 0, 3));
        assert!(!beats(1, 0, 3));
        assert!(!beats(2, 1, 3));
        assert!(!beats(0, 2, 3));
    }

    #[test]
    fn test_wrap_boundary_per_n() {
        for n in [3usize, 5, 7, 9] {
            let half = n / 2;
            for a in 0..n {
                let edge = (a + half) % n;
                assert!(beats(a, edge, n), "n={} a={} edge={}", n, a, edge);
                assert!(!beats(edge, a, n), "n={} a={} edge={}", n, a, edge);

                // First move past the edge is a loss.
                let past = (a + half + 1) % n;
                assert!(!beats(a, past, n), "n={} a={} past={}", n, a, past);
            }
        }
    }

    #[test]
    fn test_no_distinct_draws_small_n() {
        for n in [3usize, 5, 7, 9] {
            for a in 0..n {
                for b in 0..n {
                    if a != b {
                        assert_ne!(beats(a, b, n), beats(b, a, n), "n={} a={} b={}", n, a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_resolve_diagonal_is_draw() {
        let set = moves(7);
        for i in 0..7 {
            assert_eq!(resolve(i, i, &set), Outcome::Draw);
        }
    }

    #[test]
    fn test_resolve_matches_beats() {
        let set = moves(5);
        assert_eq!(resolve(0, 1, &set), Outcome::Win);
        assert_eq!(resolve(0, 2, &set), Outcome::Win);
        assert_eq!(resolve(0, 3, &set), Outcome::Lose);
        assert_eq!(resolve(0, 4, &set), Outcome::Lose);
        assert_eq!(resolve(3, 0, &set), Outcome::Win);
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(Outcome::Win.verdict(), "You win!");
        assert_eq!(Outcome::Lose.verdict(), "You lose!");
        assert_eq!(Outcome::Draw.verdict(), "It's a draw!");
        assert_eq!(Outcome::Lose.to_string(), "Lose");
    }

    #[test]
    fn test_help_table_three() {
        let set = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let table = HelpTable::new(&set);

        assert_eq!(table.size(), 3);
        assert_eq!(table.rows().len(), 4);
        assert!(table.rows().iter().all(|r| r.len() == 4));
        assert_eq!(table.rows()[0], vec!["", "rock", "paper", "scissors"]);

        for i in 0..3 {
            assert_eq!(table.cell(i, i), Some(Outcome::Draw));
            for j in 0..3 {
                if i != j {
                    let a = table.cell(i, j).unwrap();
                    let b = table.cell(j, i).unwrap();
                    assert_ne!(a, Outcome::Draw);
                    assert_eq!(a == Outcome::Win, b == Outcome::Lose);
                }
            }
        }
        assert_eq!(table.cell(3, 0), None);
    }

    #[test]
    fn test_help_table_render() {
        let set = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let rendered = HelpTable::new(&set).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        // rule, header, rule, 3 rows, rule
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "|          | rock | paper | scissors |");
        assert_eq!(lines[3], "| rock     | Draw | Win   | Lose     |");
        assert_eq!(lines[4], "| paper    | Lose | Draw  | Win      |");
        assert_eq!(lines[5], "| scissors | Win  | Lose  | Draw     |");
        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == width));
    }

    fn odd_n_and_pair() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..40)
            .prop_map(|k| 2 * k + 1)
            .prop_flat_map(|n| (Just(n), 0..n, 0..n))
    }

    proptest! {
        #[test]
        fn prop_tournament_total_and_antisymmetric((n, a, b) in odd_n_and_pair()) {
            prop_assume!(a != b);
            prop_assert!(beats(a, b, n) ^ beats(b, a, n));
        }

        #[test]
        fn prop_balanced_win_count(k in 1usize..40, seed in any::<usize>()) {
            let n = 2 * k + 1;
            let a = seed % n;
            let wins = (0..n).filter(|&b| b != a && beats(a, b, n)).count();
            let losses = (0..n).filter(|&b| b != a && beats(b, a, n)).count();
            prop_assert_eq!(wins, n / 2);
            prop_assert_eq!(losses, n / 2);
        }

        #[test]
        fn prop_rotation_invariant((n, a, b) in odd_n_and_pair(), shift in 0usize..100) {
            prop_assume!(a != b);
            let s = shift % n;
            prop_assert_eq!(beats(a, b, n), beats((a + s) % n, (b + s) % n, n));
        }
    }
}
