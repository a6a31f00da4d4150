//! Or-opt improvement on a closed tour.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive locations to a different
//! position in the tour, keeping their orientation. The depot at position 0
//! never moves. For each segment length the best move is applied if it
//! reduces the cost.
//!
//! ```text
//! removal   = c(prev, first) + c(last, after) - c(prev, after)
//! insertion = c(a, first) + c(last, b) - c(a, b)
//! delta     = insertion - removal
//! ```
//!
//! # Complexity
//!
//! O(n²) per segment length and pass.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{Deadline, PassOutcome};
use crate::distance::ArcCost;
use crate::models::Tour;

/// Longest segment Or-opt relocates.
pub const MAX_SEGMENT_LEN: usize = 3;

/// Runs one best-improvement Or-opt pass per segment length.
pub fn or_opt_pass<C: ArcCost + ?Sized>(
    tour: &mut Tour,
    costs: &C,
    deadline: &Deadline,
) -> PassOutcome {
    let mut outcome = PassOutcome::default();
    for seg_len in 1..=MAX_SEGMENT_LEN {
        if deadline.expired() {
            outcome.interrupted = true;
            break;
        }
        if let Some((from, to)) = best_relocation(tour, costs, seg_len) {
            tour.relocate(from, seg_len, to);
            outcome.improved = true;
        }
    }
    outcome
}

/// Finds the most improving relocation of a `seg_len` segment.
///
/// Returns `(from, to)` for [`Tour::relocate`], or `None` if no move
/// lowers the cost.
fn best_relocation<C: ArcCost + ?Sized>(
    tour: &Tour,
    costs: &C,
    seg_len: usize,
) -> Option<(usize, usize)> {
    let t = tour.order();
    let n = t.len();
    if n < seg_len + 2 {
        return None;
    }

    let mut best: Option<(i64, usize, usize)> = None;

    for from in 1..=(n - seg_len) {
        let prev = t[from - 1];
        let after = t[(from + seg_len) % n];
        let first = t[from];
        let last = t[from + seg_len - 1];

        let removal = costs.arc(prev, first) + costs.arc(last, after) - costs.arc(prev, after);

        for to in 1..=n {
            if to >= from && to <= from + seg_len {
                continue;
            }
            let a = t[to - 1];
            let b = t[to % n];
            let insertion = costs.arc(a, first) + costs.arc(last, b) - costs.arc(a, b);
            let delta = insertion - removal;

            if delta < best.map_or(0, |(d, _, _)| d) {
                best = Some((delta, from, to));
            }
        }
    }

    best.map(|(_, from, to)| (from, to))
}
