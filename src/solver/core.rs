use log::info;
use rayon::prelude::*;

use crate::ops::Operation;
use crate::step::{Derivation, Step};

/// Main solver for finding a derivation that reaches a target value
pub struct Solver {}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self {}
    }

    /// Find a derivation of `target` from `numbers`, or `None` if the search
    /// space contains no solution
    ///
    /// Pairs are tried in ascending `(i, j)` index order, operations in the
    /// fixed order `+ - * /`, and the `i op j` orientation before `j op i`
    /// (the swapped orientation is skipped for commutative operations), so
    /// identical inputs always produce the identical derivation. Top-level
    /// pairs are searched in parallel; `find_map_first` keeps the result the
    /// one the sequential order would have found.
    pub fn solve(&self, target: i64, numbers: &[i64]) -> Option<Derivation> {
        if numbers.len() < 2 {
            info!("Working set of {} numbers cannot be combined", numbers.len());
            return None;
        }

        info!(
            "Searching for a derivation of {} from {} numbers",
            target,
            numbers.len()
        );

        let size = numbers.len();
        let pairs: Vec<(usize, usize)> = (0..size - 1)
            .flat_map(|i| (i + 1..size).map(move |j| (i, j)))
            .collect();

        let found = pairs.into_par_iter().find_map_first(|(i, j)| {
            let mut working_set = numbers.to_vec();
            Operation::ALL
                .iter()
                .find_map(|&op| try_indices(op, i, j, target, &mut working_set))
        });

        match found {
            Some(mut steps) => {
                // Steps are accumulated from the final operation backward
                steps.reverse();
                info!("Found a derivation in {} steps", steps.len());
                Some(steps)
            }
            None => {
                info!("Search space exhausted without a solution");
                None
            }
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

fn solve_impl(target: i64, working_set: &mut [i64]) -> Option<Derivation> {
    if working_set.len() < 2 {
        return None;
    }

    let size = working_set.len();
    for i in 0..size - 1 {
        for j in i + 1..size {
            for op in Operation::ALL {
                if let Some(steps) = try_indices(op, i, j, target, working_set) {
                    return Some(steps);
                }
            }
        }
    }

    None
}

/// Try both orientations of `op` on the numbers at `first_idx` and
/// `second_idx`, recursing on the one-shorter working set
///
/// The pair is collapsed in place: the trial result lands in `first_idx`,
/// the last element fills `second_idx`, and the recursion sees the prefix
/// without the last slot. Both positions are restored before a failed trial
/// returns.
fn try_indices(
    op: Operation,
    first_idx: usize,
    second_idx: usize,
    target: i64,
    working_set: &mut [i64],
) -> Option<Derivation> {
    debug_assert!(working_set.len() >= 2);
    debug_assert!(first_idx < second_idx);

    let first = working_set[first_idx];
    let second = working_set[second_idx];

    let last = working_set.len() - 1;
    working_set[second_idx] = working_set[last];

    // first op second
    if let Some(result) = op.apply(first, second) {
        if result == target {
            return Some(vec![Step::new(op, first, second, target)]);
        }
        working_set[first_idx] = result;
        if let Some(mut steps) = solve_impl(target, &mut working_set[..last]) {
            steps.push(Step::new(op, first, second, result));
            return Some(steps);
        }
    }

    // second op first, redundant when the operation commutes
    if !op.is_commutative() {
        if let Some(result) = op.apply(second, first) {
            if result == target {
                return Some(vec![Step::new(op, second, first, target)]);
            }
            working_set[first_idx] = result;
            if let Some(mut steps) = solve_impl(target, &mut working_set[..last]) {
                steps.push(Step::new(op, second, first, result));
                return Some(steps);
            }
        }
    }

    // Restore positions
    working_set[first_idx] = first;
    working_set[second_idx] = second;

    None
}
