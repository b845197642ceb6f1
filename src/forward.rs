use log::{info, trace};

use crate::element::ElementSet;
use crate::error::SolveError;
use crate::table::{MinSize, Table};

/// The subset-count and minimum-size tables over (prefix length, partial sum).
#[derive(Debug)]
pub struct ForwardTables {
    pub num_subsets: Table<u64>,
    pub min_size: Table<MinSize>,
}

impl ForwardTables {
    /// Runs the include/exclude recurrence for every prefix of `elements` and
    /// every sum in `0..=target`.
    pub fn build(elements: &ElementSet, target: usize) -> Result<Self, SolveError> {
        let n = elements.len();
        let cols = target + 1;
        info!("Forward pass over {} rows x {} sums", n + 1, cols);

        let mut num_subsets = Table::new(n + 1, cols, 0u64);
        let mut min_size: Table<MinSize> = Table::new(n + 1, cols, None);

        num_subsets.set(0, 0, 1);
        min_size.set(0, 0, Some(0));

        for i in 1..=n {
            let elem = elements.get(i - 1);

            let (prev_count, count) = num_subsets.prev_and_row_mut(i);
            for s in 0..cols {
                let mut c = prev_count[s];
                if let Some(rest) = elem.remainder(s) {
                    c = c
                        .checked_add(prev_count[rest])
                        .ok_or_else(|| SolveError::CountOverflow {
                            table: "subset count",
                            row: i,
                            sum: s,
                        })?;
                }
                count[s] = c;
            }

            let (prev_size, size) = min_size.prev_and_row_mut(i);
            for s in 0..cols {
                let excluded = prev_size[s];
                let included = elem
                    .remainder(s)
                    .and_then(|rest| prev_size[rest])
                    .and_then(|m| m.checked_add(1));
                size[s] = match (excluded, included) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
            }
        }

        trace!("Subset counts at sum {}:\n{}", target, num_subsets.column(target));
        trace!("Minimum sizes at sum {}:\n{}", target, min_size.column(target));

        Ok(Self {
            num_subsets,
            min_size,
        })
    }

    /// Number of element rows, i.e. `n`.
    pub fn elements(&self) -> usize {
        self.num_subsets.rows() - 1
    }

    pub fn target(&self) -> usize {
        self.num_subsets.cols() - 1
    }

    /// `numSubsets[n][target]`.
    pub fn subset_count(&self) -> u64 {
        self.num_subsets.get(self.elements(), self.target())
    }

    /// `minSize[n][target]`, `None` when unreachable.
    pub fn minimum_size(&self) -> Option<usize> {
        self.min_size
            .get(self.elements(), self.target())
            .map(|m| m as usize)
    }

    /// Feasibility of the target with all elements.
    pub fn solvable(&self) -> bool {
        let solvable = self.subset_count() > 0;
        debug_assert_eq!(solvable, self.minimum_size().is_some());
        solvable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn set(weights: &[u64]) -> ElementSet {
        ElementSet::from_input_order(
            weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Element::new(w, &format!("e{}", i)))
                .collect(),
        )
    }

    #[test]
    fn test_row_zero() {
        let t = ForwardTables::build(&set(&[3, 5]), 6).unwrap();
        assert_eq!(t.num_subsets.get(0, 0), 1);
        assert_eq!(t.min_size.get(0, 0), Some(0));
        for s in 1..=6 {
            assert_eq!(t.num_subsets.get(0, s), 0);
            assert_eq!(t.min_size.get(0, s), None);
        }
    }

    #[test]
    fn test_counts_and_sizes() {
        // 12 alice, 9 bob, 22 cathy, 12 doug
        let t = ForwardTables::build(&set(&[12, 9, 22, 12]), 21).unwrap();
        assert!(t.solvable());
        assert_eq!(t.num_subsets.get(4, 21), 2); // alice+bob, bob+doug
        assert_eq!(t.min_size.get(4, 21), Some(2));
        assert_eq!(t.num_subsets.get(4, 12), 2);
        assert_eq!(t.min_size.get(4, 12), Some(1));
        assert_eq!(t.num_subsets.get(4, 20), 0);
        assert_eq!(t.min_size.get(4, 20), None);
    }

    #[test]
    fn test_zero_weights_double_the_count() {
        let t = ForwardTables::build(&set(&[0, 0, 0]), 0).unwrap();
        assert_eq!(t.num_subsets.get(3, 0), 8);
        assert_eq!(t.min_size.get(3, 0), Some(0));
    }

    #[test]
    fn test_no_elements() {
        let t = ForwardTables::build(&set(&[]), 0).unwrap();
        assert!(t.solvable());
        let t = ForwardTables::build(&set(&[]), 4).unwrap();
        assert!(!t.solvable());
    }

    #[test]
    fn test_weight_beyond_target_is_ignored() {
        let t = ForwardTables::build(&set(&[u64::MAX, 2]), 2).unwrap();
        assert_eq!(t.num_subsets.get(2, 2), 1);
        assert_eq!(t.min_size.get(2, 2), Some(1));
    }

    #[test]
    fn test_count_overflow_is_reported() {
        let zeros = vec![0u64; 64];
        let err = ForwardTables::build(&set(&zeros), 0).unwrap_err();
        match err {
            SolveError::CountOverflow { row, sum, .. } => {
                assert_eq!(row, 64);
                assert_eq!(sum, 0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
