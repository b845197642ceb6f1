use log::{debug, info, warn};

use crate::element::{Element, ElementSet};
use crate::error::SolveError;
use crate::forward::ForwardTables;
use crate::multiplicity::SolThru;
use crate::witness;

/// Bytes per (prefix, sum) cell across the count, minimum-size and completion tables.
const BYTES_PER_CELL: u128 = 8 + 8 + 8;

/// Resource bounds applied before any table is allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_table_bytes: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_table_bytes: 1 << 30,
        }
    }
}

/// Backward-pass results, present only for a feasible target.
#[derive(Debug)]
struct Solution {
    sol_thru: SolThru,
    witness: Vec<String>,
}

/// Tables and results of the last successful query.
#[derive(Debug)]
struct Solved {
    target: u64,
    forward: ForwardTables,
    solution: Option<Solution>,
}

/// A subset-sum solver over one element set. Queries are answered from
/// instance-owned tables that are rebuilt whenever the target or the element
/// set changes.
///
/// Single owner, single writer: `solve` takes `&mut self` and nothing is shared.
#[derive(Debug, Default)]
pub struct SsumInstance {
    elements: ElementSet,
    limits: Limits,
    solved: Option<Solved>,
    computations: u64,
}

impl SsumInstance {
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Replaces the element set; `pairs` are in input order. Drops any cached tables.
    pub fn load_elements(&mut self, pairs: Vec<Element>) {
        self.elements = ElementSet::from_input_order(pairs);
        self.solved = None;
        if self.elements.is_empty() {
            warn!("No elements loaded, only a target of 0 is reachable");
        } else {
            debug!("Loaded {} elements", self.elements.len());
        }
    }

    /// Number of loaded elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Target of the last successful `solve`, if any.
    pub fn target(&self) -> Option<u64> {
        self.solved.as_ref().map(|s| s.target)
    }

    /// Fills the tables for `target` and returns whether it is reachable.
    /// Repeating the last target answers from the cache. On error the previous
    /// tables are left untouched.
    pub fn solve(&mut self, target: u64) -> Result<bool, SolveError> {
        if let Some(solved) = &self.solved {
            if solved.target == target {
                debug!("Cache hit for target {}", target);
                return Ok(solved.solution.is_some());
            }
        }

        let cols = self.check_limits(target)?;
        let n = self.elements.len();
        info!("Solving target {} over {} elements", target, n);

        self.computations += 1;
        debug!("Table build #{}", self.computations);
        let forward = ForwardTables::build(&self.elements, cols - 1)?;

        let solution = if forward.solvable() {
            let sol_thru = SolThru::build(&self.elements, &forward)?;
            let witness = witness::canonical_witness(&self.elements, &forward);
            debug_assert_eq!(Some(witness.len()), forward.minimum_size());
            Some(Solution { sol_thru, witness })
        } else {
            None
        };

        let solvable = solution.is_some();
        info!(
            "Target {} is {}feasible",
            target,
            if solvable { "" } else { "not " }
        );

        self.solved = Some(Solved {
            target,
            forward,
            solution,
        });

        Ok(solvable)
    }

    /// Number of distinct subsets summing to the solved target.
    pub fn subset_count(&self) -> Option<u64> {
        self.feasible().map(|s| s.forward.subset_count())
    }

    /// Smallest cardinality among subsets summing to the solved target.
    pub fn minimum_size(&self) -> Option<usize> {
        self.feasible().and_then(|s| s.forward.minimum_size())
    }

    /// Number of subsets of minimum cardinality.
    pub fn minimum_size_solution_count(&self) -> Option<u64> {
        self.feasible()
            .and_then(|s| s.solution.as_ref())
            .map(|sol| sol.sol_thru.num_min())
    }

    /// Canonical minimum-size subset, names in input order.
    pub fn canonical_witness(&self) -> Option<&[String]> {
        self.feasible()
            .and_then(|s| s.solution.as_ref())
            .map(|sol| sol.witness.as_slice())
    }

    fn feasible(&self) -> Option<&Solved> {
        self.solved.as_ref().filter(|s| s.solution.is_some())
    }

    /// Returns the number of table columns for `target` or the resource error.
    fn check_limits(&self, target: u64) -> Result<usize, SolveError> {
        let rows = self.elements.len() + 1;
        let bytes = (rows as u128)
            .saturating_mul(target as u128 + 1)
            .saturating_mul(BYTES_PER_CELL);
        let over = || SolveError::ResourceLimitExceeded {
            rows,
            cols: target.saturating_add(1),
            bytes,
            limit: self.limits.max_table_bytes,
        };

        if bytes > self.limits.max_table_bytes as u128 {
            return Err(over());
        }
        let cols = usize::try_from(target)
            .ok()
            .and_then(|t| t.checked_add(1))
            .ok_or_else(over)?;
        Ok(cols)
    }
}
