use log::{debug, trace};

use crate::element::ElementSet;
use crate::error::SolveError;
use crate::forward::ForwardTables;
use crate::table::{Table, extends_optimum, keeps_optimum};

/// Number of minimum-cardinality completions flowing through each cell on the
/// way to `(n, target)`. Only anchored when the target is feasible.
#[derive(Debug)]
pub struct SolThru {
    table: Table<u64>,
}

impl SolThru {
    /// Walks rows `n` down to `1`, pushing each cell's count into the row above
    /// along every branch that stays on an optimal path.
    pub fn build(elements: &ElementSet, forward: &ForwardTables) -> Result<Self, SolveError> {
        let n = forward.elements();
        let target = forward.target();
        let min_size = &forward.min_size;

        let mut table = Table::new(n + 1, target + 1, 0u64);
        if forward.solvable() {
            table.set(n, target, 1);
        }

        for i in (1..=n).rev() {
            let elem = elements.get(i - 1);
            let (above, row) = table.prev_mut_and_row(i);

            for s in (0..=target).rev() {
                let through = row[s];
                if through == 0 {
                    continue;
                }
                let cur = min_size.get(i, s);

                // element i excluded
                if keeps_optimum(min_size.get(i - 1, s), cur) {
                    above[s] = add(above[s], through, i - 1, s)?;
                }

                // element i included
                if let Some(rest) = elem.remainder(s) {
                    if extends_optimum(min_size.get(i - 1, rest), cur) {
                        above[rest] = add(above[rest], through, i - 1, rest)?;
                    }
                }
            }
        }

        trace!("Min-size completions at sum 0:\n{}", table.column(0));
        debug!("{} minimum-size subsets", table.get(0, 0));

        Ok(Self { table })
    }

    /// The number of distinct minimum-cardinality subsets reaching the target.
    pub fn num_min(&self) -> u64 {
        self.table.get(0, 0)
    }
}

fn add(a: u64, b: u64, row: usize, sum: usize) -> Result<u64, SolveError> {
    a.checked_add(b).ok_or_else(|| SolveError::CountOverflow {
        table: "minimum-size completion",
        row,
        sum,
    })
}
