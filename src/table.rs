use std::fmt;

/// Minimum subset cardinality for a cell, `None` when no subset reaches it.
pub type MinSize = Option<u32>;

/// Dense `(rows x cols)` table stored row-major in a single allocation.
/// Row `i` is the element-prefix length, column `s` the partial sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Table<T> {
    /// Creates a table with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.cells.len() / self.cols
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.cols);
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(col < self.cols);
        self.cells[row * self.cols + col] = value;
    }

    /// Borrows row `row - 1` immutably and row `row` mutably, for row-to-row recurrences.
    pub fn prev_and_row_mut(&mut self, row: usize) -> (&[T], &mut [T]) {
        debug_assert!(row >= 1);
        let (head, tail) = self.cells.split_at_mut(row * self.cols);
        (&head[(row - 1) * self.cols..], &mut tail[..self.cols])
    }

    /// Borrows row `row - 1` mutably and row `row` immutably, for backward passes.
    pub fn prev_mut_and_row(&mut self, row: usize) -> (&mut [T], &[T]) {
        debug_assert!(row >= 1);
        let (head, tail) = self.cells.split_at_mut(row * self.cols);
        (&mut head[(row - 1) * self.cols..], &tail[..self.cols])
    }

    /// Renders column `col` top to bottom, one row per line.
    pub fn column(&self, col: usize) -> ColumnView<'_, T> {
        ColumnView { table: self, col }
    }
}

/// True when excluding an element keeps the optimum: the shorter prefix reaches
/// the same sum with the same cardinality.
#[inline(always)]
pub fn keeps_optimum(prev: MinSize, cur: MinSize) -> bool {
    prev.is_some() && prev == cur
}

/// True when including an element keeps the optimum: the remainder cell is one
/// element smaller than the current cell.
#[inline(always)]
pub fn extends_optimum(prev: MinSize, cur: MinSize) -> bool {
    match (prev, cur) {
        (Some(p), Some(c)) => p.checked_add(1) == Some(c),
        _ => false,
    }
}

/// Display adapter for one column of a table.
pub struct ColumnView<'a, T> {
    table: &'a Table<T>,
    col: usize,
}

impl<T: Copy + fmt::Debug> fmt::Display for ColumnView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.table.rows() {
            writeln!(f, "{:>6} {:?}", row, self.table.get(row, self.col))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table() {
        let t = Table::new(3, 4, 0u64);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 4);
        assert_eq!(t.get(2, 3), 0);
    }

    #[test]
    fn test_set_get() {
        let mut t = Table::new(2, 2, None);
        t.set(1, 0, Some(3u32));
        assert_eq!(t.get(1, 0), Some(3));
        assert_eq!(t.get(0, 0), None);
    }

    #[test]
    fn test_adjacent_rows() {
        let mut t = Table::new(3, 2, 0u64);
        t.set(1, 0, 7);
        {
            let (prev, row) = t.prev_and_row_mut(2);
            row[1] = prev[0] + 1;
        }
        assert_eq!(t.get(2, 1), 8);

        {
            let (prev, row) = t.prev_mut_and_row(2);
            prev[1] = row[1] * 2;
        }
        assert_eq!(t.get(1, 1), 16);
    }

    #[test]
    fn test_optimality_predicates() {
        assert!(keeps_optimum(Some(2), Some(2)));
        assert!(!keeps_optimum(None, None));
        assert!(!keeps_optimum(Some(1), Some(2)));

        assert!(extends_optimum(Some(1), Some(2)));
        assert!(extends_optimum(Some(0), Some(1)));
        assert!(!extends_optimum(Some(0), Some(0)));
        assert!(!extends_optimum(None, Some(1)));
        assert!(!extends_optimum(Some(1), None));
        assert!(!extends_optimum(Some(u32::MAX), Some(u32::MAX)));
    }

    #[test]
    fn test_column_display() {
        let mut t = Table::new(2, 3, 0u64);
        t.set(1, 2, 5);
        assert_eq!(t.column(2).to_string(), "     0 0\n     1 5\n");
    }
}
