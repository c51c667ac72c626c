use knap_challenges::{KnapsackError, KnapsackResult};
use std::ops::{Index, IndexMut};

/// Upper bound on the memory of a DP table or memo, in bytes.
pub const MAX_TABLE_BYTES: usize = 1 << 29;

/// Row-major `rows x (capacity + 1)` table stored in one flat allocation.
#[derive(Debug, Clone)]
pub struct Table<T> {
    cells: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T: Clone> Table<T> {
    pub fn new(rows: usize, capacity: u64, fill: T) -> KnapsackResult<Self> {
        Self::with_limit(rows, capacity, fill, MAX_TABLE_BYTES)
    }

    /// Allocates the table only if its cells fit in `limit` bytes.
    pub fn with_limit(rows: usize, capacity: u64, fill: T, limit: usize) -> KnapsackResult<Self> {
        let columns = usize::try_from(capacity)
            .ok()
            .and_then(|c| c.checked_add(1));
        let cells = columns.and_then(|c| rows.checked_mul(c));
        let bytes = cells.and_then(|c| c.checked_mul(std::mem::size_of::<T>()));
        match (columns, cells, bytes) {
            (Some(columns), Some(cells), Some(bytes)) if bytes <= limit => Ok(Self {
                cells: vec![fill; cells],
                rows,
                columns,
            }),
            (columns, _, _) => Err(KnapsackError::ResourceExhaustion {
                rows,
                columns: columns.unwrap_or(usize::MAX),
                limit,
            }),
        }
    }
}

impl<T> Table<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows && column < self.columns {
            self.cells.get(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && column < self.columns);
        &self.cells[row * self.columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && column < self.columns);
        &mut self.cells[row * self.columns + column]
    }
}
