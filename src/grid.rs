/// 1-indexed square-grid coordinates and their row-major linear mapping.
///
/// `SquareGrid` is pure geometry: it validates (row, col) pairs, translates
/// them to 0-indexed site indices, and enumerates in-grid neighbors. It knows
/// nothing about open/closed state or connectivity, which keeps validation
/// and indexing testable on their own.
use thiserror::Error;

/// Errors surfaced by grid construction and coordinate validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The grid side must be at least 1. Fatal to construction; no partial
    /// grid is returned.
    #[error("grid side must be at least 1")]
    InvalidDimension,

    /// A coordinate fell outside `[1, side]`. Raised before any state is
    /// touched, so the call is safe to retry with corrected coordinates.
    #[error("site ({row}, {col}) is outside the {side}x{side} grid")]
    SiteOutOfRange {
        row: usize,
        col: usize,
        side: usize,
    },
}

/// Square n-by-n geometry with 1-indexed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGrid {
    side: usize,
}

impl SquareGrid {
    pub fn new(side: usize) -> Result<SquareGrid, GridError> {
        if side == 0 {
            return Err(GridError::InvalidDimension);
        }
        Ok(SquareGrid { side })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of sites, `side * side`.
    pub fn site_count(&self) -> usize {
        self.side * self.side
    }

    /// Map a 1-indexed (row, col) pair to its 0-indexed row-major site index.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if !self.contains(row, col) {
            return Err(GridError::SiteOutOfRange {
                row,
                col,
                side: self.side,
            });
        }
        Ok((row - 1) * self.side + (col - 1))
    }

    fn contains(&self, row: usize, col: usize) -> bool {
        (1..=self.side).contains(&row) && (1..=self.side).contains(&col)
    }

    /// Site indices of the up/down/left/right neighbors that lie inside the
    /// grid. Expects an already-validated (row, col).
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = usize> {
        debug_assert!(self.contains(row, col));

        const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let side = self.side;
        let mut out = [0usize; 4];
        let mut count = 0;
        for (dr, dc) in OFFSETS {
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if r >= 1 && r <= side as i64 && c >= 1 && c <= side as i64 {
                out[count] = (r as usize - 1) * side + (c as usize - 1);
                count += 1;
            }
        }
        out.into_iter().take(count)
    }
}
