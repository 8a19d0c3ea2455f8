/// Incremental percolation tracking over a randomly-blocked square grid.
///
/// Sites open one at a time; the structure answers "is this site connected to
/// the top row?" (`is_full`) and "does an open path span top to bottom?"
/// (`percolates`) in amortized near-constant time.
///
/// Two disjoint-set forests back the queries. The fullness forest holds every
/// site plus a virtual top sentinel; the spanning forest holds every site
/// plus both a top and a bottom sentinel. Fullness must never be read from
/// the spanning forest: its shared bottom sentinel would report bottom-row
/// sites as full the moment the system percolates, even with no open path to
/// the top (the backwash bug). Both forests are mutated together by `open`
/// and never share state.
use crate::grid::{GridError, SquareGrid};
use crate::union_find::UnionFind;

#[derive(Clone, Debug)]
pub struct Percolation {
    grid: SquareGrid,
    open: Vec<bool>,
    open_count: usize,
    /// Sites plus the top sentinel; answers `is_full`.
    fullness: UnionFind,
    /// Sites plus both sentinels; answers `percolates` only.
    spanning: UnionFind,
}

impl Percolation {
    /// Create an n-by-n grid with every site closed.
    pub fn new(side: usize) -> Result<Percolation, GridError> {
        let grid = SquareGrid::new(side)?;
        let sites = grid.site_count();

        Ok(Percolation {
            grid,
            open: vec![false; sites],
            open_count: 0,
            fullness: UnionFind::new(sites + 1),
            spanning: UnionFind::new(sites + 2),
        })
    }

    /// Grid side length n.
    pub fn side(&self) -> usize {
        self.grid.side()
    }

    fn top_sentinel(&self) -> usize {
        self.grid.site_count()
    }

    fn bottom_sentinel(&self) -> usize {
        self.grid.site_count() + 1
    }

    /// Open the site at 1-indexed (row, col) and connect it to its open
    /// neighbors. Opening an already-open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let site = self.grid.index_of(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;

        for neighbor in self.grid.neighbors(row, col) {
            if self.open[neighbor] {
                self.fullness.union(site, neighbor);
                self.spanning.union(site, neighbor);
            }
        }

        if row == 1 {
            let top = self.top_sentinel();
            self.fullness.union(site, top);
            self.spanning.union(site, top);
        }
        // Bottom-row sites join the bottom sentinel in the spanning forest
        // only; the fullness forest has no bottom sentinel.
        if row == self.grid.side() {
            let bottom = self.bottom_sentinel();
            self.spanning.union(site, bottom);
        }

        Ok(())
    }

    /// Whether the site at (row, col) is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.open[self.grid.index_of(row, col)?])
    }

    /// Whether the site at (row, col) is open and connected to the top row
    /// through open neighbors. A closed site is never full.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let site = self.grid.index_of(row, col)?;
        Ok(self.open[site] && self.fullness.connected(site, self.top_sentinel()))
    }

    /// Number of distinct sites opened so far.
    pub fn open_site_count(&self) -> usize {
        self.open_count
    }

    /// Whether an open path connects the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.spanning
            .connected(self.top_sentinel(), self.bottom_sentinel())
    }
}
