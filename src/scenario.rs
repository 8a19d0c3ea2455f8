/// Scenario files: the stream format that feeds openings into a grid.
///
/// A scenario is a whitespace-separated stream of integers: the grid side n
/// first, then (row, col) pairs to open in order, until end of stream.
/// Newlines carry no meaning beyond separating tokens. The percolation core
/// never sees this format; it only receives the resulting `open` calls.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::percolation::Percolation;

/// A parsed opening sequence: grid side plus 1-indexed (row, col) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub side: usize,
    pub openings: Vec<(usize, usize)>,
}

impl Scenario {
    /// Parse a scenario from a token stream.
    pub fn from_reader(reader: impl BufRead) -> Result<Scenario> {
        let mut tokens = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("reading line {}", line_no + 1))?;
            for token in line.split_whitespace() {
                let value: usize = token.parse().with_context(|| {
                    format!("invalid integer {:?} on line {}", token, line_no + 1)
                })?;
                tokens.push(value);
            }
        }

        let mut tokens = tokens.into_iter();
        let Some(side) = tokens.next() else {
            bail!("scenario is empty; expected the grid side first");
        };

        let rest: Vec<usize> = tokens.collect();
        if rest.len() % 2 != 0 {
            bail!("scenario ends with a row that has no matching column");
        }
        let openings = rest.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();

        Ok(Scenario { side, openings })
    }

    /// Load a scenario from a file.
    pub fn from_path(path: &Path) -> Result<Scenario> {
        let file =
            File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Replay every opening, in order, against a fresh grid.
    pub fn replay(&self) -> Result<Percolation> {
        let mut grid = Percolation::new(self.side)
            .with_context(|| format!("creating a {0}x{0} grid", self.side))?;
        for &(row, col) in &self.openings {
            grid.open(row, col)
                .with_context(|| format!("opening site ({}, {})", row, col))?;
        }

        debug!(
            "replayed {} openings on a {}x{} grid ({} distinct, percolates: {})",
            self.openings.len(),
            self.side,
            self.side,
            grid.open_site_count(),
            grid.percolates()
        );
        Ok(grid)
    }
}
