/// Golden scenario tests: fixture files replayed end to end
///
/// Each scenario is written to disk in the on-disk stream format (grid side
/// first, then row/col pairs) and replayed through the public API, the same
/// path the CLI takes.
use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use percolate::percolation::Percolation;
use percolate::scenario::Scenario;

fn replay(contents: &str) -> Result<Percolation> {
    let dir = TempDir::new()?;
    let path = dir.path().join("scenario.txt");
    fs::write(&path, contents)?;
    Scenario::from_path(&path)?.replay()
}

#[test]
fn vertical_column_percolates() -> Result<()> {
    let grid = replay("3\n1 1\n2 1\n3 1\n")?;

    assert_eq!(grid.open_site_count(), 3);
    assert!(grid.is_full(3, 1)?);
    assert!(grid.percolates());
    Ok(())
}

#[test]
fn separated_rows_do_not_percolate() -> Result<()> {
    // Top and bottom rows fully open, middle row closed.
    let grid = replay("3\n1 1\n1 2\n1 3\n3 1\n3 2\n3 3\n")?;

    assert_eq!(grid.open_site_count(), 6);
    assert!(grid.is_full(1, 2)?);
    assert!(!grid.is_full(3, 2)?);
    assert!(!grid.percolates());
    Ok(())
}

#[test]
fn diagonal_chain_does_not_percolate() -> Result<()> {
    let grid = replay("3\n1 1\n2 2\n3 3\n")?;

    assert!(!grid.is_full(2, 2)?);
    assert!(!grid.percolates());
    Ok(())
}

#[test]
fn single_site_scenario_percolates() -> Result<()> {
    let grid = replay("1\n1 1\n")?;

    assert!(grid.is_full(1, 1)?);
    assert!(grid.percolates());
    Ok(())
}

#[test]
fn empty_opening_sequence_stays_closed() -> Result<()> {
    let grid = replay("1\n")?;

    assert_eq!(grid.open_site_count(), 0);
    assert!(!grid.percolates());
    Ok(())
}

#[test]
fn percolating_grid_does_not_backwash() -> Result<()> {
    // Column 1 percolates; (4, 4) is open but unreachable from the top.
    let grid = replay("4\n1 1\n2 1\n3 1\n4 1\n4 4\n")?;

    assert!(grid.percolates());
    assert!(grid.is_open(4, 4)?);
    assert!(!grid.is_full(4, 4)?);
    Ok(())
}

#[test]
fn duplicate_openings_count_once() -> Result<()> {
    let grid = replay("2\n1 1\n1 1\n2 1\n")?;

    assert_eq!(grid.open_site_count(), 2);
    assert!(grid.percolates());
    Ok(())
}

#[test]
fn winding_path_with_distractors() -> Result<()> {
    // A 6x6 grid with a single winding top-to-bottom path plus three open
    // sites that never join it.
    let grid = replay(
        "6\n\
         1 3\n2 3\n2 2\n3 2\n4 2\n4 3\n4 4\n5 4\n6 4\n\
         1 6\n6 1\n3 5\n",
    )?;

    assert_eq!(grid.open_site_count(), 12);
    assert!(grid.percolates());

    // Every site on the path is full.
    for (row, col) in [
        (1, 3),
        (2, 3),
        (2, 2),
        (3, 2),
        (4, 2),
        (4, 3),
        (4, 4),
        (5, 4),
        (6, 4),
    ] {
        assert!(grid.is_full(row, col)?, "({row}, {col}) should be full");
    }

    // The distractors are open but dry; (6, 1) is the backwash witness.
    assert!(grid.is_full(1, 6)?);
    assert!(!grid.is_full(6, 1)?);
    assert!(!grid.is_full(3, 5)?);
    Ok(())
}

#[test]
fn loads_scenarios_with_irregular_whitespace() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("spaced.txt");
    fs::write(&path, "  2\t1 1\n\n   2 1   ")?;

    let scenario = Scenario::from_path(&path)?;
    assert_eq!(scenario.side, 2);
    assert_eq!(scenario.openings, vec![(1, 1), (2, 1)]);
    assert!(scenario.replay()?.percolates());
    Ok(())
}
