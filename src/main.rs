use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use percolate::percolation::Percolation;
use percolate::scenario::Scenario;

/// percolate - Replay site-opening scenarios and report grid connectivity
///
/// Each scenario file holds the grid side followed by (row, col) pairs to
/// open in order. One summary line is printed per scenario.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Scenario files, or directories to scan for .txt scenarios.
    /// Reads a single scenario from stdin if no path is given.
    #[clap(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Number of threads for replaying scenarios (0 = all cores)
    #[clap(short = 't', long = "threads", default_value = "0")]
    threads: usize,

    /// Quiet mode (no progress output)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Per-scenario result, one stdout line each.
struct Summary {
    name: String,
    side: usize,
    open: usize,
    full: usize,
    percolates: bool,
}

impl Summary {
    fn from_grid(name: String, grid: &Percolation) -> Result<Summary> {
        let mut full = 0;
        for row in 1..=grid.side() {
            for col in 1..=grid.side() {
                if grid.is_full(row, col)? {
                    full += 1;
                }
            }
        }

        Ok(Summary {
            name,
            side: grid.side(),
            open: grid.open_site_count(),
            full,
            percolates: grid.percolates(),
        })
    }

    fn print(&self) {
        println!(
            "{}: n={} open={} full={} percolates={}",
            self.name,
            self.side,
            self.open,
            self.full,
            if self.percolates { "yes" } else { "no" }
        );
    }
}

/// Expand files and directories into the list of scenario files to replay.
/// Directories are scanned (non-recursively) for .txt files, sorted so output
/// order is deterministic.
fn collect_scenario_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("scanning {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }

    if files.is_empty() {
        anyhow::bail!("no scenario files found");
    }
    Ok(files)
}

fn summarize_file(path: &Path) -> Result<Summary> {
    let scenario = Scenario::from_path(path)?;
    let grid = scenario.replay()?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Summary::from_grid(name, &grid)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    // Set up rayon thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    // No paths: read one scenario from stdin, or print help on a terminal
    if args.paths.is_empty() {
        use std::io::IsTerminal;
        if io::stdin().is_terminal() {
            use clap::CommandFactory;
            Args::command().print_help()?;
            return Ok(());
        }

        let scenario =
            Scenario::from_reader(io::stdin().lock()).context("reading scenario from stdin")?;
        let grid = scenario.replay()?;
        Summary::from_grid("<stdin>".to_string(), &grid)?.print();
        return Ok(());
    }

    let files = collect_scenario_files(&args.paths)?;
    if !args.quiet {
        eprintln!("Replaying {} scenario(s)...", files.len());
    }

    let summaries: Vec<Summary> = files
        .par_iter()
        .map(|path| summarize_file(path).with_context(|| format!("replaying {}", path.display())))
        .collect::<Result<Vec<_>>>()?;

    for summary in &summaries {
        summary.print();
    }

    Ok(())
}
