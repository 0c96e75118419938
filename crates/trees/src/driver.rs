use std::fmt::Display;
use std::io::Write;

use log::debug;

use crate::node::{checksum, make_tree};
use crate::strategy::{Boxed, TreeStrategy};
use crate::{Error, MIN_DEPTH};

/// Depth parameters derived from the benchmark size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Params {
    pub min_depth: u32,
    pub max_depth: u32,
    pub stretch_depth: u32,
}

impl Params {
    /// Sizes below `min_depth + 2`, negatives included, run at that floor.
    pub fn new(n: i32) -> Self {
        let min_depth = MIN_DEPTH;
        let floor = min_depth + 2;
        let max_depth = u32::try_from(n).map_or(floor, |n| n.max(floor));

        Params {
            min_depth,
            max_depth,
            stretch_depth: max_depth + 1,
        }
    }

    /// Depth of the tree kept alive for the whole run.
    pub fn long_lived_depth(&self) -> u32 {
        self.max_depth + 1
    }

    /// Depths visited by the churn loop, smallest first.
    pub fn depths(&self) -> impl Iterator<Item = u32> {
        (self.min_depth..=self.max_depth).step_by(2)
    }

    /// Trees built at `depth`. Shallower depths build more trees so every
    /// pass allocates roughly the same number of nodes.
    pub fn iterations(&self, depth: u32) -> u64 {
        1u64 << (self.max_depth - depth + self.min_depth)
    }
}

/// One line of benchmark output.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Report {
    Stretch { depth: u32, check: u64 },
    Depth { iterations: u64, depth: u32, check: u64 },
    LongLived { depth: u32, check: u64 },
}

impl Report {
    pub fn check(&self) -> u64 {
        match self {
            Report::Stretch { check, .. }
            | Report::Depth { check, .. }
            | Report::LongLived { check, .. } => *check,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Stretch { depth, check } => {
                write!(f, "stretch tree of depth {depth}\t check: {check}")
            }
            Report::Depth {
                iterations,
                depth,
                check,
            } => write!(f, "{iterations}\t trees of depth {depth}\t check: {check}"),
            Report::LongLived { depth, check } => {
                write!(f, "long lived tree of depth {depth}\t check: {check}")
            }
        }
    }
}

/// Everything a run reported, in output order.
#[derive(Default, Debug)]
pub struct Summary {
    pub reports: Vec<Report>,
    /// Nodes built over the whole run, long-lived tree included.
    pub nodes_built: u64,
}

impl Summary {
    fn record<W: Write>(&mut self, out: &mut W, report: Report) -> Result<(), Error> {
        writeln!(out, "{report}")?;
        self.reports.push(report);

        Ok(())
    }
}

/// Run the benchmark with boxed trees, writing each report line to `out`
/// as soon as it is known.
pub fn run<W: Write>(n: i32, out: &mut W) -> Result<Summary, Error> {
    run_with(n, &mut Boxed, out)
}

/// Run the benchmark, using `strategy` for the short-lived trees of the
/// depth passes. The stretch and long-lived trees are always boxed.
pub fn run_with<S: TreeStrategy, W: Write>(
    n: i32,
    strategy: &mut S,
    out: &mut W,
) -> Result<Summary, Error> {
    let params = Params::new(n);
    let mut summary = Summary::default();

    debug!("Running with {params:?}");

    let stretch = stretch_pass(params.stretch_depth);
    summary.nodes_built = summary.nodes_built.saturating_add(stretch.check());
    summary.record(out, stretch)?;

    let long_lived_depth = params.long_lived_depth();
    debug!("Building long lived tree of depth {long_lived_depth}");
    let long_lived = make_tree(long_lived_depth);

    for depth in params.depths() {
        let report = depth_pass(strategy, depth, params.iterations(depth));
        summary.nodes_built = summary.nodes_built.saturating_add(report.check());
        summary.record(out, report)?;
    }

    let check = checksum(&long_lived);
    drop(long_lived);
    summary.nodes_built = summary.nodes_built.saturating_add(check);

    summary.record(
        out,
        Report::LongLived {
            depth: params.max_depth,
            check,
        },
    )?;

    Ok(summary)
}

/// Build one tree of `depth`, checksum it and free it.
pub fn stretch_pass(depth: u32) -> Report {
    debug!("Building stretch tree of depth {depth}");

    let tree = make_tree(depth);
    let check = checksum(&tree);
    drop(tree);

    Report::Stretch { depth, check }
}

/// Build, checksum and release `iterations` trees of `depth`, one at a time.
pub fn depth_pass<S: TreeStrategy>(strategy: &mut S, depth: u32, iterations: u64) -> Report {
    debug!("Building {iterations} trees of depth {depth}");

    let mut check = 0;
    for _ in 0..iterations {
        check += strategy.churn(depth);
    }

    Report::Depth {
        iterations,
        depth,
        check,
    }
}
