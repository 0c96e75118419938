use derive_more::derive::From;
use thiserror::Error;

pub mod arena;
pub mod driver;
pub mod node;
pub mod stats;
pub mod strategy;

pub use driver::{run, run_with, Params, Report, Summary};
pub use node::{checksum, make_tree, Node};

/// Shallowest depth the churn loop visits.
pub const MIN_DEPTH: u32 = 4;

#[derive(Debug, From, Error)]
pub enum Error {
    #[error("IO Error: {0}")]
    Io(std::io::Error),
}
