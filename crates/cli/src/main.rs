use std::io::{stdout, Write};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use cli_common::{parse_size, DEFAULT_SIZE};
use log::info;
use trees::stats::RunStats;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Allocation and deallocation throughput benchmark over perfect binary trees.
#[derive(Parser, Debug)]
#[command(name = "bintrees", version)]
struct Args {
    /// Deepest tree depth of the churn loop (raised to at least 6).
    #[arg(
        value_name = "N",
        default_value_t = DEFAULT_SIZE,
        value_parser = parse_size,
        allow_negative_numbers = true
    )]
    n: i32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    info!("Running binary trees with size {}", args.n);

    let started = Instant::now();
    let mut out = stdout().lock();
    let summary = trees::run(args.n, &mut out)?;
    out.flush()?;

    info!("{}", RunStats::collect(started.elapsed(), &summary));

    Ok(())
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let args = Args::try_parse_from(["bintrees"]).unwrap();

        assert_eq!(args.n, 21);
    }

    #[test]
    fn test_explicit_size() {
        let args = Args::try_parse_from(["bintrees", "4"]).unwrap();

        assert_eq!(args.n, 4);
    }

    #[test]
    fn test_invalid_size_names_input() {
        let err = Args::try_parse_from(["bintrees", "twenty"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("twenty"));
    }

    #[test]
    fn test_negative_size_accepted() {
        let args = Args::try_parse_from(["bintrees", "-3"]).unwrap();

        assert_eq!(args.n, -3);
    }

    #[test]
    fn test_padded_size_rejected() {
        let err = Args::try_parse_from(["bintrees", " 7 "]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_oversized_rejected() {
        let err = Args::try_parse_from(["bintrees", "60"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(Args::try_parse_from(["bintrees", "4", "5"]).is_err());
    }
}
