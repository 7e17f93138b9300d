//! Command-line front end for `prime_count_lib`.

use std::{io::Write, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use prime_count_lib::{
    parse_bound, Classification, PrimalityTest, PrimeCounter, Strategy, Summary, DEFAULT_BOUND,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Count the primes below a bound by trial division.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Exclusive upper bound of the search range.
    #[arg(
        env = "PRIME_BOUND",
        default_value_t = DEFAULT_BOUND,
        value_parser = parse_bound,
        allow_hyphen_values = true
    )]
    pub bound: u32,

    /// Divisor range each candidate is checked against.
    #[arg(
        short,
        long,
        value_enum,
        env = "PRIME_STRATEGY",
        default_value_t = Strategy::TrialDivision
    )]
    pub strategy: Strategy,

    /// How the primality test classifies 0 and 1.
    ///
    /// Only the test itself is affected: the scan starts at 2, so the reported
    /// count is the same under either classification.
    #[arg(
        short,
        long,
        value_enum,
        env = "PRIME_CLASSIFICATION",
        default_value_t = Classification::Mathematical
    )]
    pub classification: Classification,

    /// Print the summary as a single JSON object.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn primality_test(&self) -> PrimalityTest {
        PrimalityTest::new(self.strategy, self.classification)
    }
}

/// Logs go to stderr; stdout only carries the summary.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time();

    Registry::default().with(fmt_layer).with(filter).init();
}

/// Counts the primes below `args.bound` and writes the one-line summary to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<Summary> {
    let test = args.primality_test();
    tracing::info!(
        "Counting primes below {} ({}, {} classification)",
        args.bound,
        test.strategy,
        test.classification
    );

    let instant = Instant::now();
    let primes = PrimeCounter::new(test).count_below(args.bound);
    let elapsed = instant.elapsed();
    tracing::info!("Found {} primes in {:?}", primes.count(), elapsed);

    let summary = Summary::new(&primes, test);
    let line = if args.json {
        summary.to_json()?
    } else {
        summary.to_string()
    };
    writeln!(out, "{line}").context("failed to write summary")?;

    Ok(summary)
}
