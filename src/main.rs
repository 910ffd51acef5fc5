//! CLI entry point for dirtally

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use dirtally::{BucketRegistry, Config, TreeWalker, build_report, logging, write_csv};

#[derive(Parser, Debug)]
#[command(name = "dirtally")]
#[command(about = "Bucketed disk-usage reports for a directory tree, written as sorted CSV")]
#[command(version)]
struct Args {
    /// Configuration file describing the scan and the report destination
    #[arg(default_value = "dirtally.toml")]
    config: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!("{e:#}");
        eprintln!("dirtally: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    logging::init(&config.logging)?;
    // Validated after the log sink is installed, so a bad scan root ends up
    // in the configured log file and not just on stderr.
    config.scan.validate()?;

    info!("starting");
    let started = Instant::now();

    let mut registry = BucketRegistry::from_config(&config.scan);
    // Walk the resolved root so discovered paths share a canonical prefix
    // with resolved bucket roots.
    let walker = TreeWalker::new(config.scan.resolved_root());
    walker.walk(&mut registry)?;
    debug!(?registry, "accumulated");

    let rows = build_report(&registry);
    let report_path = write_csv(&rows, config.scan.output_dir())?;

    println!("fichier={}", report_path.display());
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "done");
    Ok(())
}
