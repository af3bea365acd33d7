use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use std::path::Path;

use community_zones::cluster::{Community, CommunityZoneFinder, ZoneSink};
use community_zones::config::Config;
use community_zones::{data, storage, viz};

#[derive(Parser, Debug)]
#[clap(
    name = "community-zones",
    about = "Compute community zone outlines for positioned graph nodes"
)]
struct Cli {
    /// Snapshot files (.json or .parquet); each is solved independently
    #[clap(long, required = true, num_args = 1..)]
    input: Vec<String>,

    /// Output directory for results
    #[clap(long, default_value = "zone_results")]
    output_dir: String,

    /// Skip SVG rendering
    #[clap(long)]
    skip_render: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

/// Solve one snapshot file and write its results
fn process_snapshot(
    input: &str,
    output_dir: &Path,
    finder: &CommunityZoneFinder,
    config: &Config,
) -> Result<usize> {
    let snapshot = data::load_snapshot(input)?;

    let mut frame: Vec<Community> = Vec::new();
    let count = finder.solve_into(&snapshot, &mut frame)?;
    log::info!("{}: found {} communities", input, count);

    let out = output_dir.to_string_lossy();
    storage::save_results(&frame, &snapshot, &out)?;

    if !config.skip_render {
        let mut renderer = viz::SvgZoneRenderer::new(&snapshot, config, output_dir.join("zones.svg"));
        renderer.accept(&frame)?;
    }

    Ok(count)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config {
        skip_render: args.skip_render,
        ..Config::default()
    };
    let finder = CommunityZoneFinder::new();

    std::fs::create_dir_all(&args.output_dir)?;

    let output_root = Path::new(&args.output_dir);
    let total_inputs = args.input.len();
    let results: Vec<Result<usize>> = args
        .input
        .par_iter()
        .enumerate()
        .map(|(index, input)| {
            let dir = storage::snapshot_output_dir(output_root, input, index, total_inputs);
            process_snapshot(input, &dir, &finder, &config)
        })
        .collect();

    let mut total = 0;
    for (input, result) in args.input.iter().zip(results) {
        match result {
            Ok(count) => total += count,
            Err(e) => {
                log::error!("{}: {:#}", input, e);
                return Err(e);
            }
        }
    }

    log::info!(
        "Processed {} snapshot(s), {} communities. Results saved to {}",
        args.input.len(),
        total,
        args.output_dir
    );

    Ok(())
}
