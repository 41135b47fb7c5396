//! Memory-hierarchy simulator CLI.
//!
//! This binary is the batch driver around `memsim-core`. It performs:
//! 1. **Trace loading:** parses each trace file once, skipping malformed lines.
//! 2. **Batch runs:** every (trace, strategy) pair gets a freshly constructed engine.
//! 3. **Reporting:** prints the textual summary and optionally persists it per pair.
//!
//! Configuration is JSON-first (see `memsim_core::Config`); command-line
//! flags override individual fields of the loaded or default configuration.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use memsim_core::config::PrefetcherKind;
use memsim_core::sim::load_trace;
use memsim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    version,
    about = "Trace-driven memory-hierarchy simulator with pluggable prefetch strategies",
    long_about = "Replay recorded memory-access traces against an LRU cache backed by a \
size-bounded store, while a prefetch strategy speculates on each miss.\n\nExamples:\n  \
memsim run traces/prank.txt --prefetcher stride\n  \
memsim run traces/*.txt --all -o results/\n  \
memsim run traces/prank.txt -c sim.json --prefetcher rl --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay one or more traces through one or more strategies.
    Run {
        /// Trace files to replay.
        #[arg(required = true)]
        traces: Vec<PathBuf>,

        /// Strategy to run (repeatable): none, stride, best_offset, ghb,
        /// ampm, sms, ml, rl.
        #[arg(short, long = "prefetcher")]
        prefetchers: Vec<String>,

        /// Run every strategy, including the no-prefetcher baseline.
        #[arg(long, conflicts_with = "prefetchers")]
        all: bool,

        /// JSON configuration file (flags below override its fields).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cache capacity in entries.
        #[arg(long)]
        cache_capacity: Option<usize>,

        /// Backing store ceiling in megabytes.
        #[arg(long)]
        ram_mb: Option<usize>,

        /// Fixed offset for the best-offset strategy.
        #[arg(long)]
        offset: Option<u64>,

        /// Directory to write per-run report files into.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print reports as JSON instead of the textual summary.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            traces,
            prefetchers,
            all,
            config,
            cache_capacity,
            ram_mb,
            offset,
            output,
            json,
        } => {
            let config = build_config(config.as_deref(), cache_capacity, ram_mb, offset);
            let kinds = select_kinds(&prefetchers, all);
            run_batch(&traces, &kinds, &config, output.as_deref(), json);
        }
    }
}

/// Loads the base configuration and applies flag overrides.
fn build_config(
    path: Option<&Path>,
    cache_capacity: Option<usize>,
    ram_mb: Option<usize>,
    offset: Option<u64>,
) -> Config {
    let mut config = match path {
        Some(path) => match Config::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(capacity) = cache_capacity {
        config.cache.capacity = capacity;
    }
    if let Some(mb) = ram_mb {
        config.memory.ram_size_mb = mb;
    }
    if let Some(offset) = offset {
        config.prefetch.offset = offset;
    }
    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        process::exit(1);
    }
    config
}

/// Resolves the strategy list from flags.
fn select_kinds(names: &[String], all: bool) -> Vec<PrefetcherKind> {
    if all {
        let mut kinds = vec![PrefetcherKind::None];
        kinds.extend_from_slice(PrefetcherKind::ALL);
        return kinds;
    }
    if names.is_empty() {
        return vec![PrefetcherKind::None];
    }
    names
        .iter()
        .map(|name| match parse_kind(name) {
            Some(kind) => kind,
            None => {
                eprintln!("error: unknown prefetcher '{name}'");
                eprintln!("       expected one of: none, stride, best_offset, ghb, ampm, sms, ml, rl");
                process::exit(1);
            }
        })
        .collect()
}

/// Maps a strategy name token to its kind.
fn parse_kind(name: &str) -> Option<PrefetcherKind> {
    match name {
        "none" | "no_prefetcher" => Some(PrefetcherKind::None),
        "stride" => Some(PrefetcherKind::Stride),
        "best_offset" => Some(PrefetcherKind::BestOffset),
        "ghb" => Some(PrefetcherKind::Ghb),
        "ampm" => Some(PrefetcherKind::Ampm),
        "sms" => Some(PrefetcherKind::Sms),
        "ml" => Some(PrefetcherKind::Ml),
        "rl" => Some(PrefetcherKind::Rl),
        _ => None,
    }
}

/// Runs every (trace, strategy) pair with an independently owned engine.
fn run_batch(
    traces: &[PathBuf],
    kinds: &[PrefetcherKind],
    base: &Config,
    output: Option<&Path>,
    json: bool,
) {
    for trace_path in traces {
        let operations = match load_trace(trace_path) {
            Ok(operations) => operations,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        };

        for &kind in kinds {
            let mut config = base.clone();
            config.prefetch.kind = kind;

            let mut simulator = Simulator::new(&config);
            simulator.run(&operations);
            let report = simulator.report();

            println!(
                "=== {} / {} ===",
                trace_path.display(),
                simulator.prefetcher_name()
            );
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("error: failed to encode report: {e}");
                        process::exit(1);
                    }
                }
            } else {
                print!("{report}");
            }

            if let Some(dir) = output {
                save_report(dir, trace_path, simulator.prefetcher_name(), &report.to_string());
            }
        }
    }
}

/// Writes one report as `<trace-stem>-<strategy>.txt` under `dir`.
fn save_report(dir: &Path, trace_path: &Path, strategy: &str, body: &str) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("error: failed to create {}: {e}", dir.display());
        process::exit(1);
    }
    let stem = trace_path
        .file_stem()
        .map_or_else(|| "trace".into(), |s| s.to_string_lossy().into_owned());
    let path = dir.join(format!("{stem}-{strategy}.txt"));
    if let Err(e) = std::fs::write(&path, body) {
        eprintln!("error: failed to write {}: {e}", path.display());
        process::exit(1);
    }
    println!("Results saved to {}", path.display());
}
