//! Virtual memory page replacement simulator CLI.

use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use serde::Serialize;

use pagesim::config::{MemorySize, PageSize, PolicyKind, SimConfig};
use pagesim::sim::{self, loader};
use pagesim::stats::Metrics;

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Virtual memory page replacement simulator",
    long_about = None,
)]
struct Cli {
    /// Replacement algorithm: LRU, NRU, OPT (or OTIMO).
    algorithm: PolicyKind,

    /// Trace file, one `<hex address> <R|W>` per line.
    trace: PathBuf,

    /// Page size in KB: 8, 16 or 32.
    page_kb: PageSize,

    /// Physical memory size in MB: 1, 2 or 4.
    memory_mb: MemorySize,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    config: SimConfig,
    trace: &'a Path,
    accesses: usize,
    frames: usize,
    metrics: Metrics,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("{:?}", cli);

    let config = SimConfig::new(cli.algorithm, cli.page_kb, cli.memory_mb);
    let trace = loader::load_trace(&cli.trace, config.page_shift()).unwrap_or_else(|e| {
        fail(format!("could not load '{}': {}", cli.trace.display(), e))
    });

    if !cli.json {
        println!("[*] Running simulator...\n");
        println!("Input file:             {}", cli.trace.display());
        println!("Physical memory size:   {}", config.memory_size);
        println!("Page size:              {}", config.page_size);
        println!("Number of frames:       {}", config.frame_count());
        println!("Replacement algorithm:  {}\n", config.policy);
        std::io::stdout().flush().ok();
    }

    let metrics = sim::simulate(&config, &trace).unwrap_or_else(|e| fail(e));

    if cli.json {
        let report = Report {
            config,
            trace: &cli.trace,
            accesses: trace.len(),
            frames: config.frame_count(),
            metrics,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(e),
        }
    } else {
        println!("Page faults:            {}", metrics.page_faults);
        println!("Pages written back:     {}", metrics.write_backs);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn fail(e: impl Display) -> ! {
    eprintln!("\n\x1b[1;31m[!] error:\x1b[0m {}", e);
    process::exit(1);
}
