//! Synchronous RAM model CLI.
//!
//! This binary drives the behavioral memory model from the command line. It performs:
//! 1. **Run:** Build a model, preload an optional image, hold reset, replay a JSON stimulus,
//!    then report statistics and optionally dump or save the final contents.
//! 2. **Check:** Parse an image against a geometry and report what a preload would do.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use syncram_core::config::{Config, MalformedRecordPolicy};
use syncram_core::sim::{loader, stimulus};
use syncram_core::{MemError, TickDriver};

#[derive(Parser, Debug)]
#[command(
    name = "syncram",
    author,
    version,
    about = "Cycle-accurate synchronous RAM model",
    long_about = "Drive a single-port synchronous RAM model with a recorded stimulus, or check a memory image.\n\nExamples:\n  syncram run --address-width 4 --image rom.mem --stimulus writes.json --dump\n  syncram run --config bench.json --save-image final.mem\n  syncram check --image rom.mem --word-width 8 --on-malformed skip"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand that builds a memory.
#[derive(clap::Args, Debug)]
struct MemoryArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address bits (depth = 2^N).
    #[arg(long)]
    address_width: Option<u32>,

    /// Data bits per cell.
    #[arg(long)]
    word_width: Option<u32>,

    /// Bit-string image preloaded before the first tick.
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// What to do with malformed image lines: abort | skip.
    #[arg(long)]
    on_malformed: Option<MalformedRecordPolicy>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clock the model through a stimulus file.
    Run {
        #[command(flatten)]
        memory: MemoryArgs,

        /// JSON array of per-tick signals.
        #[arg(short, long)]
        stimulus: Option<PathBuf>,

        /// Cycles to hold reset before the stimulus (overrides the config).
        #[arg(long)]
        reset_cycles: Option<u64>,

        /// Print every written cell after the run.
        #[arg(long)]
        dump: bool,

        /// Write the final contents as a bit-string image.
        #[arg(long)]
        save_image: Option<PathBuf>,

        /// Print statistics as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Parse an image and report record counts without running.
    Check {
        #[command(flatten)]
        memory: MemoryArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            memory,
            stimulus,
            reset_cycles,
            dump,
            save_image,
            json,
        } => cmd_run(&memory, stimulus, reset_cycles, dump, save_image, json),
        Commands::Check { memory } => cmd_check(&memory),
    };

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Merges the optional config file with command-line overrides.
fn build_config(args: &MemoryArgs) -> Result<Config, MemError> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(width) = args.address_width {
        config.memory.address_width = width;
    }
    if let Some(width) = args.word_width {
        config.memory.word_width = width;
    }
    if let Some(path) = &args.image {
        config.image.path = Some(path.clone());
    }
    if let Some(policy) = args.on_malformed {
        config.image.on_malformed_record = policy;
    }
    Ok(config)
}

/// Builds a driver (reset, then preload), replays the stimulus, then reports.
fn cmd_run(
    args: &MemoryArgs,
    stimulus: Option<PathBuf>,
    reset_cycles: Option<u64>,
    dump: bool,
    save_image: Option<PathBuf>,
    json: bool,
) -> Result<(), MemError> {
    let mut config = build_config(args)?;
    if let Some(cycles) = reset_cycles {
        config.general.reset_cycles = cycles;
    }
    let geometry = config.geometry()?;
    let mut driver = TickDriver::from_config(&config)?;

    println!(
        "Memory: depth {}  word width {}  read mode {:?}",
        geometry.depth(),
        geometry.word_width(),
        config.memory.read_mode
    );
    println!("[*] Reset held for {} cycles", config.general.reset_cycles);
    if let Some(path) = &config.image.path {
        println!("[*] Preloaded {}", path.display());
    }

    if let Some(path) = stimulus {
        let signals = stimulus::load_stimulus(&path)?;
        println!("[*] Stimulus {} ({} ticks)", path.display(), signals.len());
        let applied = driver.run(signals)?;
        info!(applied, cycle = driver.cycle(), "stimulus complete");
    }

    if json {
        match serde_json::to_string_pretty(driver.stats()) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("[!] could not serialize statistics: {e}"),
        }
    } else {
        driver.stats().print();
    }

    if dump {
        let width = geometry.word_width() as usize;
        println!("\nWritten cells ({}):", driver.storage().written_count());
        for (address, word) in driver.storage().written_cells() {
            println!("  {address:#06x}: {word:0width$b} ({word})");
        }
    }

    if let Some(path) = save_image {
        fs::write(&path, loader::render_image(driver.storage()))
            .map_err(|source| MemError::Io {
                path: path.clone(),
                source,
            })?;
        println!("[*] Saved image to {}", path.display());
    }

    Ok(())
}

/// Parses the configured image and prints its load report.
fn cmd_check(args: &MemoryArgs) -> Result<(), MemError> {
    let config = build_config(args)?;
    let geometry = config.geometry()?;
    let path = config.image_path()?;

    let image = loader::load_image(path, geometry, config.image.on_malformed_record)?;
    let report = image.report();
    println!("{}: OK", path.display());
    println!("  depth      {}", geometry.depth());
    println!("  records    {}", report.records);
    println!("  skipped    {}", report.skipped);
    println!("  truncated  {}", report.truncated);
    Ok(())
}
