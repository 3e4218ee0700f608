// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! # corona CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use corona_search::catalog::{load_coronas, Catalog};
use corona_search::geometry::SizeSet;
use corona_search::{enumerate_with_statistics, generate_edge_walks, Corona};

/// Enumerate and validate square coronas.
#[derive(Parser, Debug)]
#[command(name = "corona", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct SizesArg {
    /// Allowed segment sizes, comma separated.
    #[arg(long, default_value = "1,2,3,4")]
    sizes: SizeSet,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every edge walk for a center size.
    Walks {
        #[arg(long)]
        center: u32,
        #[command(flatten)]
        sizes: SizesArg,
    },

    /// Print the unique coronas for a center size in compact form.
    Enumerate {
        #[arg(long)]
        center: u32,
        #[command(flatten)]
        sizes: SizesArg,
        /// Print at most this many coronas.
        #[arg(long)]
        limit: Option<usize>,
        /// Print search statistics after the coronas.
        #[arg(long)]
        stats: bool,
    },

    /// Validate coronas given in compact form.
    Validate {
        #[arg(required = true)]
        coronas: Vec<String>,
        #[command(flatten)]
        sizes: SizesArg,
    },

    /// Write a catalog of unique coronas for centers 1 to max-center.
    Generate {
        #[arg(long, default_value_t = 4)]
        max_center: u32,
        #[command(flatten)]
        sizes: SizesArg,
        #[arg(long, default_value = "valid-coronas.json")]
        output: PathBuf,
    },

    /// Print coronas from a catalog file.
    Load {
        file: PathBuf,
        /// Only this center size; all centers when omitted.
        #[arg(long)]
        center: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(command: Commands) -> anyhow::Result<u8> {
    match command {
        Commands::Walks { center, sizes } => {
            for walk in generate_edge_walks(center, sizes.sizes) {
                println!("{walk}");
            }
            Ok(0)
        }
        Commands::Enumerate {
            center,
            sizes,
            limit,
            stats,
        } => {
            let (coronas, statistics) = enumerate_with_statistics(center, sizes.sizes);
            for corona in coronas.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("{corona}");
            }
            if stats {
                println!("{statistics}");
            }
            Ok(0)
        }
        Commands::Validate { coronas, sizes } => run_validate(&coronas, sizes.sizes),
        Commands::Generate {
            max_center,
            sizes,
            output,
        } => {
            let centers: Vec<u32> = (1..=max_center).collect();
            let catalog = Catalog::generate(&centers, sizes.sizes);
            catalog
                .save(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            for (center, count) in &catalog.metadata.counts {
                println!("center {center}: {count} coronas");
            }
            println!("total: {}", catalog.metadata.total_coronas);
            Ok(0)
        }
        Commands::Load { file, center } => {
            match center {
                Some(center) => {
                    for corona in load_coronas(&file, center) {
                        println!("{corona}");
                    }
                }
                None => {
                    let catalog = Catalog::load(&file)
                        .with_context(|| format!("reading {}", file.display()))?;
                    for center in catalog.coronas.keys() {
                        for corona in catalog.coronas_for(*center)? {
                            println!("{corona}");
                        }
                    }
                }
            }
            Ok(0)
        }
    }
}

/// Print `ok` or the failure for each corona; exit code 1 if any is rejected.
fn run_validate(coronas: &[String], sizes: SizeSet) -> anyhow::Result<u8> {
    let mut code = 0;
    for text in coronas {
        match text.parse::<Corona>() {
            Ok(corona) => match corona.validate(sizes) {
                Ok(()) => println!("{text}: ok"),
                Err(failure) => {
                    println!("{text}: {failure}");
                    code = 1;
                }
            },
            Err(err) => {
                println!("{text}: {err}");
                code = 1;
            }
        }
    }
    Ok(code)
}
