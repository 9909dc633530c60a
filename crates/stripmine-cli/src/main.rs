use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Top-level CLI argument parser for the `saxpy` command
#[derive(Parser)]
#[command(
    name = "saxpy",
    about = "stripmine — check the stripmined SAXPY kernel and list its strip widths",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the `saxpy` CLI
#[derive(Subcommand)]
enum Commands {
    /// Run the kernel against the scalar reference and report mismatches
    Check {
        /// YAML test vector ({a, x, y}); defaults to the built-in fixture
        #[arg(long)]
        vector: Option<PathBuf>,
        /// Emulate a vector unit with this register width in bits
        #[arg(long)]
        vlen: Option<usize>,
        /// Relative tolerance for the element comparison
        #[arg(long, default_value_t = stripmine::testdata::TOLERANCE)]
        tolerance: f32,
        /// Force the scalar strip body even if AVX2+FMA is available
        #[arg(long)]
        scalar: bool,
        /// Print every strip and the x values it loaded
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show the strip widths each grouping factor would be granted
    Widths {
        /// Number of elements to partition
        #[arg(
            short,
            default_value_t = 31,
            value_parser = clap::value_parser!(u64).range(..=commands::widths::MAX_ELEMENTS)
        )]
        n: u64,
        /// Emulate a vector unit with this register width in bits
        #[arg(long)]
        vlen: Option<usize>,
        /// Only list this grouping factor (m1, m2, m4, m8)
        #[arg(long)]
        lmul: Option<String>,
    },
    /// Report the detected vector unit and strip-body backend
    Info,
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check {
            vector,
            vlen,
            tolerance,
            scalar,
            verbose,
        } => commands::check::run(&commands::check::CheckOptions {
            vector,
            vlen,
            tolerance,
            scalar,
            verbose,
        }),
        Commands::Widths { n, vlen, lmul } => commands::widths::run(n, vlen, lmul.as_deref()),
        Commands::Info => commands::info::run(),
    }
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();
    init_tracing();

    let command = cli.command.unwrap_or(Commands::Check {
        vector: None,
        vlen: None,
        tolerance: stripmine::testdata::TOLERANCE,
        scalar: false,
        verbose: false,
    });

    if let Err(e) = run_command(command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
