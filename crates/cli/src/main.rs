//! sgls - list the contents of a StorageGRID bucket
//!
//! One read-only listing operation per invocation: paginate through the
//! bucket, print each object's metadata, then report the bucket's
//! request ID from a head probe.

mod commands;
mod exit_code;
mod output;

use clap::{Parser, Subcommand};

use crate::output::OutputConfig;

#[derive(Parser, Debug)]
#[command(
    name = "sgls",
    version,
    about = "List the contents of a StorageGRID (S3-compatible) bucket"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all objects in a bucket and report its request ID
    Ls(commands::ls::LsArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let output_config = OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    let code = match cli.command {
        Commands::Ls(args) => commands::ls::execute(args, output_config).await,
    };

    code.exit()
}

/// Diagnostics go to stderr so stdout stays clean for listing output
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
