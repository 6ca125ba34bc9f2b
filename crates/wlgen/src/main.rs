use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd_gen;
mod cmd_helpers;
mod cmd_lint;
mod cmd_show;
mod tracing_init;

#[derive(Parser)]
#[command(name = "wlgen", about = "Workload scenario generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a scenario file from a TOML configuration
    Gen {
        /// Path to the scenario TOML file
        #[arg(long)]
        config: PathBuf,

        /// Output directory
        #[arg(long)]
        out: PathBuf,

        /// RNG seed (overrides `seed` in the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: "text" or "jsonl"
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Lint (validate) a scenario TOML file
    Lint {
        /// Path to the scenario TOML file
        config: PathBuf,
    },
    /// Print the generated scenario to stdout
    Show {
        /// Path to the scenario TOML file
        #[arg(long)]
        config: PathBuf,

        /// RNG seed (overrides `seed` in the config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen {
            config,
            out,
            seed,
            format,
        } => cmd_gen::run(config, out, seed, format),
        Commands::Lint { config } => cmd_lint::run(config),
        Commands::Show { config, seed } => cmd_show::run(config, seed),
    }
}
