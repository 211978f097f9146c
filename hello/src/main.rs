//! Prints a greeting, then classifies `[0, bound)` as even or odd.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hello::config::resolve_config;
use hello::{app, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "hello",
    version,
    about = "Greet a name and report the parity of a range of integers"
)]
struct Cli {
    /// Name to greet (default: world).
    #[arg(long)]
    name: Option<String>,

    /// Exclusive upper limit of the parity range (default: 5).
    #[arg(long, allow_negative_numbers = true)]
    bound: Option<i64>,

    /// TOML file providing `name` and/or `bound`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.name, cli.bound)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&mut out, &config)
}
