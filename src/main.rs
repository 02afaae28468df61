use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hello_env::{Environment, Greeting, RuntimeInfo};

#[derive(Parser)]
#[command(name = "hello-env")]
#[command(about = "Greets, reports the clock and toolchain, and says where it runs", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Any arguments are accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<OsString>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.args.is_empty() {
        debug!("Ignoring {} command line argument(s)", cli.args.len());
    }

    let env = Environment::from_env();
    debug!(name = %env.name, running_in_container = env.running_in_container, "Resolved environment");

    let greeting = Greeting::new(env, Local::now(), RuntimeInfo::current());
    greeting
        .write_to(io::stdout().lock())
        .context("Failed to write greeting to stdout")?;

    info!("Greeting written ({})", greeting.placement);
    Ok(())
}
