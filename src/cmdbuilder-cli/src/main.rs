//! `cmdbuilder` binary entry point.

use anyhow::Result;
use clap::Parser;

use cmdbuilder_cli::cli::{AppContext, Cli, dispatch_command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config carries a log level, so it is read before logging starts.
    let ctx = AppContext::load(&cli)?;

    let filter_str = cli.log_filter(ctx.config.logging.level.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(&filter_str)
        .with_writer(std::io::stderr)
        .init();

    dispatch_command(cli, ctx)
}
