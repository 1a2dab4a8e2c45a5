use clap::Parser;
use dotpath::Accessor;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::Cli;
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dotpath=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let accessor = Accessor::with_delimiter(cli.delimiter.as_str())?;
    let format = OutputFormat::from_json_flag(cli.json);

    tracing::debug!(delimiter = accessor.delimiter(), "Running command");
    commands::run(&cli, &accessor, format)
}
