//! Command implementations.

use dotpath::Accessor;

use crate::cli::{Cli, Commands};
use crate::input::read_doc;
use crate::output::OutputFormat;

pub mod edit;
pub mod query;
pub mod remap;

/// Dispatch the parsed command line
pub fn run(
    cli: &Cli,
    accessor: &Accessor,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = cli.input.as_deref();
    match &cli.command {
        Commands::Get(args) => query::get(args, &read_doc(input)?, accessor, format),
        Commands::Exists(args) => query::exists(args, &read_doc(input)?, accessor),
        Commands::Keys(args) => query::keys(args, &read_doc(input)?, format),
        Commands::Values(args) => query::values(args, &read_doc(input)?, format),
        Commands::Flatten(args) => query::flatten(args, &read_doc(input)?, format),
        Commands::Set(args) => edit::set(args, read_doc(input)?, accessor, format),
        Commands::Delete(args) => edit::delete(args, read_doc(input)?, accessor, format),
        Commands::Remap(args) => remap::run(args, input, accessor, format),
    }
}
