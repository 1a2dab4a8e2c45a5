//! CLI argument definitions for the dotpath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Query and reshape JSON documents with delimited paths
#[derive(Parser, Debug)]
#[command(name = "dotpath")]
#[command(about = "dotpath: read, write and reshape nested JSON documents by path")]
#[command(version)]
pub struct Cli {
    /// JSON input file. Reads stdin when omitted.
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Path segment delimiter
    #[arg(
        short,
        long,
        default_value = ".",
        env = "DOTPATH_DELIMITER",
        global = true
    )]
    pub delimiter: String,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Report whether a path resolves
    Exists(PathArgs),
    /// Set the value at a path and print the updated document
    Set(SetArgs),
    /// Delete one or more paths and print the updated document
    Delete(DeleteArgs),
    /// List top-level keys
    Keys(ListArgs),
    /// List top-level values
    Values(ListArgs),
    /// List top-level entries as `key<glue>value`
    Flatten(FlattenArgs),
    /// Build new documents from a source-to-destination path map
    Remap(RemapArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Path to read
    pub path: String,

    /// JSON value to print when the path does not resolve
    #[arg(long)]
    pub default: Option<String>,
}

/// Arguments for commands taking a single path
#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Path to check
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Path to write
    pub path: String,

    /// Value to store. Parsed as JSON, otherwise stored as text.
    pub value: String,
}

/// Arguments for the delete command
#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Paths to delete, in order
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the keys and values commands
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Prefix prepended to every listed item
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// Separator placed between key and value
    #[arg(short, long, default_value = "=", env = "DOTPATH_GLUE")]
    pub glue: String,
}

/// Arguments for the remap command
#[derive(clap::Args, Debug)]
pub struct RemapArgs {
    /// JSON file holding an object of source path to destination path
    #[arg(short, long)]
    pub map: PathBuf,

    /// Leave out destinations whose source path is missing instead of writing null
    #[arg(long)]
    pub skip_missing: bool,
}
