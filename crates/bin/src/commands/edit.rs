//! Commands that modify the input document and print the result.

use dotpath::{Accessor, Doc, PathError};

use crate::cli::{DeleteArgs, SetArgs};
use crate::input::parse_value;
use crate::output::{OutputFormat, print_doc};

/// Run the `set` command
pub fn set(
    args: &SetArgs,
    mut doc: Doc,
    accessor: &Accessor,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_set(args, &mut doc, accessor)?;
    print_doc(&doc, format)?;
    Ok(())
}

/// Run the `delete` command
pub fn delete(
    args: &DeleteArgs,
    mut doc: Doc,
    accessor: &Accessor,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_delete(args, &mut doc, accessor);
    print_doc(&doc, format)?;
    Ok(())
}

fn apply_set(args: &SetArgs, doc: &mut Doc, accessor: &Accessor) -> Result<(), PathError> {
    accessor.set(doc, &args.path, parse_value(&args.value))?;
    Ok(())
}

fn apply_delete(args: &DeleteArgs, doc: &mut Doc, accessor: &Accessor) -> usize {
    let removed = accessor.delete_paths(doc, &args.paths);
    tracing::debug!(requested = args.paths.len(), removed, "Deleted paths");
    removed
}
