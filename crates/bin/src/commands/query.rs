//! Read-only commands: get, exists, keys, values, flatten.

use std::borrow::Cow;

use dotpath::{Accessor, Doc, Value};

use crate::cli::{FlattenArgs, GetArgs, ListArgs, PathArgs};
use crate::input::parse_value;
use crate::output::{OutputFormat, print_lines, print_value};

/// Run the `get` command
pub fn get(
    args: &GetArgs,
    doc: &Doc,
    accessor: &Accessor,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    print_value(&*lookup(args, doc, accessor)?, format)?;
    Ok(())
}

/// Resolve the value `get` prints: the path's value, else the parsed default
fn lookup<'a>(
    args: &GetArgs,
    doc: &'a Doc,
    accessor: &Accessor,
) -> Result<Cow<'a, Value>, Box<dyn std::error::Error>> {
    match (accessor.get(doc, &args.path), &args.default) {
        (Some(value), _) => Ok(Cow::Borrowed(value)),
        (None, Some(raw)) => Ok(Cow::Owned(parse_value(raw))),
        (None, None) => Err(format!("Path '{}' not found", args.path).into()),
    }
}

/// Run the `exists` command
pub fn exists(
    args: &PathArgs,
    doc: &Doc,
    accessor: &Accessor,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", accessor.exists(doc, &args.path));
    Ok(())
}

/// Run the `keys` command
pub fn keys(
    args: &ListArgs,
    doc: &Doc,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    print_lines(&dotpath::keys(doc, args.prefix.as_deref()), format)?;
    Ok(())
}

/// Run the `values` command
pub fn values(
    args: &ListArgs,
    doc: &Doc,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    print_lines(&dotpath::values(doc, args.prefix.as_deref()), format)?;
    Ok(())
}

/// Run the `flatten` command
pub fn flatten(
    args: &FlattenArgs,
    doc: &Doc,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    print_lines(&dotpath::flatten(doc, &args.glue), format)?;
    Ok(())
}
