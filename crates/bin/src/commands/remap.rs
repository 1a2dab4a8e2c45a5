//! Remap command.

use std::path::Path;

use dotpath::{Accessor, MissingPolicy, PathError, PathMap};

use crate::cli::RemapArgs;
use crate::input::{Documents, read_documents, read_path_map};
use crate::output::{OutputFormat, print_doc, print_docs};

/// Run the `remap` command
pub fn run(
    args: &RemapArgs,
    input: Option<&Path>,
    accessor: &Accessor,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path_map = read_path_map(&args.map)?;
    let missing = missing_policy(args.skip_missing);

    match remap_documents(read_documents(input)?, &path_map, accessor, missing)? {
        Documents::One(doc) => print_doc(&doc, format)?,
        Documents::Many(docs) => print_docs(&docs, format)?,
    }
    Ok(())
}

fn missing_policy(skip_missing: bool) -> MissingPolicy {
    if skip_missing {
        MissingPolicy::Skip
    } else {
        MissingPolicy::WriteNull
    }
}

/// Remap a single document, or each document of an array, keeping the input's shape
fn remap_documents(
    documents: Documents,
    path_map: &PathMap,
    accessor: &Accessor,
    missing: MissingPolicy,
) -> Result<Documents, PathError> {
    Ok(match documents {
        Documents::One(doc) => Documents::One(accessor.remap(&doc, path_map, missing)?),
        Documents::Many(docs) => {
            Documents::Many(accessor.remap_collection(&docs, path_map, missing)?)
        }
    })
}
