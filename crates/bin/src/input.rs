//! Reading documents and values from the command line.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use dotpath::{Doc, PathMap, Value};

/// Input accepted by `remap`: a single document or an array of them.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Documents {
    One(Doc),
    Many(Vec<Doc>),
}

/// Read the raw input from a file, or stdin when no file is given
pub fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => {
            tracing::debug!("Reading input from {}", path.display());
            fs::read_to_string(path)
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read a single JSON object as a document
pub fn read_doc(input: Option<&Path>) -> dotpath::Result<Doc> {
    Doc::from_json(&read_input(input)?)
}

/// Read a JSON object or an array of JSON objects
pub fn read_documents(input: Option<&Path>) -> dotpath::Result<Documents> {
    Ok(serde_json::from_str(&read_input(input)?)?)
}

/// Load a path map from a JSON file
pub fn read_path_map(path: &Path) -> dotpath::Result<PathMap> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Parse a command-line value as JSON, falling back to plain text.
///
/// `42` becomes an integer, `{"a":1}` a document and `hello` the text "hello".
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Text(raw.to_string()))
}
