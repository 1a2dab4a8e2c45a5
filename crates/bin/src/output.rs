//! Output formatting helpers for human-readable and JSON output.

use dotpath::{Doc, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Render a single value.
///
/// Human output prints scalars bare and containers as pretty JSON.
pub fn render_value(value: &Value, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Human => match value {
            Value::Doc(_) | Value::List(_) => serde_json::to_string_pretty(value),
            scalar => Ok(scalar.to_string()),
        },
    }
}

/// Print a single value
pub fn print_value(value: &Value, format: OutputFormat) -> serde_json::Result<()> {
    println!("{}", render_value(value, format)?);
    Ok(())
}

/// Print a document
pub fn print_doc(doc: &Doc, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(doc)?),
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(doc)?),
    }
    Ok(())
}

/// Print several documents as one JSON array
pub fn print_docs(docs: &[Doc], format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(docs)?),
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(docs)?),
    }
    Ok(())
}

/// Print a listing, one item per line or as a JSON array
pub fn print_lines<T>(items: &[T], format: OutputFormat) -> serde_json::Result<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(items)?),
        OutputFormat::Human => {
            for item in items {
                println!("{item}");
            }
        }
    }
    Ok(())
}
