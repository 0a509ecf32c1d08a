//! Loading quote requests and reference data from JSON files.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{QuoteError, Result};
use crate::model::{Catalog, QuoteRequest};

/// Read a file that must exist and be non-empty.
fn read_content(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}

/// Decode file content, reporting the path on failure.
fn decode<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| QuoteError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read a JSON file as an untyped value.
pub fn read_json_value(path: &Path) -> Result<Value> {
    let content = read_content(path)?;
    decode(path, &content)
}

/// Parse a quote request file.
pub fn parse_request_file(path: &Path) -> Result<QuoteRequest> {
    let content = read_content(path)?;
    let request = parse_request_str(&content).map_err(|e| match e {
        QuoteError::Json(e) => QuoteError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        other => other,
    })?;
    debug!(
        "Loaded {} wall line(s) and {} other line(s) from {}",
        request.wall_lines.len(),
        request.other_lines.len(),
        path.display()
    );
    Ok(request)
}

/// Parse a quote request from JSON text.
///
/// Financing types are checked up front so an unknown value is reported by
/// name rather than as a generic decoding error.
pub fn parse_request_str(content: &str) -> Result<QuoteRequest> {
    let value: Value = serde_json::from_str(content)?;
    check_financing_types(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Parse a catalog file.
pub fn parse_catalog_file(path: &Path) -> Result<Catalog> {
    let content = read_content(path)?;
    let catalog: Catalog = decode(path, &content)?;
    debug!(
        "Loaded catalog: {} LED product(s), {} other product(s), {} duration(s)",
        catalog.led_products.len(),
        catalog.other_products.len(),
        catalog.leasing_durations.len()
    );
    Ok(catalog)
}

fn check_financing_types(value: &Value) -> Result<()> {
    for key in ["wallLines", "otherLines"] {
        let Some(lines) = value.get(key).and_then(Value::as_array) else {
            continue;
        };
        for line in lines {
            match line.get("financingType") {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) if crate::config::FinancingType::parse(s).is_some() => {}
                Some(other) => {
                    return Err(QuoteError::UnknownFinancingType {
                        value: other.as_str().map(str::to_string).unwrap_or_else(|| other.to_string()),
                    })
                }
            }
        }
    }
    Ok(())
}
