//! Parser for catalog files.
//!
//! Format: one product per line, `name::color::size`
//!
//! ```text
//! # inventory
//! Apple::green::small
//! Tree::green::large
//! House::blue::large
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{DomainError, Result};
use crate::types::{Color, Product, Size};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const FIELD_COUNT: usize = 3;

/// Read a catalog file from disk and parse every product in it.
pub fn parse_catalog(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DomainError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_catalog_str(&content, &file)
}

/// Parse catalog content. `file` is only used for error messages.
pub fn parse_catalog_str(content: &str, file: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split("::").collect();
        if parts.len() != FIELD_COUNT {
            return Err(DomainError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: parts.len(),
                line: line_no,
            });
        }

        let name = parts[0].trim();
        if name.is_empty() {
            return Err(DomainError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing product name".to_string(),
            });
        }

        let color = parts[1].parse::<Color>().map_err(|e| DomainError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: e.to_string(),
        })?;
        let size = parts[2].parse::<Size>().map_err(|e| DomainError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: e.to_string(),
        })?;

        products.push(Product::new(name, color, size));
    }

    Ok(products)
}
