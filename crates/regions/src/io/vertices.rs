//! Vertex list reader for polygon regions.
//!
//! The format is plain text with one `x, z` pair per line and no header.
//! Blank lines are skipped.

use std::path::Path;

use crate::error::{RegionError, Result};

/// Parse comma-separated `x, z` rows into vertex pairs.
pub fn parse_vertices(text: &str) -> Result<Vec<[f64; 2]>> {
    let mut vertices = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(RegionError::InvalidVertices(format!(
                "line {}: expected 2 columns, found {}",
                index + 1,
                fields.len()
            )));
        }

        let parse = |field: &str| {
            field.parse::<f64>().map_err(|e| {
                RegionError::InvalidVertices(format!("line {}: '{}': {}", index + 1, field, e))
            })
        };
        vertices.push([parse(fields[0])?, parse(fields[1])?]);
    }

    if vertices.is_empty() {
        return Err(RegionError::InvalidVertices("no vertices found".to_string()));
    }

    tracing::trace!(count = vertices.len(), "parsed vertex list");
    Ok(vertices)
}

/// Read and parse a vertex file
pub fn load_vertices<P: AsRef<Path>>(path: P) -> Result<Vec<[f64; 2]>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading polygon vertices");
    let content = std::fs::read_to_string(path)?;
    parse_vertices(&content)
}
