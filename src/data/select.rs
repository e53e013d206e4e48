use log::debug;

use super::model::{Row, Table};
use crate::error::{ProcessError, Result};

/// Resolve a comma-separated column selection to header indices.
///
/// An empty `spec` selects the whole header. Names must match a header
/// column exactly. The returned indices are sorted ascending, so the output
/// always follows the input's column order whatever order the names were
/// listed in. A name listed twice yields its index twice.
pub fn resolve_selection(spec: &str, header: &[String]) -> Result<Vec<usize>> {
    if spec.is_empty() {
        return Ok((0..header.len()).collect());
    }

    let mut indices = spec
        .split(',')
        .map(|name| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ProcessError::UnknownColumn {
                    column: name.to_string(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;
    indices.sort_unstable();

    debug!("selected column indices: {indices:?}");
    Ok(indices)
}

/// Keep only the cells at `indices`, in that order.
pub fn project(row: &[String], indices: &[usize]) -> Row {
    indices.iter().map(|&i| row[i].clone()).collect()
}

/// The output header for a resolved selection.
pub fn projected_header(table: &Table, indices: &[usize]) -> Vec<String> {
    project(&table.header, indices)
}
