use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::OutputConfig;
use crate::data::filter::{compile_filters, parse_filters, row_matches};
use crate::data::loader::{parse_table, read_table_text};
use crate::data::model::Table;
use crate::data::select::{project, projected_header, resolve_selection};
use crate::error::{ProcessError, Result};

// ---------------------------------------------------------------------------
// ProcessedOutput
// ---------------------------------------------------------------------------

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOutput {
    /// The serialized output table.
    pub text: String,
    /// Where `text` was written.
    pub path: PathBuf,
}

// ---------------------------------------------------------------------------
// CsvProcessor
// ---------------------------------------------------------------------------

/// Projects and filters tables, then writes them to the configured location.
#[derive(Debug, Clone, Default)]
pub struct CsvProcessor {
    config: OutputConfig,
}

impl CsvProcessor {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Build the output table without touching the filesystem.
    ///
    /// Rows are filtered against the full input header first, then projected
    /// onto the selected columns in header order.
    pub fn transform_table(
        &self,
        table: &Table,
        selected_columns: &str,
        row_filters: &str,
    ) -> Result<Table> {
        let filters = parse_filters(row_filters)?;
        let indices = resolve_selection(selected_columns, &table.header)?;
        let predicates = compile_filters(&filters, &table.header)?;

        let rows: Vec<_> = table
            .rows
            .iter()
            .filter(|row| row_matches(row, &predicates))
            .map(|row| project(row, &indices))
            .collect();

        debug!("kept {} of {} rows", rows.len(), table.len());
        Ok(Table::new(projected_header(table, &indices), rows))
    }

    /// Parse `csv_data` and return the serialized output table.
    pub fn transform(
        &self,
        csv_data: &str,
        selected_columns: &str,
        row_filters: &str,
    ) -> Result<String> {
        let table = parse_table(csv_data)?;
        let output = self.transform_table(&table, selected_columns, row_filters)?;
        Ok(output.to_csv_string())
    }

    /// Transform `csv_data` and write the result to the configured output path.
    pub fn process_data(
        &self,
        csv_data: &str,
        selected_columns: &str,
        row_filters: &str,
    ) -> Result<ProcessedOutput> {
        let text = self.transform(csv_data, selected_columns, row_filters)?;
        let path = self.config.output_path();
        save_csv_file(&text, &path)?;
        info!("wrote {} bytes to {}", text.len(), path.display());
        Ok(ProcessedOutput { text, path })
    }

    /// Like [`process_data`](Self::process_data), reading the input table from
    /// `csv_file_path`.
    pub fn process_file(
        &self,
        csv_file_path: &Path,
        selected_columns: &str,
        row_filters: &str,
    ) -> Result<ProcessedOutput> {
        let csv_data = read_table_text(csv_file_path)?;
        self.process_data(&csv_data, selected_columns, row_filters)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write `data` to `output_file`, creating missing parent directories and
/// replacing any existing file.
///
/// The text goes to a temporary file next to the destination which is then
/// renamed into place, so readers never observe a half-written table. The
/// result keeps the permissions of the file it replaces, or gets the usual
/// umask-governed mode when the file is new.
pub fn save_csv_file(data: &str, output_file: &Path) -> Result<()> {
    let persist_err = |source| ProcessError::Persist {
        path: output_file.to_path_buf(),
        source,
    };

    let dir = match output_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(persist_err)?;

    // Same mode as a plain create: 0o666 minus the umask.
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(persist_err)?;
    tmp.write_all(data.as_bytes()).map_err(persist_err)?;

    if let Ok(existing) = std::fs::metadata(output_file) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(persist_err)?;
    }
    tmp.persist(output_file).map_err(|e| persist_err(e.error))?;

    debug!("persisted {}", output_file.display());
    Ok(())
}
