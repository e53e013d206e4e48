use std::path::Path;

use log::debug;

use super::model::{Row, Table};
use crate::error::{ProcessError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse comma-separated text into a [`Table`].
///
/// The first line is the header. Every line, blank ones included, is split on
/// every comma: there is no quoting or escaping, so `"` is an ordinary
/// character and a blank line is a single empty cell. `\n` or `\r\n` end a
/// line; only the final line ending is optional.
///
/// Fails with [`ProcessError::EmptyInput`] when there is no header line and
/// with [`ProcessError::RowLength`] when a data row's cell count differs
/// from the header's.
pub fn parse_table(text: &str) -> Result<Table> {
    let mut lines = text.lines();

    let header = match lines.next() {
        Some(line) => split_cells(line),
        None => return Err(ProcessError::EmptyInput),
    };

    let mut rows: Vec<Row> = Vec::new();
    for (i, line) in lines.enumerate() {
        let row = split_cells(line);
        if row.len() != header.len() {
            return Err(ProcessError::RowLength {
                row: i + 1,
                expected: header.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }

    debug!("parsed table: {} columns, {} rows", header.len(), rows.len());
    Ok(Table::new(header, rows))
}

fn split_cells(line: &str) -> Row {
    line.split(',').map(str::to_string).collect()
}

/// Read the whole file at `path` as UTF-8 text.
pub fn read_table_text(path: &Path) -> Result<String> {
    debug!("reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = parse_table("h1,h2,h3\n1,2,3\n4,5,6\n7,8,9").unwrap();
        assert_eq!(table.header, vec!["h1", "h2", "h3"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn quotes_are_plain_characters() {
        let table = parse_table("a,b\n\"x,y\"").unwrap();
        assert_eq!(table.rows[0], vec!["\"x", "y\""]);
    }

    #[test]
    fn trailing_newline_and_crlf_are_accepted() {
        let table = parse_table("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(table.header, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn empty_cells_are_kept() {
        let table = parse_table("a,b,c\n,,x").unwrap();
        assert_eq!(table.rows[0], vec!["", "", "x"]);
    }

    #[test]
    fn blank_line_in_single_column_table_is_an_empty_cell() {
        let table = parse_table("n\nx\n\ny").unwrap();
        assert_eq!(table.rows, vec![vec!["x"], vec![""], vec!["y"]]);
    }

    #[test]
    fn blank_line_in_wider_table_is_rejected() {
        let err = parse_table("a,b\n1,2\n\n3,4").unwrap_err();
        match err {
            ProcessError::RowLength {
                row,
                expected,
                found,
            } => {
                assert_eq!((row, expected, found), (2, 2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn only_the_final_line_ending_is_dropped() {
        let table = parse_table("n\nx\n\n").unwrap();
        assert_eq!(table.rows, vec![vec!["x"], vec![""]]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_table(""), Err(ProcessError::EmptyInput)));
    }

    #[test]
    fn short_row_is_rejected() {
        let err = parse_table("a,b,c\n1,2,3\n4,5").unwrap_err();
        match err {
            ProcessError::RowLength {
                row,
                expected,
                found,
            } => {
                assert_eq!((row, expected, found), (2, 3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn long_row_is_rejected() {
        assert!(matches!(
            parse_table("a\n1,2"),
            Err(ProcessError::RowLength { row: 1, .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_table_text(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ProcessError::Read { .. }));
        assert!(err.to_string().contains("here.csv"));
    }
}
