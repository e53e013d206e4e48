use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::error::{ProcessError, Result};

// ---------------------------------------------------------------------------
// Filter: one `<column><operator><literal>` line
// ---------------------------------------------------------------------------

/// A single row filter as written by the user.
///
/// `operator` is kept as the raw token: any run of `<`, `>`, `=`, `!` is
/// accepted here and only checked against the supported set when the filters
/// are compiled against a header (see [`compile_filters`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub operator: String,
    pub literal: String,
}

fn filter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\w+)([<>=!]+)(.*)$").expect("filter pattern is valid"))
}

/// Parse a newline-separated filter specification.
///
/// Returns one [`Filter`] per non-empty line, in input order. The first line
/// that does not match `<word chars><operator chars><rest>` aborts parsing
/// with [`ProcessError::InvalidFilter`]; no filters are returned in that case.
pub fn parse_filters(spec: &str) -> Result<Vec<Filter>> {
    let mut filters = Vec::new();
    for line in spec.split('\n').filter(|l| !l.is_empty()) {
        let caps = filter_pattern()
            .captures(line)
            .ok_or_else(|| ProcessError::InvalidFilter {
                line: line.to_string(),
            })?;
        filters.push(Filter {
            column: caps[1].to_string(),
            operator: caps[2].to_string(),
            literal: caps[3].to_string(),
        });
    }
    debug!("parsed {} filter(s): {filters:?}", filters.len());
    Ok(filters)
}

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

/// Supported comparisons. All of them compare cell text to the literal
/// lexicographically, so `"10" < "9"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Gt,
    Lt,
    Eq,
    Ne,
    Ge,
    Le,
}

impl Operator {
    /// Map an operator token to a comparison. Tokens such as `==` or `<>`
    /// are not supported.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            ">=" => Some(Operator::Ge),
            "<=" => Some(Operator::Le),
            _ => None,
        }
    }

    /// Evaluate `cell <op> literal`.
    pub fn apply(self, cell: &str, literal: &str) -> bool {
        match self {
            Operator::Gt => cell > literal,
            Operator::Lt => cell < literal,
            Operator::Eq => cell == literal,
            Operator::Ne => cell != literal,
            Operator::Ge => cell >= literal,
            Operator::Le => cell <= literal,
        }
    }
}

// ---------------------------------------------------------------------------
// Compiled predicates
// ---------------------------------------------------------------------------

/// A [`Filter`] resolved against a concrete header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Index of the filtered column in the header.
    pub index: usize,
    pub operator: Operator,
    pub literal: String,
}

impl Predicate {
    pub fn matches(&self, row: &[String]) -> bool {
        row.get(self.index)
            .is_some_and(|cell| self.operator.apply(cell, &self.literal))
    }
}

/// Resolve every filter's column and operator against `header`.
///
/// Runs before any row is looked at, so an unknown column or operator fails
/// the whole run even when the table has no data rows.
pub fn compile_filters(filters: &[Filter], header: &[String]) -> Result<Vec<Predicate>> {
    filters
        .iter()
        .map(|f| {
            let index = header.iter().position(|h| *h == f.column).ok_or_else(|| {
                ProcessError::UnknownFilterColumn {
                    column: f.column.clone(),
                }
            })?;
            let operator =
                Operator::from_token(&f.operator).ok_or_else(|| ProcessError::InvalidOperator {
                    operator: f.operator.clone(),
                    column: f.column.clone(),
                })?;
            Ok(Predicate {
                index,
                operator,
                literal: f.literal.clone(),
            })
        })
        .collect()
}

/// A row is kept only when every predicate holds.
pub fn row_matches(row: &[String], predicates: &[Predicate]) -> bool {
    predicates.iter().all(|p| p.matches(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn filter(column: &str, operator: &str, literal: &str) -> Filter {
        Filter {
            column: column.into(),
            operator: operator.into(),
            literal: literal.into(),
        }
    }

    #[test]
    fn empty_spec_means_no_filters() {
        assert!(parse_filters("").unwrap().is_empty());
    }

    #[test]
    fn one_filter_per_line_in_order() {
        let filters = parse_filters("header1>1\nheader3<9").unwrap();
        assert_eq!(
            filters,
            vec![filter("header1", ">", "1"), filter("header3", "<", "9")]
        );
    }

    #[test]
    fn multi_character_operators_are_captured_whole() {
        let filters = parse_filters("a>=x\nb!=y\nc<=z").unwrap();
        let ops: Vec<&str> = filters.iter().map(|f| f.operator.as_str()).collect();
        assert_eq!(ops, vec![">=", "!=", "<="]);
    }

    #[test]
    fn literal_may_be_empty_or_contain_anything() {
        let filters = parse_filters("a=\nb=x y,=z").unwrap();
        assert_eq!(filters[0].literal, "");
        assert_eq!(filters[1].literal, "x y,=z");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let filters = parse_filters("a>1\n\nb<2\n").unwrap();
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn line_without_operator_is_rejected() {
        let err = parse_filters("col1>l1c1\ncol3#l1c3").unwrap_err();
        match err {
            ProcessError::InvalidFilter { line } => assert_eq!(line, "col3#l1c3"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn leading_whitespace_is_rejected() {
        assert!(matches!(
            parse_filters(" a>1"),
            Err(ProcessError::InvalidFilter { .. })
        ));
    }

    #[test]
    fn odd_operator_tokens_parse_but_do_not_compile() {
        let filters = parse_filters("a==1").unwrap();
        assert_eq!(filters[0].operator, "==");

        let err = compile_filters(&filters, &header(&["a"])).unwrap_err();
        match err {
            ProcessError::InvalidOperator { operator, column } => {
                assert_eq!(operator, "==");
                assert_eq!(column, "a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_filter_column_does_not_compile() {
        let filters = parse_filters("zzz>1").unwrap();
        assert!(matches!(
            compile_filters(&filters, &header(&["a", "b"])),
            Err(ProcessError::UnknownFilterColumn { .. })
        ));
    }

    #[test]
    fn comparison_is_lexicographic() {
        assert!(Operator::Lt.apply("10", "9"));
        assert!(!Operator::Gt.apply("10", "9"));
        assert!(Operator::Ge.apply("b", "b"));
        assert!(Operator::Le.apply("a", "b"));
        assert!(Operator::Ne.apply("l2c3", "l1c3"));
        assert!(!Operator::Eq.apply("A", "a"));
    }

    #[test]
    fn predicates_combine_with_and() {
        let predicates =
            compile_filters(&parse_filters("n>1\nn<9").unwrap(), &header(&["n"])).unwrap();
        let kept: Vec<&str> = ["1", "5", "9"]
            .into_iter()
            .filter(|v| row_matches(&[v.to_string()], &predicates))
            .collect();
        assert_eq!(kept, vec!["5"]);
    }
}
