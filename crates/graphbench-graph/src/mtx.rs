// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matrix Market coordinate format reader and writer.
//!
//! Files are 1-based; everything in memory is 0-based. Lines starting with
//! `%` are comments, except a leading `%%MatrixMarket` banner which carries
//! the field type (`pattern`, `integer`, `real`) and the symmetry.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use graphbench_core::GraphbenchError;

use crate::dataset::ElementType;

/// The `rows cols nnz` size line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixHeader {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
}

/// Symmetry declared by the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symmetry {
    #[default]
    General,
    /// Only one triangle is stored; the mirrored entries are implied.
    Symmetric,
}

/// A single coordinate entry (0-based).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixEntry {
    pub row: usize,
    pub col: usize,
    pub value: Option<f64>,
}

/// A parsed coordinate matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixData {
    pub header: MatrixHeader,
    pub symmetry: Symmetry,
    pub element_type: ElementType,
    pub entries: Vec<MatrixEntry>,
}

impl MatrixData {
    /// Build a matrix from 0-based entries, deriving the header.
    pub fn from_entries(
        rows: usize,
        cols: usize,
        symmetry: Symmetry,
        element_type: ElementType,
        entries: Vec<MatrixEntry>,
    ) -> Self {
        Self {
            header: MatrixHeader {
                rows,
                cols,
                nnz: entries.len(),
            },
            symmetry,
            element_type,
            entries,
        }
    }

    /// Whether entries carry values.
    pub fn has_values(&self) -> bool {
        self.element_type != ElementType::Void
    }
}

/// Banner fields we care about.
struct Banner {
    element_type: ElementType,
    symmetry: Symmetry,
}

fn mm_error(line: usize, message: impl Into<String>) -> GraphbenchError {
    GraphbenchError::MatrixMarket {
        line,
        message: message.into(),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('%') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_banner(line: &str, line_no: usize) -> Result<Banner, GraphbenchError> {
    let fields: Vec<String> = line
        .split_whitespace()
        .map(|f| f.to_ascii_lowercase())
        .collect();

    if fields.len() != 5 || fields[0] != "%%matrixmarket" {
        return Err(mm_error(line_no, "malformed %%MatrixMarket banner"));
    }
    if fields[1] != "matrix" || fields[2] != "coordinate" {
        return Err(mm_error(
            line_no,
            format!("unsupported matrix layout `{} {}`", fields[1], fields[2]),
        ));
    }

    let element_type = match fields[3].as_str() {
        "pattern" => ElementType::Void,
        "integer" => ElementType::Int,
        "real" | "double" => ElementType::Float,
        other => return Err(mm_error(line_no, format!("unsupported field type `{other}`"))),
    };

    let symmetry = match fields[4].as_str() {
        "general" => Symmetry::General,
        "symmetric" | "skew-symmetric" | "hermitian" => Symmetry::Symmetric,
        other => return Err(mm_error(line_no, format!("unsupported symmetry `{other}`"))),
    };

    Ok(Banner {
        element_type,
        symmetry,
    })
}

fn parse_usize(field: &str, what: &str, line_no: usize) -> Result<usize, GraphbenchError> {
    field
        .parse::<usize>()
        .map_err(|_| mm_error(line_no, format!("invalid {what} `{field}`")))
}

fn parse_size_line(fields: &[&str], line_no: usize) -> Result<MatrixHeader, GraphbenchError> {
    if fields.len() != 3 {
        return Err(mm_error(
            line_no,
            format!("size line must be `rows cols nnz`, got {} fields", fields.len()),
        ));
    }
    Ok(MatrixHeader {
        rows: parse_usize(fields[0], "row count", line_no)?,
        cols: parse_usize(fields[1], "column count", line_no)?,
        nnz: parse_usize(fields[2], "entry count", line_no)?,
    })
}

fn parse_index(field: &str, bound: usize, what: &str, line_no: usize) -> Result<usize, GraphbenchError> {
    let index = parse_usize(field, what, line_no)?;
    if index == 0 || index > bound {
        return Err(mm_error(
            line_no,
            format!("{what} {index} out of range 1..={bound}"),
        ));
    }
    Ok(index - 1)
}

/// Parse Matrix Market content held in memory.
pub fn parse(content: &str) -> Result<MatrixData, GraphbenchError> {
    let mut banner: Option<Banner> = None;
    let mut header: Option<MatrixHeader> = None;
    let mut arity: Option<usize> = None;
    let mut saw_fraction = false;
    let mut entries = Vec::new();
    let mut last_line = 0;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;

        if idx == 0 && raw.starts_with("%%") {
            let parsed = parse_banner(raw, line_no)?;
            arity = Some(if parsed.element_type == ElementType::Void { 2 } else { 3 });
            banner = Some(parsed);
            continue;
        }

        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();

        let Some(size) = header else {
            header = Some(parse_size_line(&fields, line_no)?);
            entries.reserve(header.map_or(0, |h| h.nnz));
            continue;
        };

        if entries.len() == size.nnz {
            return Err(mm_error(
                line_no,
                format!("more entries than the declared {}", size.nnz),
            ));
        }

        let expected = *arity.get_or_insert(fields.len());
        if fields.len() != expected || !(2..=3).contains(&fields.len()) {
            return Err(mm_error(
                line_no,
                format!("expected {expected} fields per entry, got {}", fields.len()),
            ));
        }

        let row = parse_index(fields[0], size.rows, "row", line_no)?;
        let col = parse_index(fields[1], size.cols, "column", line_no)?;
        let value = match fields.get(2) {
            Some(text) => {
                saw_fraction |= text.contains(['.', 'e', 'E']);
                Some(
                    text.parse::<f64>()
                        .map_err(|_| mm_error(line_no, format!("invalid value `{text}`")))?,
                )
            }
            None => None,
        };

        entries.push(MatrixEntry { row, col, value });
    }

    let header = header.ok_or_else(|| mm_error(last_line.max(1), "missing size line"))?;
    if entries.len() != header.nnz {
        return Err(mm_error(
            last_line,
            format!("expected {} entries, found {}", header.nnz, entries.len()),
        ));
    }

    let (element_type, symmetry) = match banner {
        Some(b) => (b.element_type, b.symmetry),
        None => {
            let element_type = match arity {
                Some(3) if saw_fraction => ElementType::Float,
                Some(3) => ElementType::Int,
                _ => ElementType::Void,
            };
            (element_type, Symmetry::General)
        }
    };

    Ok(MatrixData {
        header,
        symmetry,
        element_type,
        entries,
    })
}

/// Load and parse a `.mtx` file.
pub fn load(path: &Path) -> Result<MatrixData, GraphbenchError> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Read only the size line of a `.mtx` file, without touching the entries.
pub fn load_header(path: &Path) -> Result<MatrixHeader, GraphbenchError> {
    let reader = BufReader::new(File::open(path)?);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let content = strip_comment(&line).trim();
        if content.is_empty() {
            continue;
        }
        let fields: Vec<&str> = content.split_whitespace().collect();
        return parse_size_line(&fields, idx + 1);
    }

    Err(mm_error(1, "missing size line"))
}

/// Render a matrix to Matrix Market text, banner included.
pub fn render(matrix: &MatrixData) -> String {
    let field = match matrix.element_type {
        ElementType::Void => "pattern",
        ElementType::Int => "integer",
        ElementType::Float => "real",
    };
    let symmetry = match matrix.symmetry {
        Symmetry::General => "general",
        Symmetry::Symmetric => "symmetric",
    };

    let mut out = String::new();
    let _ = writeln!(out, "%%MatrixMarket matrix coordinate {field} {symmetry}");
    let _ = writeln!(
        out,
        "{} {} {}",
        matrix.header.rows,
        matrix.header.cols,
        matrix.entries.len()
    );

    for entry in &matrix.entries {
        let (i, j) = (entry.row + 1, entry.col + 1);
        match (matrix.element_type, entry.value) {
            (ElementType::Void, _) | (_, None) => {
                let _ = writeln!(out, "{i} {j}");
            }
            (ElementType::Int, Some(v)) => {
                let _ = writeln!(out, "{i} {j} {}", v as i64);
            }
            (ElementType::Float, Some(v)) => {
                let _ = writeln!(out, "{i} {j} {v:?}");
            }
        }
    }

    out
}

/// Write a matrix to a `.mtx` file.
pub fn save(path: &Path, matrix: &MatrixData) -> Result<(), GraphbenchError> {
    std::fs::write(path, render(matrix))?;
    Ok(())
}
