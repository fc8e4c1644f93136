//! Catalog loading from spreadsheet workbooks.
//!
//! Reads a course catalog from an `.xlsx` workbook: one course per row on a
//! sheet named `catalog` (falling back to the first sheet), no header row.
//!
//! | Column | Content | Example |
//! |--------|---------|---------|
//! | A | program code | `CS` |
//! | B | designation | `1101` |
//! | C | credit hours | `3` |
//! | D | offered terms, whitespace-separated | `Fall Spring` |
//! | E | prerequisite groups: alternatives split by commas, members by whitespace | `CS1101 MATH2300, CS1104` |
//!
//! Rows with an empty program cell are skipped. An empty prerequisite cell
//! means no prerequisites, and an empty term cell loads as an empty term
//! list, which `validation::validate_catalog` will flag.

use std::fmt;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::models::{Catalog, CourseId, CourseInfo, Term};

/// Sheet the loader prefers when the workbook has one.
pub const CATALOG_SHEET: &str = "catalog";

/// Error raised while loading a catalog workbook.
#[derive(Debug)]
pub enum CatalogLoadError {
    /// The workbook could not be opened or read.
    Workbook(calamine::Error),
    /// The workbook has no sheets at all.
    NoSheets,
    /// A row's cells could not be interpreted. Rows are 1-based.
    BadRow { row: usize, detail: String },
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLoadError::Workbook(err) => write!(f, "cannot read workbook: {err}"),
            CatalogLoadError::NoSheets => write!(f, "workbook has no sheets"),
            CatalogLoadError::BadRow { row, detail } => write!(f, "row {row}: {detail}"),
        }
    }
}

impl std::error::Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogLoadError::Workbook(err) => Some(err),
            _ => None,
        }
    }
}

impl From<calamine::Error> for CatalogLoadError {
    fn from(err: calamine::Error) -> Self {
        CatalogLoadError::Workbook(err)
    }
}

/// Loads a catalog workbook.
///
/// Later rows replace earlier ones with the same course id, keeping the
/// original row's position in catalog order.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names().to_owned();
    let sheet = names
        .iter()
        .find(|name| name.as_str() == CATALOG_SHEET)
        .or_else(|| names.first())
        .ok_or(CatalogLoadError::NoSheets)?
        .clone();
    let range = workbook.worksheet_range(&sheet)?;

    let mut catalog = Catalog::new();
    for (index, row) in range.rows().enumerate() {
        let row_number = index + 1;
        let bad_row = |detail: String| CatalogLoadError::BadRow {
            row: row_number,
            detail,
        };

        let program = cell_str(row.first());
        if program.is_empty() {
            continue;
        }
        let designation = cell_str(row.get(1));
        if designation.is_empty() {
            return Err(bad_row("missing designation".into()));
        }

        let credits = parse_credits(&cell_str(row.get(2))).map_err(bad_row)?;
        let terms = parse_terms(&cell_str(row.get(3))).map_err(bad_row)?;
        let prereq_groups = parse_prereq_groups(&cell_str(row.get(4))).map_err(bad_row)?;

        catalog.insert(
            CourseId::new(program, designation),
            CourseInfo {
                credits,
                terms,
                prereq_groups,
            },
        );
    }
    Ok(catalog)
}

/// Renders a cell as trimmed text. Whole floats lose their fraction, so a
/// numeric `3.0` reads back as `"3"`.
fn cell_str(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) | Some(Data::Error(_)) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(v)) => {
            if v.fract() == 0.0 {
                format!("{}", *v as i64)
            } else {
                v.to_string()
            }
        }
        Some(Data::Int(v)) => v.to_string(),
        Some(Data::Bool(v)) => v.to_string(),
        Some(other) => other.to_string(),
    }
}

fn parse_credits(cell: &str) -> Result<u32, String> {
    cell.parse::<u32>()
        .map_err(|_| format!("invalid credit hours '{cell}'"))
}

fn parse_terms(cell: &str) -> Result<Vec<Term>, String> {
    cell.split_whitespace()
        .map(|word| Term::parse(word).ok_or_else(|| format!("unknown term '{word}'")))
        .collect()
}

fn parse_prereq_groups(cell: &str) -> Result<Vec<Vec<CourseId>>, String> {
    cell.split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(|group| {
            group
                .split_whitespace()
                .map(|token| {
                    CourseId::parse(token)
                        .ok_or_else(|| format!("malformed course token '{token}'"))
                })
                .collect()
        })
        .collect()
}
