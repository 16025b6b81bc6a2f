//! Read candidate fields from an uploaded workbook
//!
//! Only the first data row of the first sheet is consulted. Later rows and
//! sheets are ignored.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::candidates::{ParsedCandidateFields, ValidationError};

use super::values::{
    cell_to_string, coerce_availability, coerce_seniority, coerce_years, is_empty_cell,
};

/// Accepted header names per field, in lookup order (exact match)
///
/// The first entry is the canonical name used in error messages.
pub mod headers {
    pub const SENIORITY: &[&str] = &["Seniority", "seniority"];
    pub const YEARS_OF_EXPERIENCE: &[&str] = &["Years of experience", "yearsOfExperience", "years"];
    pub const AVAILABILITY: &[&str] = &["Availability", "availability"];

    pub const REQUIRED: [&[&str]; 3] = [SENIORITY, YEARS_OF_EXPERIENCE, AVAILABILITY];
}

/// A decoded workbook: named sheets in workbook order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub sheets: Vec<Sheet>,
}

/// One worksheet, first row is the header row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Data>>,
}

impl Document {
    /// Decode raw workbook bytes (xlsx, xlsm, xlsb, xls, ods)
    pub fn decode(buffer: &[u8]) -> Result<Self, ValidationError> {
        let unreadable = |e: calamine::Error| ValidationError::new(format!("document unreadable: {}", e));

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(unreadable)?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = workbook.worksheet_range(&name).map_err(unreadable)?;
            let rows = range.rows().map(|r| r.to_vec()).collect();
            sheets.push(Sheet { name, rows });
        }

        Ok(Document { sheets })
    }
}

/// A data row keyed by header text
///
/// Empty cells and cells under empty headers are left out. With duplicate
/// headers the leftmost column wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, Data>,
}

impl RawRow {
    fn from_cells(header: &[String], row: &[Data]) -> Self {
        let mut cells = HashMap::new();
        for (idx, cell) in row.iter().enumerate() {
            let Some(name) = header.get(idx) else { continue };
            if name.is_empty() || matches!(cell, Data::Empty) {
                continue;
            }
            cells.entry(name.clone()).or_insert_with(|| cell.clone());
        }
        Self { cells }
    }

    /// Whether the exact header holds a non-empty value
    pub fn has_value(&self, header: &str) -> bool {
        self.cells.get(header).is_some_and(|cell| !is_empty_cell(cell))
    }

    /// First non-empty value among the given header aliases
    pub fn lookup(&self, aliases: &[&str]) -> Option<&Data> {
        aliases
            .iter()
            .filter_map(|alias| self.cells.get(*alias))
            .find(|cell| !is_empty_cell(cell))
    }
}

impl Sheet {
    /// Data rows mapped by header, skipping rows where every cell is empty
    ///
    /// A row whose only values sit under unheaded columns is kept and maps to
    /// an empty [`RawRow`].
    pub fn records(&self) -> Vec<RawRow> {
        let Some((header_row, data_rows)) = self.rows.split_first() else {
            return Vec::new();
        };

        let header: Vec<String> = header_row.iter().map(cell_to_string).collect();

        data_rows
            .iter()
            .filter(|row| !row.iter().all(|c| matches!(c, Data::Empty)))
            .map(|row| RawRow::from_cells(&header, row))
            .collect()
    }
}

/// Extracts and validates candidate fields from a workbook
///
/// Stateless; safe to share between requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularRecordParser;

impl TabularRecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Decode `buffer` and validate its first data row
    pub fn parse(&self, buffer: &[u8]) -> Result<ParsedCandidateFields, ValidationError> {
        let document = Document::decode(buffer)?;
        self.parse_document(&document)
    }

    /// Validate an already decoded document
    pub fn parse_document(&self, document: &Document) -> Result<ParsedCandidateFields, ValidationError> {
        let sheet = document
            .sheets
            .first()
            .ok_or_else(|| ValidationError::new("no sheets present in the document"))?;

        let records = sheet.records();
        let row = records
            .first()
            .ok_or_else(|| ValidationError::new("document empty: the first sheet has no data rows"))?;

        if records.len() > 1 {
            log::debug!(
                "Sheet '{}' has {} data rows, only the first is used",
                sheet.name,
                records.len()
            );
        }

        validate_structure(row)?;

        Ok(ParsedCandidateFields {
            seniority: coerce_seniority(row.lookup(headers::SENIORITY))?,
            years_of_experience: coerce_years(row.lookup(headers::YEARS_OF_EXPERIENCE))?,
            availability: coerce_availability(row.lookup(headers::AVAILABILITY))?,
        })
    }
}

/// All three canonical headers must hold a value, otherwise every missing
/// column is reported at once. Aliases only apply when reading values.
fn validate_structure(row: &RawRow) -> Result<(), ValidationError> {
    let missing: Vec<&str> = headers::REQUIRED
        .iter()
        .map(|aliases| aliases[0])
        .filter(|canonical| !row.has_value(canonical))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let required: Vec<&str> = headers::REQUIRED.iter().map(|aliases| aliases[0]).collect();
    Err(ValidationError::new(format!(
        "document must contain columns: {}. Missing: {}",
        required.join(", "),
        missing.join(", ")
    )))
}
