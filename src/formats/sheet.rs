//! Tabular source reading.
//!
//! The importer is format-agnostic past this point: the legacy `.xls`
//! workbook reader and the CSV reader both produce the same row-major
//! [`Sheet`] of string cells.

use std::path::Path;

use calamine::{DataType, Reader, Xls, open_workbook};

use crate::error::{Error, Result};
use crate::formats::SourceFormat;

/// Row-major cell data, header row included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Reads the sheet at `path`, dispatching on the recognized format.
    ///
    /// For workbooks only the first worksheet is read.
    pub fn read_from(path: &Path, format: SourceFormat) -> Result<Self> {
        match format {
            SourceFormat::Xls => read_xls(path),
            SourceFormat::Csv => read_csv(path),
        }
    }
}

fn read_xls(path: &Path) -> Result<Sheet> {
    let mut workbook: Xls<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::InvalidResource("workbook contains no sheets".to_string()))?;
    let range_result = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| Error::InvalidResource(format!("missing sheet '{sheet_name}'")))?;
    let range = range_result?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(Sheet { rows })
}

fn read_csv(path: &Path) -> Result<Sheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Sheet { rows })
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}
