use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TraceprepError};

/// One spreadsheet cell, reduced to the value kinds the pipeline handles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// JSON rendering. Integral floats come back out as integers so that
    /// values survive a write/re-parse cycle unchanged.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Empty => Value::Null,
            Cell::Int(v) => Value::from(*v),
            Cell::Number(v) => {
                if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Value::from(*v as i64)
                } else {
                    Value::from(*v)
                }
            }
            Cell::Text(v) => Value::from(v.clone()),
            Cell::Bool(v) => Value::from(*v),
        }
    }
}

/// A column-ordered in-memory copy of one worksheet. The header row supplies
/// column names; every data row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(TraceprepError::Spreadsheet(
                "worksheet has no header row".to_string(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TraceprepError::Spreadsheet(format!(
                    "row {} has {} cells, expected {}",
                    i + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| {
                TraceprepError::Spreadsheet(format!(
                    "missing column {:?} (have: {})",
                    name,
                    self.columns.join(", ")
                ))
            })
    }

    /// Numeric value of one cell, with row/column context in the error.
    pub fn numeric(&self, row: usize, col: usize) -> Result<f64> {
        self.rows[row][col].as_f64().ok_or_else(|| {
            TraceprepError::Spreadsheet(format!(
                "non-numeric value {:?} in column {:?} at row {}",
                self.rows[row][col],
                self.columns[col],
                row + 1
            ))
        })
    }
}
