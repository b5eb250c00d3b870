use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use tracing::debug;
use traceprep_core::model::table::{Cell, Table};
use traceprep_core::{Result, TraceprepError};

/// Load the first worksheet of an `.xlsx` workbook into a [`Table`]. The
/// first row is the header.
pub fn load_table(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| TraceprepError::Spreadsheet(format!("failed opening {}: {e}", path.display())))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| {
            TraceprepError::Spreadsheet(format!("{} contains no worksheets", path.display()))
        })?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| {
            TraceprepError::Spreadsheet(format!("failed reading sheet {sheet:?}: {e}"))
        })?;

    let table = table_from_range(&range)?;
    debug!(
        rows = table.len(),
        columns = table.columns().len(),
        sheet = %sheet,
        "loaded worksheet"
    );
    Ok(table)
}

pub fn table_from_range(range: &Range<Data>) -> Result<Table> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| TraceprepError::Spreadsheet("worksheet is empty".to_string()))?;

    let mut columns = Vec::with_capacity(header.len());
    for (i, cell) in header.iter().enumerate() {
        let name = cell.to_string().trim().to_string();
        if name.is_empty() {
            return Err(TraceprepError::Spreadsheet(format!(
                "empty header cell in column {}",
                i + 1
            )));
        }
        columns.push(name);
    }

    let data = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();
    Table::new(columns, data)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) => Cell::Number(*v),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{e:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_with(cells: &[(u32, u32, Data)]) -> Range<Data> {
        let max_row = cells.iter().map(|(r, _, _)| *r).max().unwrap_or(0);
        let max_col = cells.iter().map(|(_, c, _)| *c).max().unwrap_or(0);
        let mut range = Range::new((0, 0), (max_row, max_col));
        for (r, c, v) in cells {
            range.set_value((*r, *c), v.clone());
        }
        range
    }

    #[test]
    fn header_row_becomes_columns() {
        let range = range_with(&[
            (0, 0, Data::String("date".to_string())),
            (0, 1, Data::String("start time".to_string())),
            (1, 0, Data::Int(1)),
            (1, 1, Data::Float(12.5)),
        ]);
        let table = table_from_range(&range).unwrap();
        assert_eq!(table.columns(), ["date", "start time"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0][1], Cell::Number(12.5));
    }

    #[test]
    fn empty_header_cell_is_rejected() {
        let range = range_with(&[
            (0, 0, Data::String("date".to_string())),
            (0, 1, Data::Empty),
            (1, 1, Data::Int(3)),
        ]);
        let err = table_from_range(&range).unwrap_err();
        assert!(err.to_string().contains("empty header cell"));
    }

    #[test]
    fn missing_input_file_is_descriptive() {
        let err = load_table(Path::new("./no-such-file.xlsx")).unwrap_err();
        assert!(err.to_string().contains("no-such-file.xlsx"));
    }
}
