use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use tracing::debug;
use traceprep_core::config::Config;
use traceprep_core::model::table::{Cell, Table};
use traceprep_core::paths::CANDIDATE_API_PATHS;
use traceprep_core::{Result, TraceprepError};

pub const DATE_COLUMN: &str = "date";
pub const MONTH_COLUMN: &str = "month";
pub const LOCATION_COLUMN: &str = "location(latitude/longitude)";
pub const USER_COLUMN: &str = "user id";
pub const START_COLUMN: &str = "start time";
pub const END_COLUMN: &str = "end time";

/// Identifying columns removed from the output.
pub const DROPPED_COLUMNS: [&str; 4] = [DATE_COLUMN, MONTH_COLUMN, LOCATION_COLUMN, USER_COLUMN];

pub const ASSIGNED_STEP: u64 = 1000;
pub const ASSIGNED_SCALE: u64 = 20;
pub const ASSIGNED_METHOD: &str = "POST";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Sort by (start time, end time).
    #[default]
    Time,
    /// Sort by (user id, start time).
    User,
}

impl FromStr for SortKey {
    type Err = TraceprepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "user" => Ok(Self::User),
            _ => Err(TraceprepError::Parse(format!(
                "unknown sort key {s:?} (expected time or user)"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractParams {
    pub day: i64,
    pub sort: SortKey,
    pub normalize: bool,
    pub seed: Option<u64>,
}

impl ExtractParams {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            day: cfg.day,
            sort: SortKey::default(),
            normalize: true,
            seed: cfg.seed,
        }
    }
}

/// Run the extraction pipeline: filter by day, sort, drop identifying
/// columns, normalize times against the sheet-wide minimum start, and assign
/// synthetic routing fields. Returns ordered JSON objects ready for dumping.
pub fn run(table: &Table, params: &ExtractParams) -> Result<Vec<Map<String, Value>>> {
    // All expected columns must exist before any row work starts.
    for name in DROPPED_COLUMNS {
        table.column_index(name)?;
    }
    let date_col = table.column_index(DATE_COLUMN)?;
    let start_col = table.column_index(START_COLUMN)?;
    let end_col = table.column_index(END_COLUMN)?;
    let user_col = table.column_index(USER_COLUMN)?;

    let kept = filter_day(table, date_col, params.day)?;
    let sorted = sort_rows(table, kept, params.sort, start_col, end_col, user_col)?;

    // Times rebase against the minimum over the whole sheet, not just the
    // filtered day.
    let offset = if params.normalize {
        global_min_start(table, start_col)?
    } else {
        0.0
    };

    let kept_cols: Vec<usize> = (0..table.columns().len())
        .filter(|&i| !DROPPED_COLUMNS.contains(&table.columns()[i].as_str()))
        .collect();

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = Vec::with_capacity(sorted.len());
    for row in sorted {
        let mut obj = Map::new();
        for &col in &kept_cols {
            let name = table.columns()[col].clone();
            let value = if params.normalize && (col == start_col || col == end_col) {
                Cell::Number(table.numeric(row, col)? - offset).to_json()
            } else {
                table.rows()[row][col].to_json()
            };
            obj.insert(name, value);
        }

        let path = CANDIDATE_API_PATHS[rng.gen_range(0..CANDIDATE_API_PATHS.len())];
        obj.insert("path".to_string(), Value::from(path));
        obj.insert("step".to_string(), Value::from(ASSIGNED_STEP));
        obj.insert("scale".to_string(), Value::from(ASSIGNED_SCALE));
        obj.insert("method".to_string(), Value::from(ASSIGNED_METHOD));
        out.push(obj);
    }

    debug!(rows = out.len(), day = params.day, "extracted trace rows");
    Ok(out)
}

fn filter_day(table: &Table, date_col: usize, day: i64) -> Result<Vec<usize>> {
    let mut kept = Vec::new();
    for row in 0..table.len() {
        if table.numeric(row, date_col)? == day as f64 {
            kept.push(row);
        }
    }
    if kept.is_empty() {
        return Err(TraceprepError::InvalidArgument(format!(
            "no rows with {DATE_COLUMN} == {day}"
        )));
    }
    Ok(kept)
}

fn sort_rows(
    table: &Table,
    kept: Vec<usize>,
    sort: SortKey,
    start_col: usize,
    end_col: usize,
    user_col: usize,
) -> Result<Vec<usize>> {
    let (primary, secondary) = match sort {
        SortKey::Time => (start_col, end_col),
        SortKey::User => (user_col, start_col),
    };

    let mut keyed = kept
        .into_iter()
        .map(|row| {
            Ok((
                table.numeric(row, primary)?,
                table.numeric(row, secondary)?,
                row,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    // Trailing row index keeps the sort stable.
    keyed.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then(a.1.total_cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });
    Ok(keyed.into_iter().map(|(_, _, row)| row).collect())
}

fn global_min_start(table: &Table, start_col: usize) -> Result<f64> {
    let mut min = f64::INFINITY;
    for row in 0..table.len() {
        min = min.min(table.numeric(row, start_col)?);
    }
    Ok(min)
}
