use traceprep_core::model::record::{RecordBody, TraceRecord};
use traceprep_core::model::table::{Cell, Table};

/// A small session sheet with three day-1 rows and one day-2 row. The
/// sheet-wide minimum start time (5.0) sits on the day-2 row, so tests can
/// tell full-sheet normalization apart from filtered-set normalization.
pub fn sample_table() -> Table {
    let columns = vec![
        "date".to_string(),
        "month".to_string(),
        "location(latitude/longitude)".to_string(),
        "user id".to_string(),
        "start time".to_string(),
        "end time".to_string(),
    ];
    let rows = vec![
        session_row(1, "39.98,116.30", 3, 30.0, 60.0),
        session_row(1, "39.99,116.31", 1, 10.0, 20.0),
        session_row(2, "40.00,116.32", 2, 5.0, 9.0),
        session_row(1, "40.01,116.33", 2, 10.0, 15.0),
    ];
    Table::new(columns, rows).expect("sample table is well formed")
}

fn session_row(date: i64, location: &str, user: i64, start: f64, end: f64) -> Vec<Cell> {
    vec![
        Cell::Int(date),
        Cell::Int(6),
        Cell::Text(location.to_string()),
        Cell::Int(user),
        Cell::Number(start),
        Cell::Number(end),
    ]
}

pub fn sample_records() -> Vec<TraceRecord> {
    vec![
        TraceRecord {
            host: "http://app-1:8080".to_string(),
            start: 12,
            end: 47,
            path: "/".to_string(),
            method: "POST".to_string(),
            content_type: "multipart".to_string(),
            body: RecordBody {
                path: "<PATH>".to_string(),
                name: "<NAME>".to_string(),
            },
        },
        TraceRecord {
            host: "http://app-2:80".to_string(),
            start: 80,
            end: 80,
            path: "/".to_string(),
            method: "POST".to_string(),
            content_type: "multipart".to_string(),
            body: RecordBody {
                path: "<PATH>".to_string(),
                name: "<NAME>".to_string(),
            },
        },
    ]
}
