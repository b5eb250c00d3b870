use std::path::Path;

use serde::Serialize;
use traceprep_core::model::record::TraceRecord;

#[derive(Debug, Serialize)]
pub struct SynthSummary {
    pub records: usize,
    pub min_start: u32,
    pub max_end: u32,
    pub out: String,
}

impl SynthSummary {
    pub fn new(records: &[TraceRecord], out: &Path) -> Self {
        Self {
            records: records.len(),
            min_start: records.iter().map(|r| r.start).min().unwrap_or(0),
            max_end: records.iter().map(|r| r.end).max().unwrap_or(0),
            out: out.display().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractSummary {
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns: Vec<String>,
    pub out: String,
}

pub fn print_synth_human(v: &SynthSummary) {
    println!(
        "records={} start_min={} end_max={}",
        v.records, v.min_start, v.max_end
    );
    println!("-- wrote {} --", v.out);
}

pub fn print_extract_human(v: &ExtractSummary) {
    println!(
        "rows={}/{} columns={}",
        v.rows_out,
        v.rows_in,
        v.columns.join(",")
    );
    println!("-- wrote {} --", v.out);
}

pub fn print_summary<T: Serialize>(v: &T, json: bool, human: impl Fn(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(v)?);
    } else {
        human(v);
    }
    Ok(())
}
