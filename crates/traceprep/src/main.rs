mod output;
mod telemetry;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use traceprep_core::config::{Config, parse_list};
use traceprep_extract::pipeline::{ExtractParams, SortKey};
use traceprep_synth::generator::{SynthParams, generate};

use crate::output::{
    ExtractSummary, SynthSummary, print_extract_human, print_summary, print_synth_human,
};
use crate::telemetry::init_cli_tracing;

#[derive(Parser, Debug)]
#[command(name = "traceprep")]
#[command(about = "Workload trace fixture preparation utility")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Generate synthetic trace records as a YAML sequence")]
    Synth {
        #[arg(long, help = "Comma-separated target host candidates")]
        hosts: Option<String>,
        #[arg(long, help = "Comma-separated target port candidates")]
        ports: Option<String>,
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, help = "Upper bound for start offsets, in seconds")]
        start_range: Option<u32>,
        #[arg(long, help = "Upper bound for the end-start gap, in seconds")]
        end_offset: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    #[command(about = "Extract trace records from a session spreadsheet")]
    Extract {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, help = "Keep rows whose date column equals this day")]
        day: Option<i64>,
        #[arg(long, default_value = "time", help = "Sort key: time or user")]
        sort: String,
        #[arg(long, help = "Keep start/end times as found in the sheet")]
        no_normalize: bool,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_cli_tracing();

    match cli.command {
        Commands::Synth {
            hosts,
            ports,
            count,
            start_range,
            end_offset,
            seed,
            out,
        } => {
            let mut cfg = Config::load()?;
            if let Some(v) = hosts {
                cfg.hosts = parse_list(&v)?;
            }
            if let Some(v) = ports {
                cfg.ports = parse_list(&v)?;
            }
            if let Some(v) = count {
                cfg.count = v;
            }
            if let Some(v) = start_range {
                cfg.start_range = v;
            }
            if let Some(v) = end_offset {
                cfg.end_offset = v;
            }
            if let Some(v) = seed {
                cfg.seed = Some(v);
            }
            let out = out.unwrap_or_else(|| cfg.synth_out.clone());

            let params = SynthParams::from_config(&cfg);
            let records = generate(&params)?;
            traceprep_synth::write_yaml(&out, &records)?;
            info!(records = records.len(), out = %out.display(), "synthetic trace written");

            let summary = SynthSummary::new(&records, &out);
            print_summary(&summary, cli.json, print_synth_human)
        }
        Commands::Extract {
            input,
            day,
            sort,
            no_normalize,
            seed,
            out,
        } => {
            let mut cfg = Config::load()?;
            if let Some(v) = input {
                cfg.input_path = v;
            }
            if let Some(v) = day {
                cfg.day = v;
            }
            if let Some(v) = seed {
                cfg.seed = Some(v);
            }
            let out = out.unwrap_or_else(|| cfg.extract_out.clone());

            let mut params = ExtractParams::from_config(&cfg);
            params.sort = sort.parse::<SortKey>()?;
            params.normalize = !no_normalize;

            let table = traceprep_extract::load_table(&cfg.input_path)
                .with_context(|| format!("loading {}", cfg.input_path.display()))?;
            let rows_in = table.len();
            let rows = traceprep_extract::run(&table, &params)?;
            traceprep_extract::write_json(&out, &rows)?;
            info!(rows = rows.len(), out = %out.display(), "extracted trace written");

            let columns = rows
                .first()
                .map(|r| r.keys().cloned().collect())
                .unwrap_or_default();
            let summary = ExtractSummary {
                rows_in,
                rows_out: rows.len(),
                columns,
                out: out.display().to_string(),
            };
            print_summary(&summary, cli.json, print_extract_human)
        }
    }
}
