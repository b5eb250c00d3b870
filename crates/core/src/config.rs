use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceprepError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub hosts: Vec<String>,
    pub ports: Vec<String>,
    pub count: usize,
    pub start_range: u32,
    pub end_offset: u32,
    pub day: i64,
    pub seed: Option<u64>,
    pub input_path: PathBuf,
    pub synth_out: PathBuf,
    pub extract_out: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Candidate lists are required configuration; there is no
            // sensible default target fleet.
            hosts: Vec::new(),
            ports: Vec::new(),
            count: 100,
            start_range: 120,
            end_offset: 60,
            day: 1,
            seed: None,
            input_path: PathBuf::from("./data_6.1~6.30_.xlsx"),
            synth_out: PathBuf::from("data.yaml"),
            extract_out: PathBuf::from("data.json"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        let config_path = config_file_path();
        if let Some(file_overrides) = load_file_overrides(&config_path)? {
            apply_overrides(&mut cfg, file_overrides, "config file")?;
        }
        let env_overrides = load_env_overrides()?;
        apply_overrides(&mut cfg, env_overrides, "environment")?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        let env_overrides = load_env_overrides()?;
        apply_overrides(&mut cfg, env_overrides, "environment")?;
        Ok(cfg)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    hosts: Option<String>,
    ports: Option<String>,
    count: Option<usize>,
    start_range: Option<u32>,
    end_offset: Option<u32>,
    day: Option<i64>,
    seed: Option<u64>,
    input_path: Option<PathBuf>,
    synth_out: Option<PathBuf>,
    extract_out: Option<PathBuf>,
}

fn config_file_path() -> PathBuf {
    if let Ok(path) = env::var("TRACEPREP_CONFIG") {
        return PathBuf::from(path);
    }

    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let config_home = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(home).join(".config"));
    config_home.join("traceprep/config.toml")
}

fn load_file_overrides(path: &PathBuf) -> Result<Option<ConfigOverrides>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| TraceprepError::Config(format!("failed reading {}: {e}", path.display())))?;
    let parsed: ConfigOverrides = toml::from_str(&raw)
        .map_err(|e| TraceprepError::Config(format!("failed parsing {}: {e}", path.display())))?;
    Ok(Some(parsed))
}

fn load_env_overrides() -> Result<ConfigOverrides> {
    Ok(ConfigOverrides {
        hosts: env::var("TRACEPREP_HOSTS").ok(),
        ports: env::var("TRACEPREP_PORTS").ok(),
        count: parse_env_number("TRACEPREP_COUNT")?,
        start_range: parse_env_number("TRACEPREP_START_RANGE")?,
        end_offset: parse_env_number("TRACEPREP_END_OFFSET")?,
        day: parse_env_number("TRACEPREP_DAY")?,
        seed: parse_env_number("TRACEPREP_SEED")?,
        input_path: env::var("TRACEPREP_INPUT").ok().map(PathBuf::from),
        synth_out: env::var("TRACEPREP_SYNTH_OUT").ok().map(PathBuf::from),
        extract_out: env::var("TRACEPREP_EXTRACT_OUT").ok().map(PathBuf::from),
    })
}

fn parse_env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(v) => Ok(Some(v.parse::<T>().map_err(|e| {
            TraceprepError::Config(format!("bad {name} in environment: {e}"))
        })?)),
        Err(_) => Ok(None),
    }
}

fn apply_overrides(cfg: &mut Config, overrides: ConfigOverrides, source: &str) -> Result<()> {
    if let Some(v) = overrides.hosts {
        cfg.hosts = parse_list(&v)
            .map_err(|e| TraceprepError::Config(format!("bad hosts in {source}: {e} (value={v})")))?;
    }
    if let Some(v) = overrides.ports {
        cfg.ports = parse_list(&v)
            .map_err(|e| TraceprepError::Config(format!("bad ports in {source}: {e} (value={v})")))?;
    }
    if let Some(v) = overrides.count {
        cfg.count = v;
    }
    if let Some(v) = overrides.start_range {
        cfg.start_range = v;
    }
    if let Some(v) = overrides.end_offset {
        cfg.end_offset = v;
    }
    if let Some(v) = overrides.day {
        cfg.day = v;
    }
    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
    }
    if let Some(v) = overrides.input_path {
        cfg.input_path = v;
    }
    if let Some(v) = overrides.synth_out {
        cfg.synth_out = v;
    }
    if let Some(v) = overrides.extract_out {
        cfg.extract_out = v;
    }
    Ok(())
}

/// Comma-separated candidate list. Entries are trimmed; blanks are skipped so
/// trailing commas are harmless, but an all-blank value is an error.
pub fn parse_list(raw: &str) -> Result<Vec<String>> {
    let out: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if out.is_empty() {
        return Err(TraceprepError::Config(
            "candidate list cannot be empty".to_string(),
        ));
    }
    Ok(out)
}
