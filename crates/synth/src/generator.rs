use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use traceprep_core::config::Config;
use traceprep_core::model::record::{RecordBody, TraceRecord};
use traceprep_core::{Result, TraceprepError};

pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_METHOD: &str = "POST";
pub const DEFAULT_CONTENT_TYPE: &str = "multipart";

#[derive(Debug, Clone)]
pub struct SynthParams {
    pub hosts: Vec<String>,
    pub ports: Vec<String>,
    pub count: usize,
    pub start_range: u32,
    pub end_offset: u32,
    pub seed: Option<u64>,
}

impl SynthParams {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            hosts: cfg.hosts.clone(),
            ports: cfg.ports.clone(),
            count: cfg.count,
            start_range: cfg.start_range,
            end_offset: cfg.end_offset,
            seed: cfg.seed,
        }
    }

    /// Candidate lists are required configuration; generation never indexes
    /// into an empty list.
    pub fn validate(&self) -> Result<()> {
        if self.hosts.is_empty() {
            return Err(TraceprepError::InvalidArgument(
                "hosts list is empty; pass --hosts or set TRACEPREP_HOSTS".to_string(),
            ));
        }
        if self.ports.is_empty() {
            return Err(TraceprepError::InvalidArgument(
                "ports list is empty; pass --ports or set TRACEPREP_PORTS".to_string(),
            ));
        }
        Ok(())
    }
}

/// Produce `count` random trace records. Start times are uniform in
/// `[0, start_range]`, end times add a uniform offset in `[0, end_offset]`,
/// so `end >= start` holds by construction.
pub fn generate(params: &SynthParams) -> Result<Vec<TraceRecord>> {
    params.validate()?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut records = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let start = rng.gen_range(0..=params.start_range);
        let end = start + rng.gen_range(0..=params.end_offset);
        let host = &params.hosts[rng.gen_range(0..params.hosts.len())];
        let port = &params.ports[rng.gen_range(0..params.ports.len())];

        records.push(TraceRecord {
            host: format!("http://{host}:{port}"),
            start,
            end,
            path: DEFAULT_PATH.to_string(),
            method: DEFAULT_METHOD.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: RecordBody {
                path: "<PATH>".to_string(),
                name: "<NAME>".to_string(),
            },
        });
    }

    debug!(count = records.len(), "generated synthetic trace records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SynthParams {
        SynthParams {
            hosts: vec!["app-1".to_string(), "app-2".to_string()],
            ports: vec!["80".to_string(), "8080".to_string()],
            count: 100,
            start_range: 120,
            end_offset: 60,
            seed: Some(42),
        }
    }

    #[test]
    fn produces_requested_count() {
        let records = generate(&params()).unwrap();
        assert_eq!(records.len(), 100);
    }

    #[test]
    fn windows_are_ordered_and_bounded() {
        for record in generate(&params()).unwrap() {
            assert!(record.end >= record.start);
            assert!(record.start <= 120);
            assert!(record.end <= 180);
        }
    }

    #[test]
    fn hosts_come_from_candidate_lists() {
        let p = params();
        for record in generate(&p).unwrap() {
            let rest = record.host.strip_prefix("http://").unwrap();
            let (host, port) = rest.split_once(':').unwrap();
            assert!(p.hosts.iter().any(|h| h == host), "unknown host {host}");
            assert!(p.ports.iter().any(|pt| pt == port), "unknown port {port}");
        }
    }

    #[test]
    fn fixed_fields_match_contract() {
        let record = &generate(&params()).unwrap()[0];
        assert_eq!(record.path, "/");
        assert_eq!(record.method, "POST");
        assert_eq!(record.content_type, "multipart");
        assert_eq!(record.body.path, "<PATH>");
        assert_eq!(record.body.name, "<NAME>");
    }

    #[test]
    fn equal_seeds_give_equal_output() {
        assert_eq!(generate(&params()).unwrap(), generate(&params()).unwrap());
        let other = SynthParams {
            seed: Some(43),
            ..params()
        };
        assert_ne!(generate(&params()).unwrap(), generate(&other).unwrap());
    }

    #[test]
    fn empty_candidates_are_rejected() {
        let no_hosts = SynthParams {
            hosts: Vec::new(),
            ..params()
        };
        let err = generate(&no_hosts).unwrap_err();
        assert!(err.to_string().contains("hosts list is empty"));

        let no_ports = SynthParams {
            ports: Vec::new(),
            ..params()
        };
        let err = generate(&no_ports).unwrap_err();
        assert!(err.to_string().contains("ports list is empty"));
    }
}
