use serde::{Deserialize, Serialize};

/// One simulated request for the downstream load tester. Field order is the
/// on-disk key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceRecord {
    pub host: String,
    pub start: u32,
    pub end: u32,
    pub path: String,
    pub method: String,
    #[serde(rename = "content-type")]
    pub content_type: String,
    pub body: RecordBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordBody {
    pub path: String,
    pub name: String,
}

impl TraceRecord {
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}
