//! Response envelopes for the Linkerd Viz dashboard API.
//!
//! The dashboard wraps every successful payload in an `ok` object. Row and
//! edge contents are kept as opaque JSON: their shape belongs to the upstream
//! API and is passed through to the dashboard consumer unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Wrapper around a `GET /api/tps-reports` response.
///
/// # Example
/// ```json
/// {
///   "ok": {
///     "statTables": [
///       {"podGroup": {"rows": [{"resource": {...}, "stats": {...}}]}}
///     ]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsEnvelope {
    pub ok: StatTables,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatTables {
    #[serde(rename = "statTables")]
    pub stat_tables: Vec<StatTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(rename = "podGroup")]
    pub pod_group: PodGroup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodGroup {
    pub rows: Vec<JsonValue>,
}

impl StatsEnvelope {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// All rows across stat tables, in table order.
    pub fn into_rows(self) -> Vec<JsonValue> {
        self.ok
            .stat_tables
            .into_iter()
            .flat_map(|table| table.pod_group.rows)
            .collect()
    }
}

/// Wrapper around a `GET /api/edges` response.
///
/// # Example
/// ```json
/// {"ok": {"edges": [{"src": {...}, "dst": {...}}]}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgesEnvelope {
    pub ok: EdgeList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeList {
    pub edges: Vec<JsonValue>,
}

impl EdgesEnvelope {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn into_edges(self) -> Vec<JsonValue> {
        self.ok.edges
    }
}
