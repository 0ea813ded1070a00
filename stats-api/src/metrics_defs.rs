//! Metric definitions for the stats API.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Gauge,
    Histogram,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub description: &'static str,
}

pub const STATS_REQUESTS: MetricDef = MetricDef {
    name: "stats.requests",
    metric_type: MetricType::Counter,
    description: "Deployment stats requests received",
};

pub const ERROR_RESPONSES: MetricDef = MetricDef {
    name: "responses.error",
    metric_type: MetricType::Counter,
    description: "Error responses produced. Tagged with kind.",
};

pub const ALL_METRICS: &[MetricDef] = &[STATS_REQUESTS, ERROR_RESPONSES];
