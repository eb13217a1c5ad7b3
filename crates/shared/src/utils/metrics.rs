use prometheus_client::encoding::{EncodeLabelSet, EncodeLabelValue};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use std::fmt;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub method: Method,
    pub status: Status,
}

/// Per-service request counter and duration histogram. Services clone these
/// into the shared registry under their own metric names.
#[derive(Clone)]
pub struct Metrics {
    pub request_counter: Family<RequestLabels, Counter>,
    pub request_duration: Histogram,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Histogram::new(exponential_buckets(0.005, 2.0, 12)),
        }
    }

    pub fn record(&mut self, method: Method, status: Status, duration_secs: f64) {
        self.request_counter
            .get_or_create(&RequestLabels { method, status })
            .inc();
        self.request_duration.observe(duration_secs);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics").finish()
    }
}
