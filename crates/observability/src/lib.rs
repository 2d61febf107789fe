use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    offline_answers_total: AtomicU64,
    fallback_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub offline_answers_total: u64,
    pub fallback_total: u64,
    pub avg_latency_millis: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_offline_answer(&self) {
        self.offline_answers_total.fetch_add(1, Ordering::Relaxed);
    }

    /// A message nothing in the detector list claimed; answered by the
    /// generic fallback chain.
    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            offline_answers_total: self.offline_answers_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            avg_latency_millis: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,sathi_api=info,sathi_agent=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_average_latency() {
        let metrics = AppMetrics::default();
        metrics.inc_request();
        metrics.inc_request();
        metrics.inc_offline_answer();
        metrics.inc_fallback();
        metrics.observe_latency(Duration::from_millis(10));
        metrics.observe_latency(Duration::from_millis(30));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests_total, 2);
        assert_eq!(snapshot.offline_answers_total, 1);
        assert_eq!(snapshot.fallback_total, 1);
        assert!((snapshot.avg_latency_millis - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_metrics_have_zero_average() {
        let snapshot = AppMetrics::default().snapshot();
        assert_eq!(snapshot.requests_total, 0);
        assert_eq!(snapshot.avg_latency_millis, 0.0);
    }
}
