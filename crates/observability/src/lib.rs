use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    messages_total: AtomicU64,
    replies_total: AtomicU64,
    fallback_total: AtomicU64,
    cancelled_total: AtomicU64,
    quick_actions_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub messages_total: u64,
    pub replies_total: u64,
    pub fallback_total: u64,
    pub cancelled_total: u64,
    pub quick_actions_total: u64,
    pub avg_reply_latency_millis: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_message(&self) {
        self.messages_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reply(&self) {
        self.replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_cancelled(&self) {
        self.cancelled_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_quick_action(&self) {
        self.quick_actions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_reply_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let replies = self.replies_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            messages_total: self.messages_total.load(Ordering::Relaxed),
            replies_total: replies,
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            cancelled_total: self.cancelled_total.load(Ordering::Relaxed),
            quick_actions_total: self.quick_actions_total.load(Ordering::Relaxed),
            avg_reply_latency_millis: if replies == 0 {
                0.0
            } else {
                latency as f64 / replies as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,frontdesk_agent=info", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
