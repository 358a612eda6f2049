//! tests/common/mod.rs
use kestrel_timer_wheel::{Timer, TimerKind};
use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "kestrel_timer_wheel=debug".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// A timer that counts how many times it has expired.
#[derive(Debug)]
pub struct MockTimer {
    name: String,
    kind: TimerKind,
    start_offset: Duration,
    fired: AtomicUsize,
}

impl MockTimer {
    pub fn new(name: impl Into<String>, kind: TimerKind, start_offset: Duration) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            kind,
            start_offset,
            fired: AtomicUsize::new(0),
        })
    }

    pub fn fired(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Timer for MockTimer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TimerKind {
        self.kind
    }

    fn start_offset(&self) -> Duration {
        self.start_offset
    }

    fn on_expired(&self) {
        tracing::info!(name = %self.name, "MockTimer expired");
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}
