//! Outbound call counters, split by Riot endpoint.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::info_span;

const REPORT_INTERVAL: Duration = Duration::from_secs(60);

/// Riot endpoint an outbound call went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Account,
    League,
}

#[derive(Debug)]
pub struct RequestMetrics {
    name: &'static str,
    start: Instant,
    account: AtomicU64,
    league: AtomicU64,
    failed: AtomicU64,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            start: Instant::now(),
            account: AtomicU64::new(0),
            league: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        })
    }

    fn counter(&self, endpoint: Endpoint) -> &AtomicU64 {
        match endpoint {
            Endpoint::Account => &self.account,
            Endpoint::League => &self.league,
        }
    }

    pub fn record(&self, endpoint: Endpoint) {
        self.counter(endpoint).fetch_add(1, Ordering::Relaxed);
    }

    /// Call that ended in a bad status, a transport error or an undecodable body.
    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self, endpoint: Endpoint) -> u64 {
        self.counter(endpoint).load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.count(Endpoint::Account) + self.count(Endpoint::League)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            account: self.count(Endpoint::Account),
            league: self.count(Endpoint::League),
            failed: self.failed(),
            elapsed: self.start.elapsed(),
        }
    }

    /// Logs a [`Snapshot`] every minute, skipping minutes with no new calls.
    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(REPORT_INTERVAL);
        interval.tick().await;

        let mut last_total = 0;
        loop {
            interval.tick().await;

            let snapshot = self.snapshot();
            if snapshot.total() == last_total {
                continue;
            }
            last_total = snapshot.total();

            info_span!("📊 ", client = self.name).in_scope(|| tracing::info!("{}", snapshot));
        }
    }
}

/// Counter values at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub account: u64,
    pub league: u64,
    pub failed: u64,
    pub elapsed: Duration,
}

impl Snapshot {
    pub fn total(&self) -> u64 {
        self.account + self.league
    }

    pub fn per_minute(&self) -> f64 {
        let minutes = self.elapsed.as_secs_f64() / 60.0;
        if minutes > 0.0 {
            self.total() as f64 / minutes
        } else {
            0.0
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Riot calls ({} account, {} league, {} failed), avg {:.2} req/min",
            self.total(),
            self.account,
            self.league,
            self.failed,
            self.per_minute()
        )
    }
}
