//! Named pass/fail checks.
//!
//! balter already tracks transaction success and latency; these counters cover
//! assertions on response *content*, which are not transaction errors and must
//! never abort an iteration. Counts are also exported through the `metrics`
//! facade, labeled by check name.

use lazy_static::lazy_static;
use metrics::counter;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct CheckCounters {
    passes: AtomicU64,
    fails: AtomicU64,
}

lazy_static! {
    static ref CHECKS: Arc<RwLock<HashMap<&'static str, Arc<CheckCounters>>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

/// Record one observation of the named check. Returns `pass` unchanged so
/// call sites can combine outcomes.
pub fn check(name: &'static str, pass: bool) -> bool {
    let read = CHECKS.read().unwrap().get(name).cloned();
    let counters = if let Some(counters) = read {
        counters
    } else {
        CHECKS.write().unwrap().entry(name).or_default().clone()
    };

    if pass {
        counters.passes.fetch_add(1, Ordering::Relaxed);
        counter!("wunderbench_check_passed_total", "check" => name).increment(1);
    } else {
        counters.fails.fetch_add(1, Ordering::Relaxed);
        counter!("wunderbench_check_failed_total", "check" => name).increment(1);
    }

    pass
}

/// Cumulative counts for one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: &'static str,
    pub passes: u64,
    pub fails: u64,
}

/// Snapshot of every check seen so far, sorted by name.
pub fn report() -> Vec<CheckReport> {
    let mut out: Vec<_> = CHECKS
        .read()
        .unwrap()
        .iter()
        .map(|(&name, counters)| CheckReport {
            name,
            passes: counters.passes.load(Ordering::Relaxed),
            fails: counters.fails.load(Ordering::Relaxed),
        })
        .collect();
    out.sort_by_key(|check| check.name);
    out
}
