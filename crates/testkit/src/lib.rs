#![warn(missing_docs)]
//! Shared test helpers: golden snapshots, scratch files and fixed random sources.

mod snapshot;

use rand::rngs::mock::StepRng;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub use snapshot::*;

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique path under the system temp dir, e.g. `/tmp/mcc-lang-<nanos>-<n>.lang`.
///
/// Nothing is created on disk.
pub fn scratch_path(prefix: &str, extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}.{extension}", unique_name(prefix)))
}

/// Unique scratch directory path. Nothing is created on disk.
pub fn scratch_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(unique_name(prefix))
}

fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("mcc-{prefix}-{nanos}-{n}")
}

/// Random source whose `gen::<f64>()` always yields `fraction`.
///
/// `fraction` is truncated to a multiple of 2^-53 and must lie in `[0, 1)`.
pub fn fixed_fraction_rng(fraction: f64) -> StepRng {
    let bits = (fraction * (1u64 << 53) as f64) as u64;
    StepRng::new(bits << 11, 0)
}

/// Random source whose `gen::<f64>()` always yields the largest value below 1.
pub fn max_fraction_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}
