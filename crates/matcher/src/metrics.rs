// Metrics hooks for the matcher.
//
// Install a global `PredictMetrics` with [`set_predict_metrics`] and every
// `MatchEngine::predict` call reports its latency, confidence and whether it
// fell back. No metrics backend is assumed.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchKind;

/// Metrics observer for predictions.
pub trait PredictMetrics: Send + Sync {
    /// Record one prediction. `fallback` is true when the input came back
    /// unchanged.
    fn record_predict(&self, kind: MatchKind, latency: Duration, confidence: f32, fallback: bool);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PredictMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn PredictMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn PredictMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global prediction metrics recorder.
pub fn set_predict_metrics(recorder: Option<Arc<dyn PredictMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
