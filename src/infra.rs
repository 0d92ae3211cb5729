use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::assessment::AnalysisPipeline;

/// Shared per-process state handed to the HTTP handlers. The pipeline is
/// stateless; cloning the state only bumps reference counts.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) pipeline: Arc<AnalysisPipeline>,
}
