use metrics_exporter_prometheus::PrometheusHandle;
use skillforge::intake::{ArchiveError, SubmissionArchive, SubmissionRecord};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps accepted submissions in process memory. Stands in for the durable
/// store until one is wired up; restarting the service drops the log, so the
/// emails remain the system of record.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionArchive {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionArchive for InMemorySubmissionArchive {
    fn record(&self, record: SubmissionRecord) -> Result<(), ArchiveError> {
        self.records
            .lock()
            .expect("archive mutex poisoned")
            .push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, ArchiveError> {
        let guard = self.records.lock().expect("archive mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}
