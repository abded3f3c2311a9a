// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Background analysis jobs.
//!
//! Each request runs on its own thread and reports back over a channel that the event loop
//! drains. Only the most recently started job is accepted; older outcomes are dropped.

use std::{
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, Sender, TryRecvError},
        Arc,
    },
    thread,
};

use crate::analyze::{AnalysisProvider, AnalyzeError};
use crate::model::AnalysisResult;

pub(crate) type JobId = u64;

#[derive(Debug)]
pub(crate) struct JobOutcome {
    pub(crate) id: JobId,
    pub(crate) path: PathBuf,
    pub(crate) result: Result<AnalysisResult, AnalyzeError>,
}

pub(crate) struct AnalysisJobs {
    provider: Arc<dyn AnalysisProvider>,
    next_id: JobId,
    pending: Option<(JobId, PathBuf)>,
    tx: Sender<JobOutcome>,
    rx: Receiver<JobOutcome>,
}

impl AnalysisJobs {
    pub(crate) fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { provider, next_id: 0, pending: None, tx, rx }
    }

    /// Starts analysing `path`, superseding any job still in flight.
    pub(crate) fn start(&mut self, path: PathBuf) -> JobId {
        self.next_id += 1;
        let id = self.next_id;
        if let Some((old, old_path)) = self.pending.replace((id, path.clone())) {
            tracing::info!(job = old, path = %old_path.display(), "analysis superseded");
        }
        tracing::info!(job = id, path = %path.display(), "analysis started");

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = provider.analyze(&path);
            // The receiver only goes away when the app shuts down.
            let _ = tx.send(JobOutcome { id, path, result });
        });
        id
    }

    pub(crate) fn pending_path(&self) -> Option<&PathBuf> {
        self.pending.as_ref().map(|(_, path)| path)
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the outcome of the current job once it is done. Never blocks.
    pub(crate) fn poll(&mut self) -> Option<JobOutcome> {
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => {
                    if let Some(accepted) = self.accept(outcome) {
                        return Some(accepted);
                    }
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return None,
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn wait(&mut self, timeout: std::time::Duration) -> Option<JobOutcome> {
        let deadline = std::time::Instant::now() + timeout;
        while let Some(left) = deadline.checked_duration_since(std::time::Instant::now()) {
            let outcome = self.rx.recv_timeout(left).ok()?;
            if let Some(accepted) = self.accept(outcome) {
                return Some(accepted);
            }
        }
        None
    }

    fn accept(&mut self, outcome: JobOutcome) -> Option<JobOutcome> {
        match self.pending {
            Some((id, _)) if id == outcome.id => {
                self.pending = None;
                Some(outcome)
            }
            _ => {
                tracing::debug!(job = outcome.id, "dropping stale analysis outcome");
                None
            }
        }
    }
}
