use super::dto::PipelineRequest;
use super::error::PipelineError;
use super::stage::{Stage, StageError, bounded};
use super::state::PipelineState;
use crate::config::settings::StageTimeouts;
use crate::infrastructure::staging::StagingDirs;
use crate::infrastructure::staging::cleanup::{self, CleanupError};
use crate::infrastructure::staging::locks::{NameLocks, processed_key, raw_key};
use crate::infrastructure::storage::service::StorageService;
use crate::infrastructure::transcoder::Transcoder;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

/// Download → transcode → upload → cleanup for one raw object.
pub struct Pipeline {
    storage: StorageService,
    transcoder: Arc<dyn Transcoder>,
    staging: StagingDirs,
    timeouts: StageTimeouts,
    locks: NameLocks,
}

/// Bookkeeping for a single run.
struct PipelineRun {
    state: PipelineState,
    raw_staged: bool,
    processed_staged: bool,
}

impl PipelineRun {
    fn new() -> Self {
        Self {
            state: PipelineState::Received,
            raw_staged: false,
            processed_staged: false,
        }
    }

    /// The next stage to perform, or `None` once the run is terminal.
    fn advance(&mut self) -> Option<Stage> {
        if self.state.is_terminal() {
            return None;
        }
        let stage = self.state.next_stage();
        if stage.is_none() {
            self.state = PipelineState::Done;
        }
        stage
    }

    fn begin(&mut self, stage: Stage) {
        match stage {
            Stage::Download => self.raw_staged = true,
            Stage::Transcode => self.processed_staged = true,
            _ => {}
        }
    }

    fn complete(&mut self, stage: Stage) {
        self.settle(stage);
        self.state = PipelineState::after(stage);
        info!(state = ?self.state, "✅ {} done", stage);
    }

    fn fail(&mut self, stage: Stage) {
        // A failed delete is not retried by the failure cleanup.
        self.settle(stage);
        self.state = PipelineState::Failed(stage);
    }

    fn settle(&mut self, stage: Stage) {
        match stage {
            Stage::CleanRaw => self.raw_staged = false,
            Stage::CleanProcessed => self.processed_staged = false,
            _ => {}
        }
    }
}

impl Pipeline {
    pub fn new(
        storage: StorageService,
        transcoder: Arc<dyn Transcoder>,
        staging: StagingDirs,
        timeouts: StageTimeouts,
    ) -> Self {
        Self {
            storage,
            transcoder,
            staging,
            timeouts,
            locks: NameLocks::new(),
        }
    }

    /// Processes `raw_object_name` into `processed_object_name`.
    ///
    /// The first failing stage ends the run. Whatever the run had staged
    /// locally is then removed on a best-effort basis; delete failures on
    /// that path are attached to the error without replacing its cause.
    pub async fn run(&self, raw_object_name: &str, processed_object_name: &str) -> Result<(), PipelineError> {
        let request = PipelineRequest::new(raw_object_name, processed_object_name);
        request.check()?;

        let span = info_span!(
            "pipeline",
            run_id = %Uuid::new_v4(),
            raw = %request.raw_object_name,
            processed = %request.processed_object_name,
        );

        self.execute(&request).instrument(span).await
    }

    async fn execute(&self, request: &PipelineRequest) -> Result<(), PipelineError> {
        let _guard = self
            .locks
            .acquire([
                raw_key(&request.raw_object_name),
                processed_key(&request.processed_object_name),
            ])
            .await;

        info!("📦 Pipeline run received");
        let mut run = PipelineRun::new();

        while let Some(stage) = run.advance() {
            run.begin(stage);

            if let Err(source) = self.perform(stage, request).await {
                run.fail(stage);
                error!(state = ?run.state, "❌ {} failed: {}", stage, source);
                let cleanup = self.cleanup_after_failure(request, &run).await;
                return Err(PipelineError::Failed {
                    stage,
                    source,
                    cleanup,
                });
            }

            run.complete(stage);
        }

        info!(state = ?run.state, "✅ Pipeline run finished");
        Ok(())
    }

    async fn perform(&self, stage: Stage, request: &PipelineRequest) -> Result<(), StageError> {
        let raw = request.raw_object_name.as_str();
        let processed = request.processed_object_name.as_str();

        match stage {
            Stage::Download => bounded(self.timeouts.download, self.storage.download(raw)).await,
            Stage::Transcode => {
                let input = self.staging.raw_path(raw);
                let output = self.staging.processed_path(processed);
                bounded(
                    self.timeouts.transcode,
                    self.transcoder.transcode(&input, &output),
                )
                .await
            }
            Stage::Upload => bounded(self.timeouts.upload, self.storage.upload(processed)).await,
            Stage::CleanRaw => Ok(cleanup::delete_raw(&self.staging, raw).await?),
            Stage::CleanProcessed => Ok(cleanup::delete_processed(&self.staging, processed).await?),
        }
    }

    async fn cleanup_after_failure(&self, request: &PipelineRequest, run: &PipelineRun) -> Vec<CleanupError> {
        let mut targets: Vec<PathBuf> = Vec::new();
        if run.raw_staged {
            targets.push(self.staging.raw_path(&request.raw_object_name));
        }
        if run.processed_staged {
            targets.push(self.staging.processed_path(&request.processed_object_name));
        }

        let mut failures = Vec::new();
        for path in targets {
            match cleanup::delete_staged(&path).await {
                // Nothing was written before the failure.
                Ok(()) | Err(CleanupError::NotFound(_)) => {}
                Err(e) => {
                    warn!("⚠️ Could not remove staged file after failure: {}", e);
                    failures.push(e);
                }
            }
        }
        failures
    }
}
