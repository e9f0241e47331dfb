use super::dto::ProcessVideoRequest;
use crate::modules::pipeline::error::PipelineError;
use crate::modules::pipeline::stage::{Stage, bounded};
use crate::state::AppState;
use tracing::info;

pub struct VideoService;

impl VideoService {
    /// Transcodes one local file into another. No object store, no cleanup.
    pub async fn process(state: AppState, req: ProcessVideoRequest) -> Result<(), PipelineError> {
        req.check()?;

        info!("Input file path: {}", req.input_path().display());
        info!("Output file path: {}", req.output_path().display());

        bounded(
            state.config.timeouts.transcode,
            state.transcoder.transcode(req.input_path(), req.output_path()),
        )
        .await
        .map_err(|e| PipelineError::failed(Stage::Transcode, e))
    }
}
