use super::stage::Stage;

/// Progress of one pipeline run. Every state but `Done` and `Failed` has
/// exactly one stage that moves it forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    Received,
    Downloaded,
    Transcoded,
    Uploaded,
    CleanedRaw,
    CleanedProcessed,
    Done,
    Failed(Stage),
}

impl PipelineState {
    pub fn next_stage(self) -> Option<Stage> {
        match self {
            PipelineState::Received => Some(Stage::Download),
            PipelineState::Downloaded => Some(Stage::Transcode),
            PipelineState::Transcoded => Some(Stage::Upload),
            PipelineState::Uploaded => Some(Stage::CleanRaw),
            PipelineState::CleanedRaw => Some(Stage::CleanProcessed),
            PipelineState::CleanedProcessed | PipelineState::Done | PipelineState::Failed(_) => None,
        }
    }

    pub fn after(stage: Stage) -> Self {
        match stage {
            Stage::Download => PipelineState::Downloaded,
            Stage::Transcode => PipelineState::Transcoded,
            Stage::Upload => PipelineState::Uploaded,
            Stage::CleanRaw => PipelineState::CleanedRaw,
            Stage::CleanProcessed => PipelineState::CleanedProcessed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }
}
