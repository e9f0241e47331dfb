use super::stage::{Stage, StageError};
use crate::common::validation::first_error;
use crate::infrastructure::staging::cleanup::CleanupError;
use thiserror::Error;
use validator::ValidationErrors;

/// A request rejected before any work started.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ClientError(pub String);

impl ClientError {
    pub fn from_validation(errors: &ValidationErrors, order: &[&str]) -> Self {
        Self(first_error(errors, order))
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// `cleanup` holds secondary failures from removing staged files after `source`.
    #[error("{stage} failed: {source}{}", cleanup_note(.cleanup))]
    Failed {
        stage: Stage,
        source: StageError,
        cleanup: Vec<CleanupError>,
    },
}

impl PipelineError {
    pub fn failed(stage: Stage, source: StageError) -> Self {
        Self::Failed {
            stage,
            source,
            cleanup: Vec::new(),
        }
    }
}

fn cleanup_note(cleanup: &[CleanupError]) -> String {
    if cleanup.is_empty() {
        return String::new();
    }

    let details: Vec<String> = cleanup.iter().map(ToString::to_string).collect();
    format!(" (cleanup also failed: {})", details.join("; "))
}
