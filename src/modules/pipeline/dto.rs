use super::error::ClientError;
use crate::common::validation::plain_file_name;
use validator::Validate;

/// Object names of one pipeline run.
#[derive(Debug, Clone, Validate)]
pub struct PipelineRequest {
    #[validate(
        length(min = 1, message = "Raw object name is required"),
        custom(function = "plain_file_name", message = "Raw object name must be a plain file name")
    )]
    pub raw_object_name: String,

    #[validate(
        length(min = 1, message = "Processed object name is required"),
        custom(function = "plain_file_name", message = "Processed object name must be a plain file name")
    )]
    pub processed_object_name: String,
}

impl PipelineRequest {
    pub fn new(raw_object_name: &str, processed_object_name: &str) -> Self {
        Self {
            raw_object_name: raw_object_name.to_string(),
            processed_object_name: processed_object_name.to_string(),
        }
    }

    pub fn check(&self) -> Result<(), ClientError> {
        self.validate().map_err(|e| {
            ClientError::from_validation(&e, &["raw_object_name", "processed_object_name"])
        })
    }
}
