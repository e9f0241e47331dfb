use crate::modules::pipeline::error::ClientError;
use serde::Deserialize;
use std::path::Path;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessVideoRequest {
    #[serde(default)]
    #[validate(
        required(message = "Input file path is required"),
        length(min = 1, message = "Input file path is required")
    )]
    #[schema(example = "./raw-videos/clip1.mp4")]
    pub input_file_path: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Output file path is required"),
        length(min = 1, message = "Output file path is required")
    )]
    #[schema(example = "./processed-videos/clip1-360p.mp4")]
    pub output_file_path: Option<String>,
}

impl ProcessVideoRequest {
    pub fn check(&self) -> Result<(), ClientError> {
        self.validate()
            .map_err(|e| ClientError::from_validation(&e, &["input_file_path", "output_file_path"]))
    }

    pub fn input_path(&self) -> &Path {
        Path::new(self.input_file_path.as_deref().unwrap_or_default())
    }

    pub fn output_path(&self) -> &Path {
        Path::new(self.output_file_path.as_deref().unwrap_or_default())
    }
}
