use super::dto::PipelineRequest;
use serde::{Deserialize, Serialize};

/// Notification that a raw object is ready for processing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineJob {
    #[serde(alias = "name")]
    pub raw_object_name: String,
    #[serde(default)]
    pub processed_object_name: Option<String>,
}

impl PipelineJob {
    pub fn into_request(self) -> PipelineRequest {
        let processed = match self.processed_object_name {
            Some(name) => name,
            None => format!("processed-{}", self.raw_object_name),
        };
        PipelineRequest::new(&self.raw_object_name, &processed)
    }
}
