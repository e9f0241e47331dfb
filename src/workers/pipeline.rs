use crate::infrastructure::queue::rabbitmq::RabbitMqService;
use crate::modules::pipeline::events::PipelineJob;
use crate::modules::pipeline::service::Pipeline;
use futures_util::StreamExt;
use lapin::options::BasicAckOptions;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Consumes pipeline jobs one at a time until the consumer stream ends.
pub async fn start_pipeline_worker(
    queue: RabbitMqService,
    queue_name: String,
    pipeline: Arc<Pipeline>,
) -> anyhow::Result<()> {
    info!("🎥 Starting Pipeline Worker...");

    let mut consumer = queue.consume(&queue_name, "pipeline_worker").await?;

    info!("🎥 Pipeline Worker listening on '{}'", queue_name);

    while let Some(delivery) = consumer.next().await {
        let delivery = match delivery {
            Ok(delivery) => delivery,
            Err(e) => {
                error!("❌ Failed to receive delivery: {}", e);
                continue;
            }
        };

        info!("📦 Received pipeline job");

        if let Err(e) = handle_payload(&pipeline, &delivery.data).await {
            error!("❌ Pipeline job failed: {:#}", e);
        }

        // Runs are never retried, so every delivery is acked.
        if let Err(e) = delivery.ack(BasicAckOptions::default()).await {
            error!("Failed to ack message: {}", e);
        }
    }

    warn!("Pipeline Worker consumer stream ended");
    Ok(())
}

pub async fn handle_payload(pipeline: &Pipeline, payload: &[u8]) -> anyhow::Result<()> {
    let job: PipelineJob = serde_json::from_slice(payload)?;
    let request = job.into_request();

    pipeline
        .run(&request.raw_object_name, &request.processed_object_name)
        .await?;

    info!(
        "✅ Job completed successfully: {} -> {}",
        request.raw_object_name, request.processed_object_name
    );
    Ok(())
}
