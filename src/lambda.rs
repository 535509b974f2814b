#[cfg(feature = "lambda")]
use anyhow::Context;
#[cfg(feature = "lambda")]
use aws_howto::adapters::{
    DynamoLabelStore, GeospatialEnrichment, RekognitionLabels, S3ObjectStore, SageMakerCallback,
    SnsNotifier,
};
#[cfg(feature = "lambda")]
use aws_howto::config::AwsSettings;
#[cfg(feature = "lambda")]
use aws_howto::core::{events, InboundEvent};
#[cfg(feature = "lambda")]
use aws_howto::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use aws_howto::{PhotoAssetConfig, PhotoAssets, PipelineCallbacks, SnippetError};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
type PhotoAssetHandler =
    PhotoAssets<RekognitionLabels, DynamoLabelStore, S3ObjectStore, SnsNotifier>;

#[cfg(feature = "lambda")]
type PipelineHandler = PipelineCallbacks<SageMakerCallback, GeospatialEnrichment>;

#[cfg(feature = "lambda")]
struct Handlers {
    /// Absent when the function is not deployed with the photo asset environment.
    photo_assets: Option<PhotoAssetHandler>,
    pipeline: PipelineHandler,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Value>, handlers: &Handlers) -> Result<Value, Error> {
    tracing::info!(request_id = %event.context.request_id, "handling event");

    let inbound = match events::classify(&event.payload) {
        Ok(inbound) => inbound,
        Err(err) => {
            tracing::warn!(error = %err, "could not classify event");
            return match events::api_rejection(&event.payload, &err) {
                Some(response) => Ok(serde_json::to_value(response)?),
                None => Err(err.into()),
            };
        }
    };
    // Route by event family
    let result = match inbound {
        InboundEvent::PipelineMessages(_) | InboundEvent::JobStatus { .. } => {
            handlers.pipeline.handle(inbound).await
        }
        other => match &handlers.photo_assets {
            Some(photo_assets) => photo_assets.handle(other).await,
            None => Err(SnippetError::config(
                "photo asset event received but STORAGE_BUCKET_NAME and friends are not set",
            )),
        },
    };

    result.map_err(|e| {
        tracing::error!(error = %e, category = ?e.category(), "invocation failed");
        Box::new(e) as Error
    })
}

#[cfg(feature = "lambda")]
async fn build_handlers() -> Result<Handlers, Error> {
    let sdk_config = aws_howto::aws::load_sdk_config(&AwsSettings::default()).await;

    let photo_assets = match PhotoAssetConfig::from_env() {
        Ok(config) => {
            config
                .validate()
                .context("invalid photo asset configuration")?;
            Some(PhotoAssets::new(
                RekognitionLabels::new(aws_sdk_rekognition::Client::new(&sdk_config)),
                DynamoLabelStore::new(
                    aws_sdk_dynamodb::Client::new(&sdk_config),
                    config.labels_table,
                ),
                S3ObjectStore::new(aws_howto::aws::s3_client(&sdk_config)),
                SnsNotifier::new(
                    aws_sdk_sns::Client::new(&sdk_config),
                    config.notification_topic,
                ),
                config.storage_bucket,
                config.working_bucket,
            ))
        }
        Err(e) => {
            tracing::warn!(reason = %e, "photo asset actions disabled");
            None
        }
    };

    // Pipeline callbacks need no environment beyond credentials
    let pipeline = PipelineCallbacks::new(
        SageMakerCallback::new(aws_sdk_sagemaker::Client::new(&sdk_config)),
        GeospatialEnrichment::new(aws_sdk_sagemakergeospatial::Client::new(&sdk_config)),
    );

    Ok(Handlers {
        photo_assets,
        pipeline,
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let handlers = build_handlers().await?;
    run(service_fn(|event| function_handler(event, &handlers))).await
}
