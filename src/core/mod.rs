pub mod batch;
pub mod events;
pub mod items;
pub mod photo_assets;
pub mod pipeline_callback;
pub mod poll;

pub use crate::domain::model::{
    ApiResponse, BatchPolicy, BatchReport, EnrichmentJobConfig, ExportJobConfig,
    GeospatialJobState, InboundEvent, JobStatus, LabelCount, PipelineArguments, PipelineMessage,
    PollPolicy, S3ObjectRef, WriteItem, DYNAMODB_BATCH_LIMIT,
};
pub use crate::domain::ports::{
    BatchWriter, GeospatialJobs, JobStatusSource, LabelDetector, LabelStore, Notifier,
    ObjectStore, PipelineCallback,
};
pub use crate::utils::error::Result;
