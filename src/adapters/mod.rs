// Adapters layer: SDK-backed implementations of the domain ports.

pub mod dynamodb;
pub mod rekognition;
pub mod s3;
pub mod sagemaker;
pub mod sns;
pub mod translate;

pub use dynamodb::{DynamoBatchWriter, DynamoLabelStore};
pub use rekognition::RekognitionLabels;
pub use s3::S3ObjectStore;
pub use sagemaker::{GeospatialEnrichment, SageMakerCallback};
pub use sns::SnsNotifier;
pub use translate::TranslateJobStatus;
