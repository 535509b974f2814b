//! One module per AWS service. Each operation builds a request, sends it and prints the
//! interesting part of the response.

pub mod bedrock;
pub mod cloudwatch;
pub mod cognito;
pub mod comprehend;
pub mod dynamodb;
pub mod iam;
pub mod kinesis;
pub mod lambda;
pub mod location;
pub mod opensearch;
pub mod rds;
pub mod s3;
pub mod ses;
pub mod sqs;
pub mod textract;
pub mod translate;
