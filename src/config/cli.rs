use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "aws-howto")]
#[command(about = "Short, standalone examples of AWS SDK calls")]
pub struct CliConfig {
    #[arg(long, global = true, help = "AWS region, overrides the settings file")]
    pub region: Option<String>,

    #[arg(long, global = true, help = "Named profile from the shared AWS config")]
    pub profile: Option<String>,

    #[arg(long, global = true, help = "Send requests to this endpoint, e.g. LocalStack")]
    pub endpoint_url: Option<String>,

    #[arg(long = "config", global = true, help = "Settings file (TOML)")]
    pub config_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Amazon Comprehend
    #[command(subcommand)]
    Comprehend(ComprehendCommand),
    /// Amazon Kinesis Data Streams
    #[command(subcommand)]
    Kinesis(KinesisCommand),
    /// Amazon OpenSearch Service
    #[command(subcommand)]
    Opensearch(OpensearchCommand),
    /// Amazon RDS
    #[command(subcommand)]
    Rds(RdsCommand),
    /// Amazon Translate
    #[command(subcommand)]
    Translate(TranslateCommand),
    /// Amazon DynamoDB
    #[command(subcommand)]
    Dynamodb(DynamodbCommand),
    /// Amazon S3
    #[command(subcommand)]
    S3(S3Command),
    /// AWS Lambda
    #[command(subcommand)]
    Lambda(LambdaCommand),
    /// AWS IAM
    #[command(subcommand)]
    Iam(IamCommand),
    /// Amazon SES (v2)
    #[command(subcommand)]
    Ses(SesCommand),
    /// Amazon Textract
    #[command(subcommand)]
    Textract(TextractCommand),
    /// Amazon Bedrock Runtime
    #[command(subcommand)]
    Bedrock(BedrockCommand),
    /// Amazon Location Service
    #[command(subcommand)]
    Location(LocationCommand),
    /// Amazon SQS
    #[command(subcommand)]
    Sqs(SqsCommand),
    /// Amazon CloudWatch
    #[command(subcommand)]
    Cloudwatch(CloudwatchCommand),
    /// Amazon Cognito user pools
    #[command(subcommand)]
    Cognito(CognitoCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ComprehendCommand {
    DetectEntities {
        text: String,
        #[arg(default_value = "en")]
        language_code: String,
    },
    DetectDominantLanguage {
        text: String,
    },
    DetectSentiment {
        text: String,
        #[arg(default_value = "en")]
        language_code: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum KinesisCommand {
    ListStreams,
    PutRecord {
        stream_name: String,
        partition_key: String,
        data: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum OpensearchCommand {
    CreateDomain {
        domain_name: String,
        #[arg(default_value = "OpenSearch_2.11")]
        engine_version: String,
    },
    ListDomainNames,
    DeleteDomain {
        domain_name: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RdsCommand {
    DescribeDbInstances {
        instance_id: Option<String>,
    },
    CreateDbSnapshot {
        instance_id: String,
        snapshot_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TranslateCommand {
    TranslateText {
        text: String,
        source_language_code: String,
        target_language_code: String,
    },
    StartJob(StartTranslationJobArgs),
    DescribeJob {
        job_id: String,
    },
    WaitForJob {
        job_id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct StartTranslationJobArgs {
    pub job_name: String,
    pub input_s3_uri: String,
    pub output_s3_uri: String,
    pub data_access_role_arn: String,
    pub source_language_code: String,
    #[arg(value_delimiter = ',', required = true)]
    pub target_language_codes: Vec<String>,
    #[arg(long, default_value = "text/plain")]
    pub content_type: String,
    #[arg(long, help = "Poll the job until it finishes")]
    pub wait: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum DynamodbCommand {
    ListTables,
    PutItem {
        table: String,
        #[arg(help = "Item as a JSON object")]
        item: String,
    },
    GetItem {
        table: String,
        key_name: String,
        key_value: String,
    },
    DeleteItem {
        table: String,
        key_name: String,
        key_value: String,
    },
    LoadItems {
        table: String,
        #[arg(help = "A .json array of objects or a .csv file with a header row")]
        items_file: PathBuf,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum S3Command {
    ListBuckets,
    ListObjects {
        bucket: String,
        prefix: Option<String>,
    },
    Upload {
        bucket: String,
        key: String,
        path: PathBuf,
    },
    Download {
        bucket: String,
        key: String,
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum LambdaCommand {
    ListFunctions,
    Invoke {
        function_name: String,
        #[arg(default_value = "{}")]
        payload: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum IamCommand {
    ListUsers,
    CreateUser { user_name: String },
    DeleteUser { user_name: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SesCommand {
    SendEmail {
        from: String,
        to: String,
        subject: String,
        text: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TextractCommand {
    DetectDocumentText {
        #[arg(long, conflicts_with_all = ["bucket", "key"])]
        file: Option<PathBuf>,
        #[arg(long, requires = "key")]
        bucket: Option<String>,
        #[arg(long, requires = "bucket")]
        key: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BedrockCommand {
    Converse {
        prompt: String,
        #[arg(long, default_value = "anthropic.claude-3-haiku-20240307-v1:0")]
        model_id: String,
        #[arg(long)]
        max_tokens: Option<i32>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum LocationCommand {
    CreateMap {
        map_name: String,
        #[arg(default_value = "VectorEsriNavigation")]
        style: String,
    },
    ListMaps,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SqsCommand {
    ListQueues {
        prefix: Option<String>,
    },
    SendMessage {
        queue_url: String,
        body: String,
    },
    ReceiveMessages {
        queue_url: String,
        #[arg(default_value = "10")]
        max_messages: i32,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CloudwatchCommand {
    ListMetrics { namespace: Option<String> },
    DescribeAlarms,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CognitoCommand {
    ListUserPools {
        #[arg(default_value = "20")]
        max_results: i32,
    },
    ListUsers {
        user_pool_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::try_parse_from([
            "aws-howto",
            "translate",
            "wait-for-job",
            "job-123",
            "--region",
            "us-west-2",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert!(config.verbose);
        assert!(matches!(
            config.command,
            Command::Translate(TranslateCommand::WaitForJob { ref job_id }) if job_id == "job-123"
        ));
    }

    #[test]
    fn test_target_languages_are_comma_separated() {
        let config = CliConfig::try_parse_from([
            "aws-howto",
            "translate",
            "start-job",
            "docs",
            "s3://in/",
            "s3://out/",
            "arn:aws:iam::123456789012:role/translate",
            "en",
            "fr,de",
            "--wait",
        ])
        .unwrap();
        let Command::Translate(TranslateCommand::StartJob(args)) = config.command else {
            panic!("expected start-job");
        };
        assert_eq!(args.target_language_codes, vec!["fr", "de"]);
        assert!(args.wait);
        assert_eq!(args.content_type, "text/plain");
    }

    #[test]
    fn test_argument_count_is_checked() {
        assert!(CliConfig::try_parse_from(["aws-howto", "kinesis", "put-record", "stream"]).is_err());
        assert!(CliConfig::try_parse_from(["aws-howto", "s3", "list-buckets"]).is_ok());
    }

    #[test]
    fn test_textract_source_flags() {
        assert!(CliConfig::try_parse_from([
            "aws-howto",
            "textract",
            "detect-document-text",
            "--bucket",
            "docs"
        ])
        .is_err());
        assert!(CliConfig::try_parse_from([
            "aws-howto",
            "textract",
            "detect-document-text",
            "--file",
            "scan.png"
        ])
        .is_ok());
    }
}
