use crate::config::cli::{
    BedrockCommand, CloudwatchCommand, CognitoCommand, Command, ComprehendCommand,
    DynamodbCommand, IamCommand, KinesisCommand, LambdaCommand, LocationCommand,
    OpensearchCommand, RdsCommand, S3Command, SesCommand, SqsCommand, TextractCommand,
    TranslateCommand,
};
use crate::config::Settings;
use crate::snippets::textract::DocumentSource;
use crate::snippets::translate::TranslationJobRequest;
use crate::snippets::*;
use crate::utils::error::{Result, SnippetError};
use aws_config::SdkConfig;

/// Builds the client for the command's service and runs the one snippet it names.
pub async fn run(command: Command, sdk_config: &SdkConfig, settings: &Settings) -> Result<()> {
    match command {
        Command::Comprehend(command) => {
            let client = aws_sdk_comprehend::Client::new(sdk_config);
            match command {
                ComprehendCommand::DetectEntities {
                    text,
                    language_code,
                } => comprehend::detect_entities(&client, &text, &language_code).await,
                ComprehendCommand::DetectDominantLanguage { text } => {
                    comprehend::detect_dominant_language(&client, &text).await
                }
                ComprehendCommand::DetectSentiment {
                    text,
                    language_code,
                } => comprehend::detect_sentiment(&client, &text, &language_code).await,
            }
        }
        Command::Kinesis(command) => {
            let client = aws_sdk_kinesis::Client::new(sdk_config);
            match command {
                KinesisCommand::ListStreams => kinesis::list_streams(&client).await,
                KinesisCommand::PutRecord {
                    stream_name,
                    partition_key,
                    data,
                } => kinesis::put_record(&client, &stream_name, &partition_key, &data).await,
            }
        }
        Command::Opensearch(command) => {
            let client = aws_sdk_opensearch::Client::new(sdk_config);
            match command {
                OpensearchCommand::CreateDomain {
                    domain_name,
                    engine_version,
                } => opensearch::create_domain(&client, &domain_name, &engine_version).await,
                OpensearchCommand::ListDomainNames => opensearch::list_domain_names(&client).await,
                OpensearchCommand::DeleteDomain { domain_name } => {
                    opensearch::delete_domain(&client, &domain_name).await
                }
            }
        }
        Command::Rds(command) => {
            let client = aws_sdk_rds::Client::new(sdk_config);
            match command {
                RdsCommand::DescribeDbInstances { instance_id } => {
                    rds::describe_db_instances(&client, instance_id.as_deref()).await
                }
                RdsCommand::CreateDbSnapshot {
                    instance_id,
                    snapshot_id,
                } => rds::create_db_snapshot(&client, &instance_id, &snapshot_id).await,
            }
        }
        Command::Translate(command) => run_translate(command, sdk_config, settings).await,
        Command::Dynamodb(command) => {
            let client = aws_sdk_dynamodb::Client::new(sdk_config);
            match command {
                DynamodbCommand::ListTables => dynamodb::list_tables(&client).await,
                DynamodbCommand::PutItem { table, item } => {
                    dynamodb::put_item(&client, &table, &item).await
                }
                DynamodbCommand::GetItem {
                    table,
                    key_name,
                    key_value,
                } => dynamodb::get_item(&client, &table, &key_name, &key_value).await,
                DynamodbCommand::DeleteItem {
                    table,
                    key_name,
                    key_value,
                } => dynamodb::delete_item(&client, &table, &key_name, &key_value).await,
                DynamodbCommand::LoadItems { table, items_file } => {
                    dynamodb::load_items(&client, &table, &items_file, &settings.batch_policy())
                        .await
                        .map(|_| ())
                }
            }
        }
        Command::S3(command) => {
            let client = crate::aws::s3_client(sdk_config);
            match command {
                S3Command::ListBuckets => s3::list_buckets(&client).await,
                S3Command::ListObjects { bucket, prefix } => {
                    s3::list_objects(&client, &bucket, prefix.as_deref()).await
                }
                S3Command::Upload { bucket, key, path } => {
                    s3::upload_object(&client, &bucket, &key, &path).await
                }
                S3Command::Download { bucket, key, path } => {
                    s3::download_object(&client, &bucket, &key, &path).await
                }
            }
        }
        Command::Lambda(command) => {
            let client = aws_sdk_lambda::Client::new(sdk_config);
            match command {
                LambdaCommand::ListFunctions => lambda::list_functions(&client).await,
                LambdaCommand::Invoke {
                    function_name,
                    payload,
                } => lambda::invoke_function(&client, &function_name, &payload).await,
            }
        }
        Command::Iam(command) => {
            let client = aws_sdk_iam::Client::new(sdk_config);
            match command {
                IamCommand::ListUsers => iam::list_users(&client).await,
                IamCommand::CreateUser { user_name } => iam::create_user(&client, &user_name).await,
                IamCommand::DeleteUser { user_name } => iam::delete_user(&client, &user_name).await,
            }
        }
        Command::Ses(SesCommand::SendEmail {
            from,
            to,
            subject,
            text,
        }) => {
            let client = aws_sdk_sesv2::Client::new(sdk_config);
            ses::send_email(&client, &from, &to, &subject, &text).await
        }
        Command::Textract(TextractCommand::DetectDocumentText { file, bucket, key }) => {
            let client = aws_sdk_textract::Client::new(sdk_config);
            let source = match (&file, &bucket, &key) {
                (Some(path), _, _) => DocumentSource::File(path),
                (None, Some(bucket), Some(key)) => DocumentSource::S3 { bucket, key },
                _ => {
                    return Err(SnippetError::MissingConfigError {
                        field: "--file or --bucket/--key".to_string(),
                    })
                }
            };
            textract::detect_document_text(&client, source).await
        }
        Command::Bedrock(BedrockCommand::Converse {
            prompt,
            model_id,
            max_tokens,
        }) => {
            let client = aws_sdk_bedrockruntime::Client::new(sdk_config);
            bedrock::converse(&client, &model_id, &prompt, max_tokens)
                .await
                .map(|_| ())
        }
        Command::Location(command) => {
            let client = aws_sdk_location::Client::new(sdk_config);
            match command {
                LocationCommand::CreateMap { map_name, style } => {
                    location::create_map(&client, &map_name, &style).await
                }
                LocationCommand::ListMaps => location::list_maps(&client).await,
            }
        }
        Command::Sqs(command) => {
            let client = aws_sdk_sqs::Client::new(sdk_config);
            match command {
                SqsCommand::ListQueues { prefix } => {
                    sqs::list_queues(&client, prefix.as_deref()).await
                }
                SqsCommand::SendMessage { queue_url, body } => {
                    sqs::send_message(&client, &queue_url, &body).await
                }
                SqsCommand::ReceiveMessages {
                    queue_url,
                    max_messages,
                } => sqs::receive_messages(&client, &queue_url, max_messages).await,
            }
        }
        Command::Cloudwatch(command) => {
            let client = aws_sdk_cloudwatch::Client::new(sdk_config);
            match command {
                CloudwatchCommand::ListMetrics { namespace } => {
                    cloudwatch::list_metrics(&client, namespace.as_deref()).await
                }
                CloudwatchCommand::DescribeAlarms => cloudwatch::describe_alarms(&client).await,
            }
        }
        Command::Cognito(command) => {
            let client = aws_sdk_cognitoidentityprovider::Client::new(sdk_config);
            match command {
                CognitoCommand::ListUserPools { max_results } => {
                    cognito::list_user_pools(&client, max_results).await
                }
                CognitoCommand::ListUsers { user_pool_id } => {
                    cognito::list_users(&client, &user_pool_id).await
                }
            }
        }
    }
}

async fn run_translate(
    command: TranslateCommand,
    sdk_config: &SdkConfig,
    settings: &Settings,
) -> Result<()> {
    let client = aws_sdk_translate::Client::new(sdk_config);
    match command {
        TranslateCommand::TranslateText {
            text,
            source_language_code,
            target_language_code,
        } => {
            translate::translate_text(&client, &text, &source_language_code, &target_language_code)
                .await
        }
        TranslateCommand::StartJob(args) => {
            let request = TranslationJobRequest {
                job_name: args.job_name,
                input_s3_uri: args.input_s3_uri,
                output_s3_uri: args.output_s3_uri,
                content_type: args.content_type,
                data_access_role_arn: args.data_access_role_arn,
                source_language_code: args.source_language_code,
                target_language_codes: args.target_language_codes,
            };
            let job_id = translate::start_translation_job(&client, &request).await?;
            if args.wait {
                translate::wait_for_translation_job(&client, &job_id, &settings.poll_policy())
                    .await?;
            }
            Ok(())
        }
        TranslateCommand::DescribeJob { job_id } => {
            translate::describe_translation_job(&client, &job_id).await
        }
        TranslateCommand::WaitForJob { job_id } => {
            translate::wait_for_translation_job(&client, &job_id, &settings.poll_policy())
                .await
                .map(|_| ())
        }
    }
}
