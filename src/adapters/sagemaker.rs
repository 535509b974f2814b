use crate::core::{
    EnrichmentJobConfig, ExportJobConfig, GeospatialJobState, GeospatialJobs, PipelineCallback,
};
use crate::utils::error::{Result, SnippetError};
use async_trait::async_trait;
use aws_sdk_sagemaker::types::OutputParameter;
use aws_sdk_sagemakergeospatial::types::{
    ExportVectorEnrichmentJobOutputConfig, ReverseGeocodingConfig,
    VectorEnrichmentJobConfig, VectorEnrichmentJobDataSourceConfigInput,
    VectorEnrichmentJobDocumentType, VectorEnrichmentJobInputConfig, VectorEnrichmentJobS3Data,
};

/// Reports callback step outcomes to a running SageMaker pipeline.
#[derive(Debug, Clone)]
pub struct SageMakerCallback {
    client: aws_sdk_sagemaker::Client,
}

impl SageMakerCallback {
    pub fn new(client: aws_sdk_sagemaker::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PipelineCallback for SageMakerCallback {
    async fn step_succeeded(&self, token: &str, outputs: &[(String, String)]) -> Result<()> {
        let mut request = self
            .client
            .send_pipeline_execution_step_success()
            .callback_token(token);
        for (name, value) in outputs {
            let parameter = OutputParameter::builder().name(name).value(value).build();
            request = request.output_parameters(parameter);
        }
        request
            .send()
            .await
            .map_err(|e| SnippetError::service("sagemaker", e))?;
        Ok(())
    }

    async fn step_failed(&self, token: &str, reason: &str) -> Result<()> {
        self.client
            .send_pipeline_execution_step_failure()
            .callback_token(token)
            .failure_reason(reason)
            .send()
            .await
            .map_err(|e| SnippetError::service("sagemaker", e))?;
        Ok(())
    }
}

/// Vector enrichment jobs in SageMaker geospatial.
#[derive(Debug, Clone)]
pub struct GeospatialEnrichment {
    client: aws_sdk_sagemakergeospatial::Client,
}

impl GeospatialEnrichment {
    pub fn new(client: aws_sdk_sagemakergeospatial::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeospatialJobs for GeospatialEnrichment {
    async fn start_enrichment_job(
        &self,
        name: &str,
        role_arn: &str,
        config: &EnrichmentJobConfig,
    ) -> Result<String> {
        let source = VectorEnrichmentJobS3Data::builder()
            .s3_uri(&config.input_s3_uri)
            .build()?;
        let input = VectorEnrichmentJobInputConfig::builder()
            .document_type(VectorEnrichmentJobDocumentType::Csv)
            .data_source_config(VectorEnrichmentJobDataSourceConfigInput::S3Data(source))
            .build()?;
        let geocoding = ReverseGeocodingConfig::builder()
            .x_attribute_name(&config.x_attribute_name)
            .y_attribute_name(&config.y_attribute_name)
            .build()?;

        let output = self
            .client
            .start_vector_enrichment_job()
            .name(name)
            .execution_role_arn(role_arn)
            .input_config(input)
            .job_config(VectorEnrichmentJobConfig::ReverseGeocodingConfig(geocoding))
            .send()
            .await
            .map_err(|e| SnippetError::service("sagemaker-geospatial", e))?;

        tracing::info!(job_arn = %output.arn(), name, "started vector enrichment job");
        Ok(output.arn().to_string())
    }

    async fn export_enrichment_job(
        &self,
        job_arn: &str,
        role_arn: &str,
        config: &ExportJobConfig,
    ) -> Result<String> {
        let destination = VectorEnrichmentJobS3Data::builder()
            .s3_uri(&config.s3_uri)
            .build()?;
        let output = self
            .client
            .export_vector_enrichment_job()
            .arn(job_arn)
            .execution_role_arn(role_arn)
            .output_config(
                ExportVectorEnrichmentJobOutputConfig::builder()
                    .s3_data(destination)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| SnippetError::service("sagemaker-geospatial", e))?;

        Ok(output.arn().to_string())
    }

    async fn job_state(&self, job_arn: &str) -> Result<GeospatialJobState> {
        let output = self
            .client
            .get_vector_enrichment_job()
            .arn(job_arn)
            .send()
            .await
            .map_err(|e| SnippetError::service("sagemaker-geospatial", e))?;

        Ok(GeospatialJobState {
            job_arn: job_arn.to_string(),
            status: output.status().as_str().to_string(),
            export_status: output.export_status().map(|status| status.as_str().to_string()),
        })
    }
}
