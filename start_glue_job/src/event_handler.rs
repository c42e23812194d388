use std::fmt;

use aws_lambda_events::event::s3::S3Event;
use aws_sdk_glue::Client as GlueClient;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

use crate::config::HandlerConfig;

/// Location of the object whose creation triggered the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TriggeringObject {
    pub(crate) bucket: String,
    pub(crate) key: String,
}

impl fmt::Display for TriggeringObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Mirrors the Glue `StartJobRun` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct StartJobRunResponse {
    #[serde(rename = "JobRunId", skip_serializing_if = "Option::is_none")]
    pub(crate) job_run_id: Option<String>,
}

/// Only the first record is consulted; any others are ignored.
fn triggering_object(event: &S3Event) -> Result<TriggeringObject, Error> {
    let record = event
        .records
        .first()
        .ok_or_else(|| Error::from("No records found in S3 event"))?;
    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .ok_or_else(|| Error::from("No bucket name found in S3 event"))?;
    let key = record
        .s3
        .object
        .key
        .clone()
        .ok_or_else(|| Error::from("No object key found in S3 event"))?;
    Ok(TriggeringObject { bucket, key })
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    glue_client: &GlueClient,
    config: &HandlerConfig,
) -> Result<StartJobRunResponse, Error> {
    let object = triggering_object(&event.payload)?;
    tracing::info!("Starting Glue job {} for {}", config.job_name, object);
    let output = glue_client
        .start_job_run()
        .job_name(&config.job_name)
        .send()
        .await?;
    Ok(StartJobRunResponse {
        job_run_id: output.job_run_id().map(str::to_owned),
    })
}
