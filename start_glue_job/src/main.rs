use aws_config::BehaviorVersion;
use aws_sdk_glue::Client as GlueClient;
use lambda_runtime::{run, service_fn, tracing, Error};
mod config;
mod event_handler;
use config::HandlerConfig;
use event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt().json().init();
    let config = HandlerConfig::from_env()?;
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let glue_client = GlueClient::new(&shared_config);
    run(service_fn(|event| function_handler(event, &glue_client, &config))).await
}
