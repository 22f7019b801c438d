mod app;
mod batch;
mod commands;
mod config;
mod logging;
mod media;
mod transcript;
mod transcription;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    app::run().await
}
