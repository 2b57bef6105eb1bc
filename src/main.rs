use anyhow::Result;
use clinic_agenda::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
