use anyhow::Result;
use demo_booking::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
