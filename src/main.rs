use anyhow::Result;
use tutor::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
