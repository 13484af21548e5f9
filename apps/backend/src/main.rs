#[tokio::main]
async fn main() -> anyhow::Result<()> {
    farsi_practice_backend::run().await
}
