#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wintagma_backend::run().await
}
