#[tokio::main]
async fn main() -> anyhow::Result<()> {
    director_suite::run().await
}
