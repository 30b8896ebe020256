use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    folio::cli::run().await
}
