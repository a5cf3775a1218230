use anyhow::Result;
use caption_studio::{CaptionEngine, CaptionParameters, CaptionSource, ModelClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = ModelClient::from_env("gemini-1.5-flash")?;
    let engine = CaptionEngine::new(model);

    let params = CaptionParameters::builder()
        .target_audience("first-time homebuyers in their 30s")
        .interests("finding a dream home in a safe neighborhood")
        .content("unique features and modern amenities")
        .tone("inspirational and encouraging")
        .reason("show that luxury can be accessible")
        .call_to_action("book a tour")
        .build();

    let output = engine.generate(CaptionSource::Highlight, &params).await?;

    println!("Generated Caption:\n");
    println!("{}", output.caption);

    Ok(())
}
