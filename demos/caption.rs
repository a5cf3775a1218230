use std::env;
use std::error::Error;

use caption_studio::{CaptionEngine, CaptionParameters, CaptionSource, ImageInput, ModelClient};
use colored::*;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let model = ModelClient::from_env("gemini-1.5-flash")?;
    let engine = CaptionEngine::new(model);

    // An image path may be passed as the first argument; without one the
    // caption is written from the highlight text alone.
    let source = match env::args().nth(1) {
        Some(path) => {
            println!("{} {}", "Analyzing image:".bright_blue().bold(), path);
            CaptionSource::Image(ImageInput::from_path(path)?)
        }
        None => {
            println!(
                "{}",
                "No image supplied; captioning from the highlight text.".yellow()
            );
            CaptionSource::Highlight
        }
    };

    let params = CaptionParameters::builder()
        .target_audience("first-time homebuyers in their 30s")
        .interests("finding a dream home in a safe neighborhood")
        .content("unique features and modern amenities")
        .tone("inspirational and encouraging")
        .reason("show that luxury can be accessible")
        .call_to_action("book a tour")
        .build();

    let output = engine.generate(source, &params).await?;

    if let Some(description) = &output.description {
        println!("\n{}", "Image Analysis:".bright_blue().bold());
        println!("{description}");
    }
    println!("\n{}", "Generated Caption:".bright_green().bold());
    println!("{}", output.caption);

    Ok(())
}
