use std::error::Error;

use caption_studio::{ListingClient, ListingDesign, ListingForm, ListingResponse};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let client = ListingClient::default();

    let form = ListingForm::builder()
        .location("Downtown")
        .highlight("CITY PARK")
        .beds("2")
        .baths("2")
        .sqft("1500")
        .phone("+123 456 7890")
        .email("agent@example.com")
        .image_url("https://t4.ftcdn.net/jpg/02/87/98/61/360_F_287986158_2Tz2w7QKcgmbpecZZzveGUdN9RNPB3c4.jpg")
        .build();

    for design in [ListingDesign::First, ListingDesign::Second] {
        println!("{} {:?}", "Updating template".bright_blue().bold(), design);
        match client.update(design, &form).await? {
            ListingResponse::Json(value) => {
                println!("{}", serde_json::to_string_pretty(&value)?)
            }
            ListingResponse::Text(text) => println!("{text}"),
        }
    }

    Ok(())
}
