//! Forwarding listing details to the brochure back end.
//!
//! Two fixed templates live behind the same service. Both accept the same
//! eight-field JSON object and answer with either JSON or plain text, which
//! is passed through to the caller untouched.

use serde::Serialize;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::error::Error;

/// Default deployment of the listing back end.
const DEFAULT_BASE_URL: &str = "https://listing-be-ihy4.onrender.com";

/// The eight listing fields forwarded to a brochure template.
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(doc)]
pub struct ListingForm {
    /// Neighborhood or address line.
    #[builder(setter(into))]
    pub location: String,
    /// Headline feature of the listing.
    #[builder(setter(into))]
    pub highlight: String,
    /// Number of bedrooms.
    #[builder(setter(into))]
    pub beds: String,
    /// Number of bathrooms.
    #[builder(setter(into))]
    pub baths: String,
    /// Floor area in square feet.
    #[builder(setter(into))]
    pub sqft: String,
    /// Contact phone number.
    #[builder(setter(into))]
    pub phone: String,
    /// Contact email address.
    #[builder(setter(into))]
    pub email: String,
    /// URL of the listing photo.
    #[builder(setter(into))]
    pub image_url: String,
}

/// Which of the two brochure templates receives the update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingDesign {
    /// The first template.
    First,
    /// The second template.
    Second,
}

impl ListingDesign {
    fn slot(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// Reply from a listing endpoint, passed through unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingResponse {
    /// The body, parsed as JSON.
    Json(serde_json::Value),
    /// The raw body, when it is not valid JSON.
    Text(String),
}

impl ListingResponse {
    fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body),
        }
    }
}

/// Client for the two listing-update endpoints.
#[derive(Debug, Clone)]
pub struct ListingClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for ListingClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ListingClient {
    /// Creates a client against the given deployment of the listing service.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, design: ListingDesign) -> String {
        format!("{}/update-listing/{}", self.base_url, design.slot())
    }

    /// Posts the form to the selected template's endpoint.
    ///
    /// The server's reply is handed back as-is: JSON when the body parses,
    /// the raw text otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP round trip itself fails.
    pub async fn update(
        &self,
        design: ListingDesign,
        form: &ListingForm,
    ) -> Result<ListingResponse, Error> {
        let url = self.endpoint(design);
        debug!(%url, "forwarding listing update");

        let response = self.client.post(&url).json(form).send().await?;
        let body = response.text().await?;
        Ok(ListingResponse::from_body(body))
    }
}
