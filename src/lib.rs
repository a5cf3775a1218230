#![deny(missing_docs)]

//! Caption generation and listing forwarding for a real-estate marketing tool.
//!
//! The heart of the crate is a two-stage pipeline: an uploaded image is
//! described through a vision-capable language-model call, and that
//! description (or the raw highlight text, when no image is supplied) is
//! woven into a marketing prompt that a second call turns into Instagram
//! caption copy. A small companion client forwards listing details to the
//! two brochure templates of the listing back end.

pub mod caption;
pub mod client;
pub mod error;
pub mod image;
pub mod listing;
pub mod models;

pub use caption::{CaptionEngine, CaptionError, CaptionOutput, CaptionParameters, CaptionSource};
pub use client::{LanguageModel, ModelClient};
pub use error::Error;
pub use image::ImageInput;
pub use listing::{ListingClient, ListingDesign, ListingForm, ListingResponse};
