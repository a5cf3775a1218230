//! The two-stage caption-generation pipeline.
//!
//! Stage one describes an uploaded image through a vision-capable model call.
//! Stage two weaves a content string together with the marketing parameters
//! into a prompt and asks the model for finished caption copy. The content
//! string is either the description from stage one or the raw highlight text
//! from the parameters; which one is used depends only on the
//! [`CaptionSource`] variant.

mod prompts;

use tracing::debug;
use typed_builder::TypedBuilder;

use crate::{
    client::LanguageModel,
    error::Error,
    image::ImageInput,
    models::{Part, Request},
};

/// A pipeline-stage failure wrapping the transport error that caused it.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// The vision call describing the uploaded image failed.
    #[error("Error analyzing image: {0}")]
    Describe(#[source] Error),
    /// The text call producing the caption failed.
    #[error("Error generating caption: {0}")]
    Compose(#[source] Error),
}

/// The six free-text marketing fields steering a caption.
///
/// All fields are opaque strings and may be left empty; an empty field
/// simply yields a less specific prompt.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(doc)]
pub struct CaptionParameters {
    /// Who the post speaks to.
    #[builder(setter(into), default)]
    pub target_audience: String,
    /// What that audience wants, desires, or aims for.
    #[builder(setter(into), default)]
    pub interests: String,
    /// What the caption should highlight when no image is supplied.
    #[builder(setter(into), default)]
    pub content: String,
    /// The voice of the copy.
    #[builder(setter(into), default)]
    pub tone: String,
    /// The main message, or the objection the post addresses.
    #[builder(setter(into), default)]
    pub reason: String,
    /// What the reader should do next.
    #[builder(setter(into), default)]
    pub call_to_action: String,
}

/// Where the composer's content string comes from.
///
/// The fork on image presence is the pipeline's only branch: an image is
/// described first and the description becomes the content, otherwise the
/// highlight text from the parameters is used as-is.
#[derive(Debug, Clone)]
pub enum CaptionSource {
    /// Describe this image and caption from the description.
    Image(ImageInput),
    /// Caption directly from [`CaptionParameters::content`].
    Highlight,
}

impl CaptionSource {
    /// Maps an optional upload to the matching source variant.
    pub fn from_image(image: Option<ImageInput>) -> Self {
        match image {
            Some(image) => Self::Image(image),
            None => Self::Highlight,
        }
    }
}

/// The pipeline's result: the caption, plus the description when one was
/// computed along the way.
#[derive(Debug, Clone)]
pub struct CaptionOutput {
    /// Finished caption copy, returned verbatim from the model.
    pub caption: String,
    /// The image description fed to the composer, when the source was an image.
    pub description: Option<String>,
}

/// The caption pipeline bound to an injected language model.
///
/// Holds no per-request state; one engine can serve any number of
/// independent, concurrently-running requests.
#[derive(Debug, Clone)]
pub struct CaptionEngine<M> {
    model: M,
}

impl<M: LanguageModel> CaptionEngine<M> {
    /// Creates an engine on top of the given model client.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The underlying model client.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Asks the vision model for a detailed description of `image`.
    ///
    /// Exactly one remote call; the model's text is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`CaptionError::Describe`] if the remote call fails or the
    /// model answers without any text.
    pub async fn describe(&self, image: &ImageInput) -> Result<String, CaptionError> {
        let request = Request::with_system_and_parts(
            prompts::DESCRIBER_SYSTEM_INSTRUCTION,
            vec![Part::text(prompts::DESCRIBER_INSTRUCTION), image.to_part()],
        );

        let response = self
            .model
            .generate(request)
            .await
            .map_err(CaptionError::Describe)?;

        let description = response.text();
        if description.is_empty() {
            return Err(CaptionError::Describe(Error::api(
                "model returned no description text",
            )));
        }
        debug!(chars = description.len(), "image described");
        Ok(description)
    }

    /// Renders the caption prompt around `content` and asks the model for copy.
    ///
    /// `content` is either the raw highlight text or an image description;
    /// the composer does not know or care which.
    ///
    /// # Errors
    ///
    /// Returns [`CaptionError::Compose`] if the remote call fails or the
    /// model answers without any text.
    pub async fn compose(
        &self,
        content: &str,
        params: &CaptionParameters,
    ) -> Result<String, CaptionError> {
        let prompt = prompts::caption_prompt(content, params);
        let request =
            Request::with_system_instruction(prompts::COMPOSER_SYSTEM_INSTRUCTION, prompt);

        let response = self
            .model
            .generate(request)
            .await
            .map_err(CaptionError::Compose)?;

        let caption = response.text();
        if caption.is_empty() {
            return Err(CaptionError::Compose(Error::api(
                "model returned no caption text",
            )));
        }
        Ok(caption)
    }

    /// Runs the full pipeline for one request.
    ///
    /// With an image source the describer runs first and its output becomes
    /// the composer's content; otherwise the highlight text is composed
    /// directly. The two remote calls are strictly sequential.
    ///
    /// # Errors
    ///
    /// Returns the failing stage's [`CaptionError`].
    pub async fn generate(
        &self,
        source: CaptionSource,
        params: &CaptionParameters,
    ) -> Result<CaptionOutput, CaptionError> {
        match source {
            CaptionSource::Image(image) => {
                let description = self.describe(&image).await?;
                let caption = self.compose(&description, params).await?;
                Ok(CaptionOutput {
                    caption,
                    description: Some(description),
                })
            }
            CaptionSource::Highlight => {
                let caption = self.compose(&params.content, params).await?;
                Ok(CaptionOutput {
                    caption,
                    description: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    use super::*;
    use crate::models::{Candidate, Content, Response, Role};

    /// A model double that replays scripted replies and records every request.
    struct ScriptedModel {
        replies: Mutex<VecDeque<Result<Response, Error>>>,
        seen: Mutex<Vec<Request>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Result<Response, Error>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<Request> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl LanguageModel for ScriptedModel {
        async fn generate(&self, request: Request) -> Result<Response, Error> {
            self.seen.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("model called more often than scripted")
        }
    }

    fn reply(text: &str) -> Result<Response, Error> {
        Ok(Response {
            candidates: vec![Candidate {
                content: Content {
                    role: Some(Role::Model),
                    parts: vec![Part::text(text)],
                },
                finish_reason: None,
                avg_logprobs: None,
            }],
            usage_metadata: None,
            model_version: None,
        })
    }

    fn empty_reply() -> Result<Response, Error> {
        Ok(Response {
            candidates: Vec::new(),
            usage_metadata: None,
            model_version: None,
        })
    }

    fn params() -> CaptionParameters {
        CaptionParameters::builder()
            .target_audience("first-time buyers")
            .interests("safe neighborhood")
            .content("modern kitchen")
            .tone("inspirational")
            .reason("luxury is accessible")
            .call_to_action("book a tour")
            .build()
    }

    fn prompt_text(request: &Request) -> String {
        request
            .contents
            .iter()
            .flat_map(|content| &content.parts)
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn highlight_source_composes_from_raw_content() {
        let engine = CaptionEngine::new(ScriptedModel::new(vec![reply(
            "Your dream kitchen awaits",
        )]));

        let output = engine
            .generate(CaptionSource::Highlight, &params())
            .await
            .unwrap();

        assert_eq!(output.caption, "Your dream kitchen awaits");
        assert!(output.description.is_none());

        let seen = engine.model().requests();
        assert_eq!(seen.len(), 1);
        assert!(prompt_text(&seen[0]).contains("modern kitchen"));
    }

    #[tokio::test]
    async fn image_source_feeds_description_to_composer() {
        let engine = CaptionEngine::new(ScriptedModel::new(vec![
            reply("A sunlit kitchen with marble counters"),
            reply("Caption copy"),
        ]));
        let image = ImageInput::new(vec![1, 2, 3, 4], "image/png");

        let output = engine
            .generate(CaptionSource::Image(image), &params())
            .await
            .unwrap();

        assert_eq!(
            output.description.as_deref(),
            Some("A sunlit kitchen with marble counters")
        );
        assert_eq!(output.caption, "Caption copy");

        let seen = engine.model().requests();
        assert_eq!(seen.len(), 2);

        // The composer sees the description, never the raw highlight text.
        let compose_prompt = prompt_text(&seen[1]);
        assert!(compose_prompt.contains("A sunlit kitchen with marble counters"));
        assert!(!compose_prompt.contains("modern kitchen"));
    }

    #[tokio::test]
    async fn describe_request_inlines_the_image() {
        let engine = CaptionEngine::new(ScriptedModel::new(vec![reply("a description")]));
        let image = ImageInput::new(b"fake png bytes".to_vec(), "image/png");

        engine.describe(&image).await.unwrap();

        let seen = engine.model().requests();
        let request = &seen[0];
        assert!(request.system_instruction.is_some());

        let parts = &request.contents[0].parts;
        assert!(
            matches!(&parts[0], Part::Text { text } if text.contains("Image Description Generator"))
        );
        match &parts[1] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/png");
                assert_eq!(inline_data.data, BASE64.encode(b"fake png bytes"));
            }
            other => panic!("expected inline image part, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn compose_failure_keeps_the_caption_error_marker() {
        let engine =
            CaptionEngine::new(ScriptedModel::new(vec![Err(Error::api("connection refused"))]));

        let err = engine.compose("modern kitchen", &params()).await.unwrap_err();

        assert!(matches!(err, CaptionError::Compose(_)));
        let rendered = err.to_string();
        assert!(rendered.starts_with("Error generating caption:"));
        assert!(rendered.contains("connection refused"));
    }

    #[tokio::test]
    async fn describe_failure_keeps_the_analysis_error_marker() {
        let engine =
            CaptionEngine::new(ScriptedModel::new(vec![Err(Error::api("401 unauthorized"))]));
        let image = ImageInput::new(vec![0], "image/png");

        let err = engine.describe(&image).await.unwrap_err();

        assert!(matches!(err, CaptionError::Describe(_)));
        let rendered = err.to_string();
        assert!(rendered.starts_with("Error analyzing image:"));
        assert!(rendered.contains("401 unauthorized"));
    }

    #[tokio::test]
    async fn reply_without_text_is_a_remote_failure() {
        let engine = CaptionEngine::new(ScriptedModel::new(vec![empty_reply()]));

        let err = engine.compose("modern kitchen", &params()).await.unwrap_err();

        assert!(matches!(err, CaptionError::Compose(_)));
    }

    #[test]
    fn caption_prompt_embeds_all_six_values() {
        let prompt = prompts::caption_prompt("a sunlit kitchen", &params());
        for needle in [
            "a sunlit kitchen",
            "first-time buyers",
            "safe neighborhood",
            "inspirational",
            "luxury is accessible",
            "book a tour",
        ] {
            assert!(prompt.contains(needle), "prompt is missing {:?}", needle);
        }
    }

    #[test]
    fn optional_upload_maps_to_the_matching_variant() {
        assert!(matches!(
            CaptionSource::from_image(Some(ImageInput::new(vec![1], "image/png"))),
            CaptionSource::Image(_)
        ));
        assert!(matches!(
            CaptionSource::from_image(None),
            CaptionSource::Highlight
        ));
    }
}
