//! Fixed prompt text for the two pipeline stages.

use super::CaptionParameters;

/// Persona for the image-description call.
pub(crate) const DESCRIBER_SYSTEM_INSTRUCTION: &str =
    "You are an excellent observer and helpful assistant.";

/// Directive sent alongside the inlined image.
pub(crate) const DESCRIBER_INSTRUCTION: &str =
    "Act as an Image Description Generator. Provide a detailed, accurate, and \
     professional description of the uploaded image. Take into account all visible \
     elements, their arrangement, colors, context, and any potential symbolism or \
     significant details that might not be immediately apparent. Consider any \
     cultural, historical, or artistic references that may be relevant to \
     interpreting the image, and describe the mood, tone, or atmosphere it conveys. \
     The description should be comprehensive and tailored to the specific content \
     of the image.";

/// Persona for the caption-writing call.
pub(crate) const COMPOSER_SYSTEM_INSTRUCTION: &str =
    "You are a professional social media manager who specializes in creating \
     engaging Instagram captions.";

/// Renders the caption prompt around `content` and the remaining marketing
/// fields. `content` is either the raw highlight text or an image
/// description; the template does not care which.
pub(crate) fn caption_prompt(content: &str, params: &CaptionParameters) -> String {
    format!(
        "Create an engaging and witty Instagram caption targeting {audience} who are \
         interested in {interests}.\n\
         The 200 word post should {content}, while incorporating {tone} to grab the \
         reader's attention.\n\
         The main message should be {reason}.\n\
         Finally, the caption should end with a call to action to {cta}.\n\
         \n\
         Tips for crafting the caption:\n\
         Clearly define who the post is speaking to and focus on what that audience \
         cares about, tailoring the message to resonate with their desires.\n\
         Keep the purpose of the post in mind, whether that is to inspire, inform, \
         entertain, or promote.\n\
         Choose a voice that matches the brand and address any objections or \
         misconceptions directly in a lighthearted way.\n\
         Close by telling the reader exactly what to do next.",
        audience = params.target_audience,
        interests = params.interests,
        content = content,
        tone = params.tone,
        reason = params.reason,
        cta = params.call_to_action,
    )
}
