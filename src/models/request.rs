//! Request models for the generateContent endpoint.

use serde::{Deserialize, Serialize};

use super::Part;

/// A generation request sent to the remote model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Optional system instruction establishing the model's persona
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// The contents of the request, including the prompt text.
    pub contents: Vec<Content>,
}

/// A content object containing parts of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The author of this content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts that make up the content.
    pub parts: Vec<Part>,
}

/// The author of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Content supplied by the caller.
    User,
    /// Content produced by the model.
    Model,
    /// A system instruction.
    System,
}

impl Request {
    /// Creates a request with a system instruction and a single text prompt.
    ///
    /// # Arguments
    ///
    /// * `system_instruction` - The system instruction for the model
    /// * `text` - The text prompt to generate content from
    pub fn with_system_instruction(
        system_instruction: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::with_system_and_parts(system_instruction, vec![Part::text(text)])
    }

    /// Creates a request with a system instruction and arbitrary user parts,
    /// such as an instruction text followed by an inlined image.
    ///
    /// # Arguments
    ///
    /// * `system_instruction` - The system instruction for the model
    /// * `parts` - The user parts making up the prompt
    pub fn with_system_and_parts(
        system_instruction: impl Into<String>,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            system_instruction: Some(Content {
                role: Some(Role::System),
                parts: vec![Part::text(system_instruction)],
            }),
            contents: vec![Content {
                role: Some(Role::User),
                parts,
            }],
        }
    }
}
