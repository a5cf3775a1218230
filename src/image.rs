//! Uploaded-image handling for the describe stage.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::{error::Error, models::Part};

/// An uploaded image held in memory for the duration of one describe call.
#[derive(Debug, Clone)]
pub struct ImageInput {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImageInput {
    /// Wraps raw image bytes with their MIME type.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Reads an image from disk, guessing the MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mime_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
        Ok(Self { bytes, mime_type })
    }

    /// The MIME type the image will be sent under.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Size of the image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the image holds no data at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encodes the image as an inline-data request part.
    pub fn to_part(&self) -> Part {
        Part::inline_data(self.mime_type.clone(), BASE64.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::models::InlineData;

    #[test]
    fn guesses_mime_type_from_extension() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("kitchen.png");
        fs::write(&path, b"not really a png")?;

        let image = ImageInput::from_path(&path)?;
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.len(), 16);
        Ok(())
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("upload.mystery");
        fs::write(&path, b"??")?;

        let image = ImageInput::from_path(&path)?;
        assert_eq!(image.mime_type(), "application/octet-stream");
        Ok(())
    }

    #[test]
    fn inline_part_carries_base64_of_the_bytes() {
        let image = ImageInput::new(vec![0x89, 0x50, 0x4e, 0x47], "image/png");
        match image.to_part() {
            Part::InlineData {
                inline_data: InlineData { mime_type, data },
            } => {
                assert_eq!(mime_type, "image/png");
                assert_eq!(data, BASE64.encode([0x89, 0x50, 0x4e, 0x47]));
            }
            other => panic!("expected inline data part, got {:?}", other),
        }
    }
}
