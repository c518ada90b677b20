use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::ProductError;

/// Image types accepted for product pictures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

impl ImageFormat {
    /// Detects the format from the leading bytes of the file.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(JPEG_MAGIC) {
            return Some(ImageFormat::Jpeg);
        }
        if bytes.starts_with(PNG_MAGIC) {
            return Some(ImageFormat::Png);
        }
        if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            return Some(ImageFormat::Webp);
        }
        None
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// An uploaded image whose content has been checked against the allowed formats.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl ImageUpload {
    /// Decodes a base64 payload, optionally wrapped in a `data:` URL.
    pub fn from_base64(encoded: &str) -> Result<Self, ProductError> {
        let payload = match encoded.strip_prefix("data:") {
            Some(data_url) => data_url
                .split_once(',')
                .map(|(_, payload)| payload)
                .ok_or(ProductError::ImageFormat)?,
            None => encoded,
        };

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|_| ProductError::ImageFormat)?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ProductError> {
        let format = ImageFormat::detect(&bytes).ok_or(ProductError::ImageFormat)?;
        Ok(Self { bytes, format })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }
}
