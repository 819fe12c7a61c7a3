use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

/// MIME types accepted for inline binary analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryMimeType {
    #[serde(rename = "application/pdf")]
    Pdf,
    #[serde(rename = "image/jpeg")]
    Jpeg,
}

impl BinaryMimeType {
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Maps an uploaded file's MIME type onto the tag sent upstream.
    /// Every image type is forwarded as JPEG.
    pub fn from_upload(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            m if m.starts_with("image/") => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// A single document submitted for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisRequest {
    Binary {
        mime_type: BinaryMimeType,
        /// Base64 payload. A leading `data:<mime>;base64,` prefix is stripped on input.
        #[serde(deserialize_with = "deserialize_payload")]
        payload: String,
    },
    Text {
        content: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisRequestError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("text content is not valid UTF-8")]
    InvalidText,
}

impl AnalysisRequest {
    pub fn binary(mime_type: BinaryMimeType, payload: impl Into<String>) -> Self {
        let payload = payload.into();
        Self::Binary {
            mime_type,
            payload: strip_data_url(&payload).to_string(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Builds a request from raw uploaded bytes.
    pub fn from_bytes(mime: &str, data: &[u8]) -> Result<Self, AnalysisRequestError> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();

        if let Some(mime_type) = BinaryMimeType::from_upload(essence) {
            return Ok(Self::binary(
                mime_type,
                general_purpose::STANDARD.encode(data),
            ));
        }

        match essence {
            "text/html" | "text/plain" => {
                let content = std::str::from_utf8(data)
                    .map_err(|_| AnalysisRequestError::InvalidText)?;
                Ok(Self::text(content))
            }
            other => Err(AnalysisRequestError::UnsupportedContentType(
                other.to_string(),
            )),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Binary { .. } => "binary",
            Self::Text { .. } => "text",
        }
    }

    /// True when there is nothing worth sending upstream.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Binary { payload, .. } => payload.trim().is_empty(),
            Self::Text { content } => content.trim().is_empty(),
        }
    }

    /// Size of the content carried, in bytes of its transmitted form.
    pub fn content_len(&self) -> usize {
        match self {
            Self::Binary { payload, .. } => payload.len(),
            Self::Text { content } => content.len(),
        }
    }
}

/// Drops a `data:<mime>;base64,` prefix as produced by browser file readers.
pub fn strip_data_url(payload: &str) -> &str {
    match payload.strip_prefix("data:").and_then(|rest| rest.split_once(',')) {
        Some((header, data)) if header.ends_with(";base64") => data,
        _ => payload,
    }
}

fn deserialize_payload<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let payload = String::deserialize(deserializer)?;
    Ok(strip_data_url(&payload).to_string())
}
