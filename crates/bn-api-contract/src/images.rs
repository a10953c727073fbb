//! Inline image handling
//!
//! Image fields on listings are plain strings: either a remote URL or a
//! base64 data URI produced on-device from a picked photo. The backend
//! treats both uniformly, so the helpers here only deal with the inline
//! encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ApiContractError;

/// Encode raw image bytes as a `data:` URI suitable for an image field.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Whether an image string is an inline data URI rather than a remote URL.
pub fn is_data_uri(image: &str) -> bool {
    image.starts_with("data:")
}

/// Decode a `data:<mime>;base64,<payload>` URI back into its MIME type and
/// raw bytes.
pub fn decode_data_uri(image: &str) -> Result<(String, Vec<u8>), ApiContractError> {
    let rest = image
        .strip_prefix("data:")
        .ok_or_else(|| ApiContractError::InvalidDataUri("missing data: prefix".to_string()))?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| ApiContractError::InvalidDataUri("missing ;base64, marker".to_string()))?;
    let bytes = STANDARD.decode(payload)?;
    Ok((mime.to_string(), bytes))
}
