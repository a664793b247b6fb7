//! Profile image payloads.
//!
//! Images travel as data URLs: `data:image/<subtype>;base64,<payload>`.
//! The store treats the string as an opaque blob once it passes
//! [`validate_image_data_url`].

use crate::{CoreError, Result as CoreErrorResult};

use base64::{Engine as _, engine::general_purpose::STANDARD};

const DATA_URL_PREFIX: &str = "data:";
const IMAGE_PREFIX: &str = "data:image/";
const BASE64_MARKER: &str = ";base64,";

fn is_valid_subtype(subtype: &str) -> bool {
    !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Check that `value` is a base64 image data URL no larger than `max_bytes` decoded.
#[track_caller]
pub fn validate_image_data_url(value: &str, max_bytes: usize) -> CoreErrorResult<()> {
    let rest = value
        .strip_prefix(IMAGE_PREFIX)
        .ok_or_else(|| CoreError::attachment("Invalid profile picture format."))?;

    let (subtype, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| CoreError::attachment("Profile picture must be base64 encoded."))?;

    if !is_valid_subtype(subtype) {
        return Err(CoreError::attachment(format!(
            "Unrecognized image type: image/{}",
            subtype
        )));
    }

    let decoded = STANDARD
        .decode(payload)
        .map_err(|e| CoreError::attachment(format!("Profile picture payload is corrupt: {}", e)))?;

    if decoded.is_empty() {
        return Err(CoreError::attachment("Profile picture is empty."));
    }

    if decoded.len() > max_bytes {
        return Err(CoreError::attachment(format!(
            "Profile picture exceeds {} bytes.",
            max_bytes
        )));
    }

    Ok(())
}

/// Encode raw image bytes into a data URL
#[track_caller]
pub fn encode_image_data_url(mime: &str, bytes: &[u8]) -> CoreErrorResult<String> {
    let mime = mime.trim().to_ascii_lowercase();

    let subtype = mime
        .strip_prefix("image/")
        .ok_or_else(|| CoreError::attachment(format!("{} is not an image type", mime)))?;

    if !is_valid_subtype(subtype) {
        return Err(CoreError::attachment(format!(
            "Unrecognized image type: {}",
            mime
        )));
    }

    if bytes.is_empty() {
        return Err(CoreError::attachment("Profile picture is empty."));
    }

    Ok(format!(
        "{}{}{}{}",
        DATA_URL_PREFIX,
        mime,
        BASE64_MARKER,
        STANDARD.encode(bytes)
    ))
}
