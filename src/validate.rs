use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::{ValidKey, MIN_KEY_LENGTH};

static USUAL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-_]+$").expect("static regex"));

/// Check the shape of an operator-supplied key.
///
/// The key is trimmed first. Characters outside `[A-Za-z0-9-_]` do not
/// reject it; they are recorded on the returned [`ValidKey`] and logged.
pub fn validate(candidate: &str) -> Result<ValidKey, ValidationError> {
    let key = candidate.trim();
    if key.is_empty() {
        return Err(ValidationError::EmptyKey);
    }

    let length = key.chars().count();
    if length < MIN_KEY_LENGTH {
        return Err(ValidationError::TooShort { length });
    }

    let unusual = !USUAL_KEY.is_match(key);
    if unusual {
        tracing::debug!(length, "API key contains unusual characters");
    }
    Ok(ValidKey::new(key.to_string(), unusual))
}
