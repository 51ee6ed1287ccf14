//! Input validation helpers shared by submission and feedback creation.

use validator::ValidateUrl;

use crate::error::CoreError;

/// Maximum number of tape links a single submission may carry.
pub const MAX_TAPES_PER_SUBMISSION: usize = 5;

/// Validate the ordered list of tape URLs on a new submission.
///
/// Requires at least one link, at most [`MAX_TAPES_PER_SUBMISSION`], and
/// every entry must be a well-formed absolute URL.
pub fn validate_tape_urls(urls: &[String]) -> Result<(), CoreError> {
    if urls.is_empty() {
        return Err(CoreError::Validation(
            "A submission must include at least one tape URL".into(),
        ));
    }
    if urls.len() > MAX_TAPES_PER_SUBMISSION {
        return Err(CoreError::Validation(format!(
            "A submission may include at most {MAX_TAPES_PER_SUBMISSION} tape URLs"
        )));
    }
    for url in urls {
        validate_url(url)?;
    }
    Ok(())
}

/// Validate a single URL field (tape link, feedback video, meeting link).
pub fn validate_url(url: &str) -> Result<(), CoreError> {
    if !url.validate_url() {
        return Err(CoreError::Validation(format!("Malformed URL: {url}")));
    }
    Ok(())
}
