use crate::utils::error::{DirectoryError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Avatars are rendered as image links, so only absolute http(s) URIs pass.
pub fn validate_avatar_url(source_name: &str, record_id: &str, avatar: &str) -> Result<()> {
    let reason = match Url::parse(avatar) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => return Ok(()),
        Ok(url) => format!("unsupported scheme '{}'", url.scheme()),
        Err(e) => e.to_string(),
    };
    Err(DirectoryError::RosterError {
        source_name: source_name.to_string(),
        message: format!("alumni '{}' has unusable avatar '{}': {}", record_id, avatar, reason),
    })
}

/// Roster and config paths must be non-empty and free of NUL bytes.
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "a roster or config path is required"
    } else if path.contains('\0') {
        "path contains a NUL byte"
    } else {
        return Ok(());
    };
    Err(DirectoryError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(DirectoryError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DirectoryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_avatar_url() {
        assert!(validate_avatar_url("alumni.csv", "1", "https://i.pravatar.cc/150?u=1").is_ok());
        assert!(validate_avatar_url("alumni.csv", "1", "http://example.com/a.png").is_ok());
        assert!(validate_avatar_url("alumni.csv", "1", "not a url").is_err());

        let err = validate_avatar_url("alumni.csv", "7", "ftp://example.com/a.png").unwrap_err();
        assert!(matches!(err, DirectoryError::RosterError { .. }));
        assert!(err.to_string().contains("alumni '7'"));
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("roster", "./alumni.csv").is_ok());
        assert!(validate_path("roster", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["table", "json", "csv"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["table", "json", "csv"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("alumni.json".to_string());
        let missing: Option<String> = None;
        assert_eq!(
            validate_required_field("roster.path", &present).unwrap(),
            "alumni.json"
        );
        assert!(matches!(
            validate_required_field("roster.path", &missing),
            Err(DirectoryError::MissingConfigError { .. })
        ));
    }
}
