use crate::utils::error::{AutoconfError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: &str) -> AutoconfError {
    AutoconfError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(invalid(field_name, &display, "Path cannot be empty"));
    }

    if display.contains('\0') {
        return Err(invalid(field_name, &display, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_absolute_path(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if !path.is_absolute() {
        return Err(invalid(
            field_name,
            &path.to_string_lossy(),
            "Path must be absolute",
        ));
    }

    Ok(())
}

/// A single path component: non-empty, no separators.
pub fn validate_name(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }

    if value.contains('/') || value.contains('\0') {
        return Err(invalid(
            field_name,
            value,
            "Value must be a single path component",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("test", Path::new("/var/tmp")).is_ok());
        assert!(validate_path("test", Path::new("relative/dir")).is_ok());
        assert!(validate_path("test", Path::new("")).is_err());
        assert!(validate_path("test", &PathBuf::from("bad\0path")).is_err());
    }

    #[test]
    fn test_validate_absolute_path() {
        assert!(validate_absolute_path("test", Path::new("/tmp")).is_ok());
        assert!(validate_absolute_path("test", Path::new("tmp")).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("test", "uStor").is_ok());
        assert!(validate_name("test", ".rtorrent.rc").is_ok());
        assert!(validate_name("test", "   ").is_err());
        assert!(validate_name("test", "a/b").is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = validate_absolute_path("mount_root", Path::new("media")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("mount_root"));
        assert!(message.contains("media"));
    }
}
