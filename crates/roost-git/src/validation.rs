use crate::errors::GitError;

/// Validate a git argument to prevent injection.
///
/// Rejects values that are empty, start with `-` (option injection), contain
/// control characters, or contain `::` sequences (refspec injection).
pub fn validate_git_arg(value: &str, label: &str) -> Result<(), GitError> {
    if value.is_empty() {
        return Err(GitError::InvalidArgument {
            message: format!("{label} must not be empty"),
        });
    }
    if value.starts_with('-') {
        return Err(GitError::InvalidArgument {
            message: format!("Invalid {label}: '{value}' (must not start with '-')"),
        });
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(GitError::InvalidArgument {
            message: format!("Invalid {label}: contains control characters"),
        });
    }
    if value.contains("::") {
        return Err(GitError::InvalidArgument {
            message: format!("Invalid {label}: '::' sequences are not allowed"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_git_arg_rejects_dash_prefix() {
        let msg = validate_git_arg("--evil", "test").unwrap_err().to_string();
        assert!(msg.contains("must not start with '-'"));
    }

    #[test]
    fn test_validate_git_arg_rejects_control_chars() {
        let msg = validate_git_arg("hello\x00world", "test")
            .unwrap_err()
            .to_string();
        assert!(msg.contains("control characters"));
    }

    #[test]
    fn test_validate_git_arg_rejects_double_colon() {
        let msg = validate_git_arg("refs::heads", "test")
            .unwrap_err()
            .to_string();
        assert!(msg.contains("'::'"));
    }

    #[test]
    fn test_validate_git_arg_rejects_empty() {
        assert!(validate_git_arg("", "branch name").is_err());
    }

    #[test]
    fn test_validate_git_arg_accepts_valid_values() {
        assert!(validate_git_arg("origin", "remote").is_ok());
        assert!(validate_git_arg("main", "branch").is_ok());
        assert!(validate_git_arg("feature/login", "branch").is_ok());
        assert!(validate_git_arg("git@github.com:me/app.git", "url").is_ok());
    }
}
