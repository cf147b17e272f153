use std::error::Error;

/// Base trait for all application errors
pub trait RoostError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type RoostResult<T> = Result<T, Box<dyn RoostError>>;

impl RoostError for roost_git::GitError {
    fn error_code(&self) -> &'static str {
        match self {
            roost_git::GitError::NotInRepository { .. } => "NOT_IN_REPOSITORY",
            roost_git::GitError::RemoteNotFound { .. } => "REMOTE_NOT_FOUND",
            roost_git::GitError::InvalidArgument { .. } => "GIT_INVALID_ARGUMENT",
            roost_git::GitError::SpawnFailed { .. } => "GIT_SPAWN_FAILED",
            roost_git::GitError::CommandFailed { .. } => "GIT_COMMAND_FAILED",
            roost_git::GitError::Git2Error { .. } => "GIT2_ERROR",
            roost_git::GitError::IoError { .. } => "GIT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            roost_git::GitError::NotInRepository { .. }
                | roost_git::GitError::RemoteNotFound { .. }
                | roost_git::GitError::InvalidArgument { .. }
        )
    }
}

impl RoostError for roost_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            roost_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            roost_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            roost_config::ConfigError::PathResolution { .. } => "CONFIG_PATH_RESOLUTION",
            roost_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            roost_config::ConfigError::ConfigParseError { .. }
                | roost_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}

impl RoostError for roost_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            roost_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }
}
