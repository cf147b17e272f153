#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Not a git repository: {path}")]
    NotInRepository { path: String },

    #[error("Remote '{remote}' is not configured in {path}")]
    RemoteNotFound { remote: String, path: String },

    #[error("Invalid git argument: {message}")]
    InvalidArgument { message: String },

    #[error("Failed to execute '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    #[error("'{command}' exited with status={code:?}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Git2 library error: {source}")]
    Git2Error {
        #[from]
        source: git2::Error,
    },

    #[error("IO error during git operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
