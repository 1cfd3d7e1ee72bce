use std::path::PathBuf;
use thiserror::Error;

/// Validation failures raised while assembling a build configuration.
///
/// Assembly is all-or-nothing: any of these aborts the build before a
/// `BuildConfig` is handed downstream. Callers that work with `anyhow`
/// get these coerced automatically and can still `downcast_ref` to
/// match on a specific failure.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("entry script not found: {}", .path.display())]
    EntryScriptNotFound { path: PathBuf },

    #[error("icon file not found: {}", .path.display())]
    IconNotFound { path: PathBuf },

    #[error("resource directory not found: {}", .path.display())]
    ResourceDirNotFound { path: PathBuf },
}

/// Failures while running the external freeze tool.
#[derive(Debug, Error)]
pub enum FreezeError {
    #[error("failed to launch freeze tool `{tool}`: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("freeze tool `{tool}` exited with status {status}")]
    ToolFailed { tool: String, status: String },
}
