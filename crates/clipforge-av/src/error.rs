//! Error types for clipforge-av.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while acquiring and assembling a clip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool failed to execute.
    #[error("tool execution failed: {tool}: {message}")]
    Tool { tool: String, message: String },

    /// A network transfer failed (connection error or non-success status).
    #[error("transfer failed: {url}: {message}")]
    Transfer { url: String, message: String },

    /// An archive could not be expanded (corrupt or unsupported format).
    #[error("expansion failed: {}: {message}", archive.display())]
    Expansion { archive: PathBuf, message: String },

    /// The expected directory entry did not appear after an expansion.
    #[error("discovery failed: {0}")]
    Discovery(String),

    /// Fewer segments were built than parts were discovered.
    #[error("built {built} of {expected} segments; refusing to join a partial sequence")]
    SegmentCount { expected: usize, built: usize },

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Scratch area error.
    #[error("scratch error: {0}")]
    Scratch(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a transfer error.
    pub fn transfer(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transfer {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an expansion error.
    pub fn expansion(archive: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Expansion {
            archive: archive.into(),
            message: message.into(),
        }
    }
}
