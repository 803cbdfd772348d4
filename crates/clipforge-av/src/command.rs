//! Builder for executing external tool commands with captured output.

use crate::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Output captured from a tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// A builder for constructing and executing external tool invocations.
///
/// Execution is synchronous and blocking; there is no timeout and no
/// cancellation. The pipeline runs one external process at a time.
///
/// # Example
///
/// ```no_run
/// use clipforge_av::ToolCommand;
/// use std::path::PathBuf;
///
/// # fn example() -> clipforge_av::Result<()> {
/// let output = ToolCommand::new(PathBuf::from("ffmpeg"))
///     .arg("-version")
///     .execute()?;
/// println!("{}", output.stdout);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl AsRef<OsStr>>) -> &mut Self {
        self.args
            .extend(iter.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Execute the command, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// - Returns [`Error::ToolNotFound`] if the program cannot be found.
    /// - Returns [`Error::Tool`] if the process exits with a non-zero
    ///   status (message includes the captured stderr).
    pub fn execute(&self) -> Result<ToolOutput> {
        let tool_name = self
            .program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string());

        tracing::debug!("Executing {} {:?}", tool_name, self.args);

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(&tool_name)
                } else {
                    Error::Io(e)
                }
            })?;

        let tool_output = ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            return Err(Error::tool_failed(
                tool_name,
                format!(
                    "exited with status {}: {}",
                    tool_output.status,
                    tool_output.stderr.trim()
                ),
            ));
        }

        Ok(tool_output)
    }
}
