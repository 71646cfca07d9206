//! External subsetting tool invocation

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::ExitStatus;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Why a subsetter run did not produce a font
#[derive(Debug, Error)]
pub enum SubsetError {
    /// The program could not be found; no later font can succeed either.
    #[error("subsetter `{program}` not found")]
    ToolMissing { program: String },

    /// The program ran and exited unsuccessfully.
    #[error("subsetter exited with {status}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("failed to run subsetter: {0}")]
    Io(#[from] io::Error),
}

impl SubsetError {
    /// Whether the whole batch has to stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, SubsetError::ToolMissing { .. })
    }

    /// Captured stderr of a failed run, if it said anything
    pub fn stderr(&self) -> Option<&str> {
        match self {
            SubsetError::Failed { stderr, .. } if !stderr.trim().is_empty() => Some(stderr),
            _ => None,
        }
    }
}

/// `--flag=<path>` without lossy conversion of the path
fn flag_with_path(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push(path.as_os_str());
    arg
}

/// Runs the subsetting program, one font at a time
#[derive(Debug, Clone)]
pub struct SubsetterRunner {
    program: String,
    leading_args: Vec<String>,
    extra_args: Vec<String>,
}

impl SubsetterRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            extra_args: Vec::new(),
        }
    }

    /// Split a command line such as `fonttools subset` into the program and
    /// the arguments placed before the font path. Quoting is not supported.
    pub fn from_command_line(command: &str) -> Self {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next().unwrap_or_default();
        Self {
            program,
            leading_args: words.collect(),
            extra_args: Vec::new(),
        }
    }

    /// Arguments placed before the font path
    pub fn with_leading_args(mut self, args: Vec<String>) -> Self {
        self.leading_args = args;
        self
    }

    /// Arguments appended after the standard three
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// `[leading...] <input> --text-file=<text_file> --output-file=<output> [extra...]`
    fn command(&self, input: &Path, text_file: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .arg(input)
            .arg(flag_with_path("--text-file=", text_file))
            .arg(flag_with_path("--output-file=", output))
            .args(&self.extra_args)
            .kill_on_drop(true);
        cmd
    }

    /// Subset `input` down to the characters in `text_file`, writing `output`.
    ///
    /// Waits for the program without a timeout.
    pub async fn subset(
        &self,
        input: &Path,
        text_file: &Path,
        output: &Path,
    ) -> Result<(), SubsetError> {
        let mut cmd = self.command(input, text_file, output);
        debug!("Running {:?}", cmd.as_std());

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SubsetError::ToolMissing {
                    program: self.program.clone(),
                });
            }
            Err(e) => return Err(SubsetError::Io(e)),
        };

        if !output.status.success() {
            return Err(SubsetError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
