//! Code formatting backends.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use thiserror::Error;

use crate::FormatterConfig;

/// Error from an external formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to exchange code with the formatter: {0}")]
    Io(#[from] std::io::Error),

    #[error("formatter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("formatter produced invalid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// A pass that rewrites assembled code into its final layout.
pub trait Formatter: Send + Sync {
    /// Format `code`; `filename` tells the backend which parser to use.
    fn format(
        &self,
        code: &str,
        filename: &str,
        config: &FormatterConfig,
    ) -> Result<String, FormatError>;
}

/// Returns code unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(
        &self,
        code: &str,
        _filename: &str,
        _config: &FormatterConfig,
    ) -> Result<String, FormatError> {
        Ok(code.to_string())
    }
}

/// Formats through the Prettier CLI, reading code from stdin.
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
    program: String,
    args: Vec<String>,
}

impl Default for PrettierFormatter {
    fn default() -> Self {
        Self::npx()
    }
}

impl PrettierFormatter {
    /// Run `npx prettier`.
    pub fn npx() -> Self {
        Self::with_command("npx", ["prettier"])
    }

    /// Run a custom command, e.g. a locally installed `prettier` binary.
    pub fn with_command(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Command-line flags for a configuration.
    pub fn config_args(filename: &str, config: &FormatterConfig) -> Vec<String> {
        let mut args = vec![
            "--stdin-filepath".to_string(),
            filename.to_string(),
            "--tab-width".to_string(),
            config.tab_width.to_string(),
            "--print-width".to_string(),
            config.print_width.to_string(),
            "--trailing-comma".to_string(),
            config.trailing_comma.as_str().to_string(),
        ];
        if !config.semi {
            args.push("--no-semi".to_string());
        }
        if config.single_quote {
            args.push("--single-quote".to_string());
        }
        args
    }
}

impl Formatter for PrettierFormatter {
    fn format(
        &self,
        code: &str,
        filename: &str,
        config: &FormatterConfig,
    ) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(Self::config_args(filename, config))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(code.as_bytes()) {
                // reap the process before giving up on it
                let _ = child.kill();
                let _ = child.wait();
                return Err(err.into());
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(FormatError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
