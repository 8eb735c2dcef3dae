// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process invocation with captured output
//!
//! Each invocation blocks its caller until the child exits or the
//! configured timeout elapses. A child that outlives the timeout is killed.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::process::Command;
use tracing::Instrument;

/// One process invocation: program, ordered arguments, environment overrides
#[derive(Debug, Clone)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    env: Vec<(OsString, OsString)>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Set a variable on top of the inherited environment
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.env
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }
}

/// How a process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination {
    pub success: bool,
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "no exit code (terminated by signal)"),
        }
    }
}

/// Output streams and termination of a finished process
#[derive(Debug, Clone)]
pub struct Capture {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    termination: Termination,
}

impl Capture {
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>, termination: Termination) -> Self {
        Self {
            stdout,
            stderr,
            termination,
        }
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    pub fn stdout_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn success(&self) -> bool {
        self.termination.success
    }
}

/// Invocation errors
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} exited with {}", program.display(), capture.termination)]
    Exited {
        program: PathBuf,
        capture: Box<Capture>,
    },
    #[error("{} did not exit within {}", program.display(), humantime::format_duration(*after))]
    TimedOut { program: PathBuf, after: Duration },
    #[error("failed waiting for {}: {source}", program.display())]
    Io {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InvocationError {
    /// Capture of a process that ran to completion but failed
    pub fn capture(&self) -> Option<&Capture> {
        match self {
            InvocationError::Exited { capture, .. } => Some(capture),
            _ => None,
        }
    }
}

/// Runs invocations with a bounded wait
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run to completion, returning the capture whatever the exit status
    pub async fn run(&self, invocation: &Invocation) -> Result<Capture, InvocationError> {
        let span = tracing::info_span!(
            "invoke",
            program = %invocation.program.display(),
            args = ?invocation.args,
        );
        self.run_inner(invocation).instrument(span).await
    }

    /// Run to completion, treating a non-zero exit as an error
    pub async fn run_success(&self, invocation: &Invocation) -> Result<Capture, InvocationError> {
        let capture = self.run(invocation).await?;
        if capture.success() {
            Ok(capture)
        } else {
            Err(InvocationError::Exited {
                program: invocation.program.clone(),
                capture: Box::new(capture),
            })
        }
    }

    async fn run_inner(&self, invocation: &Invocation) -> Result<Capture, InvocationError> {
        let program = invocation.program.clone();
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let start = Instant::now();
        let child = command.spawn().map_err(|source| {
            tracing::error!(error = %source, "spawn failed");
            InvocationError::Spawn {
                program: program.clone(),
                source,
            }
        })?;
        tracing::debug!(pid = ?child.id(), "spawned");

        // Dropping the wait future drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| InvocationError::Io {
                program: program.clone(),
                source,
            })?,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "timed out, killing process"
                );
                return Err(InvocationError::TimedOut {
                    program,
                    after: self.timeout,
                });
            }
        };

        let termination = Termination::from(output.status);
        tracing::info!(
            code = ?termination.code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "exited"
        );
        Ok(Capture::new(output.stdout, output.stderr, termination))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
