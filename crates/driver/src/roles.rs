//! The two external roles a match talks to, and their subprocess adapters.
//! This module exists so the match loop never depends on how a role is hosted.
//! It does not validate what a role answers.

use std::io::{self, Write};
use std::process::{ChildStdin, Command, Stdio};
use std::thread;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::config::ProgramSpec;

/// Produces a maze in architect format from `<size> <seed>`.
pub trait Architect {
    fn design(&mut self, size: usize, seed: u64) -> Result<String>;
}

/// Answers one solver-format request with a `<row> <col>` line.
pub trait Solver {
    fn decide(&mut self, request: &str) -> Result<String>;
}

/// A role hosted as a separate program, launched once per request.
#[derive(Debug, Clone)]
pub struct ProgramRole {
    spec: ProgramSpec,
}

impl ProgramRole {
    pub fn new(spec: ProgramSpec) -> Self {
        Self { spec }
    }

    fn exchange(&self, input: &str) -> Result<String> {
        let Some((program, args)) = self.spec.args.split_first() else {
            bail!("empty program argument list");
        };
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to launch {program}"))?;

        // stdin is fed from a second thread while stdout and stderr drain.
        let stdin = child.stdin.take();
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || write_request(stdin, input));
            (child.wait_with_output(), writer.join())
        });
        let output = output.with_context(|| format!("failed to wait for {program}"))?;
        match written {
            Ok(result) => {
                result.with_context(|| format!("failed to write request to {program}"))?;
            }
            Err(_) => bail!("request writer for {program} panicked"),
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!(program = %program, stderr = %stderr.trim(), "role wrote to stderr");
        }
        if !output.status.success() {
            bail!("{program} exited with {}: {}", output.status, stderr.trim());
        }
        String::from_utf8(output.stdout).with_context(|| format!("{program} wrote non-UTF-8 output"))
    }
}

/// A program may stop reading once it has what it needs; that is not a failure.
fn write_request(stdin: Option<ChildStdin>, input: &str) -> io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };
    match stdin.write_all(input.as_bytes()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

impl Architect for ProgramRole {
    fn design(&mut self, size: usize, seed: u64) -> Result<String> {
        self.exchange(&format!("{size} {seed}\n"))
    }
}

impl Solver for ProgramRole {
    fn decide(&mut self, request: &str) -> Result<String> {
        self.exchange(request)
    }
}
