//! # External Process Runner
//!
//! Runs external programs (`git`, `go`, `yarn`, `npm`) in a given working
//! directory while forwarding their output to the user.
//!
//! The program is looked up on `PATH` before anything is launched, so a
//! missing binary is reported as [`Error::CommandNotFound`] rather than as a
//! spawn failure.
//!
//! Standard output and standard error are piped. Standard output is copied on
//! an auxiliary scoped thread while the calling thread copies standard error;
//! draining both at once keeps the child from blocking on a full pipe. Each
//! stream goes through a [`Tee`] that writes to the caller's sink and keeps a
//! copy in memory. Both copies complete before the exit status is collected.

use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use log::debug;

use crate::error::{Error, Result};

/// Output captured from a finished child process.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// A writer that forwards everything to `inner` and records it in a buffer.
pub struct Tee<W> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W: Write> Tee<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    /// Consumes the tee and returns the recorded bytes.
    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }
}

impl<W: Write> Write for Tee<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.buffer.extend_from_slice(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Run `program` with `args` in `dir`, forwarding its output to the parent's
/// stdout and stderr.
pub fn run_command<S: AsRef<OsStr>>(
    program: &str,
    dir: &Path,
    args: &[S],
) -> Result<CapturedOutput> {
    run_command_with_sinks(program, dir, args, io::stdout(), io::stderr())
}

/// Run `program` with `args` in `dir`, forwarding its output to the given
/// sinks.
///
/// Fails with [`Error::CommandNotFound`] when the program is not on `PATH`,
/// [`Error::CommandFailed`] on a non-zero exit, and
/// [`Error::StreamCapture`] when either stream could not be copied.
pub fn run_command_with_sinks<S, O, E>(
    program: &str,
    dir: &Path,
    args: &[S],
    stdout_sink: O,
    stderr_sink: E,
) -> Result<CapturedOutput>
where
    S: AsRef<OsStr>,
    O: Write + Send,
    E: Write,
{
    let resolved = which::which(program).map_err(|_| Error::CommandNotFound {
        program: program.to_string(),
    })?;

    debug!(
        "Running {} {} in {}",
        resolved.display(),
        args.iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" "),
        dir.display()
    );

    let mut child = Command::new(&resolved)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

    let capture_error = |stream: &str| Error::StreamCapture {
        program: program.to_string(),
        stream: stream.to_string(),
    };
    let child_stdout = child.stdout.take().ok_or_else(|| capture_error("stdout"))?;
    let child_stderr = child.stderr.take().ok_or_else(|| capture_error("stderr"))?;

    let mut stdout_tee = Tee::new(stdout_sink);
    let mut stderr_tee = Tee::new(stderr_sink);

    // The readers are consumed by the copies so the pipes close before the
    // exit wait, even when a copy stops early.
    let (stdout_result, stderr_result) = thread::scope(|scope| {
        let stdout_writer = &mut stdout_tee;
        let stdout_copier = scope.spawn(move || copy_stream(child_stdout, stdout_writer));
        let stderr_result = copy_stream(child_stderr, &mut stderr_tee);
        let stdout_result = stdout_copier
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("stdout copier panicked")));
        (stdout_result, stderr_result)
    });

    let status = child.wait()?;
    debug!("{} finished with {}", program, status);

    if !status.success() {
        return Err(Error::CommandFailed {
            program: program.to_string(),
            status,
        });
    }

    if let Err(e) = stdout_result {
        debug!("Copying stdout of {} failed: {}", program, e);
        return Err(capture_error("stdout"));
    }
    if let Err(e) = stderr_result {
        debug!("Copying stderr of {} failed: {}", program, e);
        return Err(capture_error("stderr"));
    }

    Ok(CapturedOutput {
        status,
        stdout: stdout_tee.into_buffer(),
        stderr: stderr_tee.into_buffer(),
    })
}

fn copy_stream<R: Read, W: Write>(mut reader: R, writer: &mut W) -> io::Result<u64> {
    let copied = io::copy(&mut reader, writer)?;
    writer.flush()?;
    Ok(copied)
}
