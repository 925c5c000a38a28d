//! JSONL rendering.
//!
//! Each domain becomes one line holding a complete JSON object, which pipes
//! straight into `jq` or a log shipper.

use std::io::{self, ErrorKind, Write};

use anyhow::{Context, Result};

use super::DomainReport;

/// Wrapper that silently ignores broken pipe errors.
///
/// When output is piped to a command like `head` that closes early, writes
/// fail with `BrokenPipe`. That is not an error worth reporting.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes `report` as a single JSON line.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_jsonl<W: Write>(out: &mut W, report: &DomainReport) -> Result<()> {
    let line = serde_json::to_string(report).context("Failed to serialize report")?;
    writeln!(out, "{line}").context("Failed to write report")?;
    Ok(())
}
