//! Human-readable rendering.

use std::io::Write;

use anyhow::{Context, Result};
use colored::*;

use super::DomainReport;
use crate::records::{DnsRecordResult, RecordStatus};

const INDENT: &str = "    ";

fn status_marker(status: RecordStatus) -> ColoredString {
    match status {
        RecordStatus::Valid => "✔".green(),
        RecordStatus::Invalid | RecordStatus::Missing => "✘".red(),
    }
}

fn status_label(status: RecordStatus) -> ColoredString {
    match status {
        RecordStatus::Valid => status.label().green(),
        RecordStatus::Invalid | RecordStatus::Missing => status.label().red(),
    }
}

fn write_record<W: Write>(out: &mut W, domain: &str, record: &DnsRecordResult) -> std::io::Result<()> {
    writeln!(
        out,
        "  {} {} Record [{}]",
        status_marker(record.status),
        record.kind.label(),
        status_label(record.status)
    )?;
    writeln!(out, "{INDENT}{}", record.explanation)?;

    if record.status != RecordStatus::Missing {
        for line in record.value.lines() {
            writeln!(out, "{INDENT}  {line}")?;
        }
    }

    writeln!(
        out,
        "{INDENT}Check with MX Toolbox: {}",
        record.kind.mxtoolbox_url(domain)
    )
}

/// Writes `report` as an indented text block followed by a blank line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_plain<W: Write>(out: &mut W, report: &DomainReport) -> Result<()> {
    writeln!(
        out,
        "DNS Records for {} (checked {})",
        report.domain,
        report.checked_at
    )
    .context("Failed to write report header")?;

    for record in &report.records {
        write_record(out, &report.domain, record).context("Failed to write record")?;
    }

    writeln!(out).context("Failed to write report")?;
    Ok(())
}
