//! Domain input collection.
//!
//! Domains come from the command line, from a file, or from stdin (`-`).
//! File and stdin input is one domain per line; blank lines and lines
//! starting with `#` are skipped.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::{Config, MAX_DOMAIN_INPUT_LENGTH};

/// Applies the input length limit.
///
/// Logs a warning and returns `None` for inputs longer than
/// `MAX_DOMAIN_INPUT_LENGTH`.
pub fn accept_domain_input(input: &str) -> Option<&str> {
    if input.len() > MAX_DOMAIN_INPUT_LENGTH {
        let preview: String = input.chars().take(50).collect();
        warn!(
            "Skipping input exceeding maximum length ({} > {}): {}...",
            input.len(),
            MAX_DOMAIN_INPUT_LENGTH,
            preview
        );
        return None;
    }
    Some(input)
}

/// Reads domains line by line from `reader`.
///
/// # Errors
///
/// Returns an error if reading fails.
pub async fn read_domains<R: AsyncBufRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut domains = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read domain list")? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(domain) = accept_domain_input(trimmed) {
            domains.push(domain.to_string());
        }
    }
    Ok(domains)
}

async fn read_domain_source(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        info!("Reading domains from stdin");
        read_domains(BufReader::new(tokio::io::stdin())).await
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        read_domains(BufReader::new(file)).await
    }
}

/// Collects every domain to check: command-line domains first, then the file.
///
/// Command-line domains are passed through untouched apart from the length
/// limit, so an empty argument still reaches the checker and is reported.
///
/// # Errors
///
/// Returns an error if no domains were given or the input file cannot be read.
pub async fn collect_domains(config: &Config) -> Result<Vec<String>> {
    if config.domains.is_empty() && config.file.is_none() {
        anyhow::bail!("No domains given. Pass domains as arguments or use --file");
    }

    let mut domains: Vec<String> = config
        .domains
        .iter()
        .filter_map(|d| accept_domain_input(d))
        .map(str::to_string)
        .collect();

    if let Some(path) = &config.file {
        let from_file = read_domain_source(path).await?;
        info!("Read {} domain(s) from {}", from_file.len(), path.display());
        domains.extend(from_file);
    }

    Ok(domains)
}
