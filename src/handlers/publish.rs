// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;
use crate::types::Sink;

/// Publishes `key`/`value` to `sink`. The stdout sink writes to `stdout`.
pub fn publish<W: Write>(
    sink: &Sink,
    key: &str,
    value: &str,
    stdout: &mut W,
) -> Result<(), ExtractError> {
    match sink {
        Sink::Stdout => {
            writeln!(stdout, "::set-output name={key}::{value}")?;
            stdout.flush()?;
        }
        Sink::StateFile(path) | Sink::OutputFile(path) => append_line(path, key, value)?,
    }
    Ok(())
}

/// Appends a single `key=value` line, creating the file if needed.
fn append_line(path: &Path, key: &str, value: &str) -> Result<(), ExtractError> {
    debug!("Appending {key}={value} to {}", path.display());
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{key}={value}\n").as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stdout_annotation() {
        let mut out = Vec::new();
        publish(&Sink::Stdout, "version", "3.0.1", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "::set-output name=version::3.0.1\n"
        );
    }

    #[test]
    fn test_output_file_empty() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("output");
        std::fs::write(&path, "")?;

        let mut out = Vec::new();
        publish(&Sink::OutputFile(path.clone()), "version", "2.10.0", &mut out)?;

        assert_eq!(std::fs::read_to_string(&path)?, "version=2.10.0\n");
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn test_state_file_created() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("state");

        publish(&Sink::StateFile(path.clone()), "VERSION", "1.2.3", &mut Vec::new())?;

        assert_eq!(std::fs::read_to_string(&path)?, "VERSION=1.2.3\n");
        Ok(())
    }

    #[test]
    fn test_append_keeps_existing_lines() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("output");
        std::fs::write(&path, "other=value\n")?;

        publish(&Sink::OutputFile(path.clone()), "version", "0.9.5", &mut Vec::new())?;

        assert_eq!(
            std::fs::read_to_string(&path)?,
            "other=value\nversion=0.9.5\n"
        );
        Ok(())
    }

    #[test]
    fn test_missing_directory() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("missing").join("output");

        let err = publish(&Sink::OutputFile(path), "version", "1.0.0", &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
        Ok(())
    }
}
