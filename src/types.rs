// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use regex::Regex;

use crate::error::ExtractError;

pub type Version = String;

/// Where the subject string comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A value already resolved from the environment or the command line
    Text(String),
    /// A file whose whole contents are the subject
    File(PathBuf),
}

/// Where the extracted version is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// `::set-output` workflow command on standard output
    Stdout,
    /// Append-only state file shared with the post step of an action
    StateFile(PathBuf),
    /// Append-only output file read by later steps
    OutputFile(PathBuf),
}

impl Sink {
    pub fn name(&self) -> &'static str {
        match self {
            Sink::Stdout => "stdout",
            Sink::StateFile(_) => "state",
            Sink::OutputFile(_) => "output",
        }
    }
}

impl Display for Sink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => write!(f, "stdout"),
            Sink::StateFile(path) => write!(f, "state file {}", path.display()),
            Sink::OutputFile(path) => write!(f, "output file {}", path.display()),
        }
    }
}

/// A named regular expression with exactly one capture group around the version.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    name: String,
    regex: Regex,
}

impl VersionPattern {
    /// Compiles `pattern`, rejecting anything that does not have exactly one capture group.
    pub fn new(name: &str, pattern: &str) -> Result<Self, ExtractError> {
        let regex = Regex::new(pattern).map_err(|e| ExtractError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        // captures_len counts the implicit whole-match group
        if regex.captures_len() != 2 {
            return Err(ExtractError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: format!(
                    "expected exactly one capture group, found {}",
                    regex.captures_len() - 1
                ),
            });
        }
        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Display for VersionPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (/{}/)", self.name, self.regex.as_str())
    }
}

/// One extraction request: read `source`, match `pattern`, publish under `key` to `sink`.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub source: Source,
    pub pattern: VersionPattern,
    pub sink: Sink,
    pub key: String,
}
