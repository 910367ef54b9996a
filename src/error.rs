// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No version found in {subject}")]
    ExtractionFailed { subject: String },
    #[error("Expected one version group in {subject}, found {found}")]
    GroupMismatch { subject: String, found: usize },
    #[error("Invalid version pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("Could not read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No path configured for the {name} sink")]
    SinkUnavailable { name: &'static str },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
