// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use lazy_static::lazy_static;

use crate::error::ExtractError;
use crate::types::{Version, VersionPattern};

pub const BRANCH_PATTERN: &str = r"release/([\d.]+)";
pub const RELEASE_TITLE_PATTERN: &str = r"Release ([\d.]+)";
pub const MANIFEST_PATTERN: &str = r#"version = "([\d.]+)""#;

lazy_static! {
    /// `release/1.2.3` branch references
    pub static ref BRANCH: VersionPattern =
        VersionPattern::new("branch", BRANCH_PATTERN).expect("branch pattern compiles");
    /// `Release 1.2.3` release titles
    pub static ref RELEASE_TITLE: VersionPattern =
        VersionPattern::new("release title", RELEASE_TITLE_PATTERN)
            .expect("release title pattern compiles");
    /// `version = "1.2.3"` manifest lines
    pub static ref MANIFEST: VersionPattern =
        VersionPattern::new("manifest", MANIFEST_PATTERN).expect("manifest pattern compiles");
}

/// Extracts the version captured by `pattern` from the first match in `subject`.
pub fn extract(subject: &str, pattern: &VersionPattern) -> Result<Version, ExtractError> {
    let captures =
        pattern
            .regex()
            .captures(subject)
            .ok_or_else(|| ExtractError::ExtractionFailed {
                subject: subject.to_string(),
            })?;

    if captures.len() != 2 {
        return Err(ExtractError::GroupMismatch {
            subject: subject.to_string(),
            found: captures.len(),
        });
    }

    captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ExtractError::ExtractionFailed {
            subject: subject.to_string(),
        })
}
