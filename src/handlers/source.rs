// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use tracing::debug;

use crate::error::ExtractError;
use crate::types::Source;

/// Resolves a source into the subject string the pattern is applied to.
pub fn read_source(source: &Source) -> Result<String, ExtractError> {
    match source {
        Source::Text(text) => Ok(text.clone()),
        Source::File(path) => {
            debug!("Reading {}", path.display());
            std::fs::read_to_string(path).map_err(|e| ExtractError::SourceUnavailable {
                path: path.clone(),
                source: e,
            })
        }
    }
}
