// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use tracing::{debug, info};

use crate::error::ExtractError;
use crate::types::{Extraction, Version};

pub mod publish;
pub mod source;
pub mod version;

use publish::publish;
use source::read_source;
use version::extract;

/// Reads the source, extracts the version and publishes it. Returns the version.
pub fn run<W: Write>(extraction: &Extraction, stdout: &mut W) -> Result<Version, ExtractError> {
    let subject = read_source(&extraction.source)?;
    debug!("Matching {} against {subject:?}", extraction.pattern);

    let version = extract(&subject, &extraction.pattern)?;
    publish(&extraction.sink, &extraction.key, &version, stdout)?;

    info!(
        "Published {}={version} to {}",
        extraction.key, extraction.sink
    );
    Ok(version)
}
