// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Args;

use crate::handlers::version::RELEASE_TITLE;
use crate::types::Source;

use super::{PublishOptions, SinkKind};

/// Extract the version from a `Release <version>` title.
#[derive(Args, Debug)]
pub struct Command {
    /// Title of the release, e.g. `Release 1.2.3`
    #[arg(long, env = "RELEASE_TITLE")]
    title: String,
}

impl Command {
    pub fn exec(&self, options: &PublishOptions) -> Result<()> {
        options.publish(
            Source::Text(self.title.clone()),
            &RELEASE_TITLE,
            SinkKind::Stdout,
        )
    }
}
