// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Args;

use crate::handlers::version::BRANCH;
use crate::types::Source;

use super::{PublishOptions, SinkKind};

/// Extract the version from a `release/<version>` branch reference.
#[derive(Args, Debug)]
pub struct Command {
    /// Git reference of the build, e.g. `refs/heads/release/1.2.3`
    #[arg(long = "ref", env = "GITHUB_REF", value_name = "REF")]
    reference: String,
}

impl Command {
    pub fn exec(&self, options: &PublishOptions) -> Result<()> {
        options.publish(
            Source::Text(self.reference.clone()),
            &BRANCH,
            SinkKind::Stdout,
        )
    }
}
