// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::handlers::version::MANIFEST;
use crate::paths::manifest_path;
use crate::types::Source;

use super::{PublishOptions, SinkKind};

/// Extract the version from a `version = "<version>"` line of a packaging manifest.
#[derive(Args, Debug)]
pub struct Command {
    /// Root of the checked out repository
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "DIR")]
    workspace: PathBuf,

    /// Manifest path relative to the workspace [default: pyproject.toml]
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl Command {
    pub fn exec(&self, options: &PublishOptions) -> Result<()> {
        let path = manifest_path(&self.workspace, self.file.as_deref());
        options.publish(Source::File(path), &MANIFEST, SinkKind::Output)
    }
}
