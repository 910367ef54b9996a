// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::error::ExtractError;
use crate::types::Sink;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SinkKind {
    /// Print a `::set-output` workflow command
    Stdout,
    /// Append `KEY=value` to the state file
    State,
    /// Append `key=value` to the output file
    Output,
}

impl SinkKind {
    /// Key used when `--key` is not given.
    pub fn default_key(&self) -> &'static str {
        match self {
            SinkKind::State => "VERSION",
            SinkKind::Stdout | SinkKind::Output => "version",
        }
    }
}

#[derive(Args, Debug)]
pub struct SinkArgs {
    /// Where to publish the version. Defaults to `stdout` for refs and titles,
    /// `output` for manifests.
    #[arg(long, value_enum, global = true)]
    sink: Option<SinkKind>,

    /// State file for the `state` sink
    #[arg(long, env = "GITHUB_STATE", global = true, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Output file for the `output` sink
    #[arg(long, env = "GITHUB_OUTPUT", global = true, value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Name the version is published under
    #[arg(long, global = true)]
    key: Option<String>,
}

impl SinkArgs {
    /// Picks the sink and key, falling back to the source's defaults.
    pub fn resolve(&self, default: SinkKind) -> Result<(Sink, String)> {
        let kind = self.sink.unwrap_or(default);
        let sink = match kind {
            SinkKind::Stdout => Sink::Stdout,
            SinkKind::State => Sink::StateFile(
                self.state_file
                    .clone()
                    .ok_or(ExtractError::SinkUnavailable { name: "state" })?,
            ),
            SinkKind::Output => Sink::OutputFile(
                self.output_file
                    .clone()
                    .ok_or(ExtractError::SinkUnavailable { name: "output" })?,
            ),
        };
        let key = self
            .key
            .clone()
            .unwrap_or_else(|| kind.default_key().to_string());
        Ok((sink, key))
    }
}
