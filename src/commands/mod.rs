// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

mod branch;
mod manifest;
mod sink;
mod title;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::handlers::run;
use crate::types::{Extraction, Source, VersionPattern};

pub use sink::SinkKind;

#[derive(Parser)]
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
#[command(version, about)]
pub struct Command {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: PublishOptions,
}

#[derive(Subcommand)]
pub enum Commands {
    Branch(branch::Command),
    Title(title::Command),
    Manifest(manifest::Command),
}

impl Command {
    pub fn exec(&self) -> Result<()> {
        match &self.command {
            Commands::Branch(cmd) => cmd.exec(&self.options),
            Commands::Title(cmd) => cmd.exec(&self.options),
            Commands::Manifest(cmd) => cmd.exec(&self.options),
        }
    }
}

/// Options shared by every source.
#[derive(Args, Debug)]
pub struct PublishOptions {
    #[command(flatten)]
    sink: sink::SinkArgs,

    /// Regular expression with exactly one capture group around the version.
    /// Replaces the built-in pattern of the chosen source.
    #[arg(long, global = true)]
    pattern: Option<String>,
}

impl PublishOptions {
    /// Builds the extraction request and runs it, writing annotations to stdout.
    fn publish(
        &self,
        source: Source,
        default_pattern: &VersionPattern,
        default_sink: SinkKind,
    ) -> Result<()> {
        let pattern = match &self.pattern {
            Some(pattern) => VersionPattern::new("custom", pattern)?,
            None => default_pattern.clone(),
        };
        let (sink, key) = self.sink.resolve(default_sink)?;

        let extraction = Extraction {
            source,
            pattern,
            sink,
            key,
        };
        run(&extraction, &mut std::io::stdout().lock())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Command, Commands};

    #[test]
    fn verify_command() {
        super::Command::command().debug_assert();
    }

    #[test]
    fn test_parse_branch_ref() {
        let command = Command::try_parse_from(["ci-version", "branch", "--ref", "release/1.2.3"])
            .unwrap();
        assert!(matches!(command.command, Commands::Branch(_)));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let command = Command::try_parse_from([
            "ci-version",
            "title",
            "--title",
            "Release 1.2.3",
            "--sink",
            "output",
            "--output-file",
            "/tmp/out",
            "--key",
            "release",
        ])
        .unwrap();
        assert!(matches!(command.command, Commands::Title(_)));
        assert_eq!(command.options.pattern, None);
    }
}
