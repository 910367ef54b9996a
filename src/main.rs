// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use ci_version::commands::Command;

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for workflow commands.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    Command::parse().exec()
}
