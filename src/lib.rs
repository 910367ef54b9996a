// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod error;
pub mod handlers;
pub mod paths;
pub mod types;
