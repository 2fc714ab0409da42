/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

//! Command line client for the session based `/data` interface of Dell iDRACs.

pub mod cfg;
pub mod cmds;
pub mod command;
pub mod credential;
pub mod errors;
pub mod shutdown_handle;
pub mod watch;

use crate::cfg::config::Config;
use crate::cfg::runtime::RuntimeContext;
use crate::command::Command;
use crate::errors::CliResult;

/// Parses `args` (without the program name) and runs the command they name.
pub async fn run(args: Vec<String>, config: Config) -> CliResult<()> {
    let command = Command::parse(args);
    let ctx = RuntimeContext::new(config);
    cfg::run(&command, &ctx).await
}
