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

pub mod config;
pub(crate) mod dispatch;
pub mod runtime;


use strum_macros::EnumIter;
use tracing::debug;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::cmds::{boot, console, help, login, logout, power, query};
use crate::command::Command;
use crate::errors::{CliError, CliResult};

/// Every command the CLI understands. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum CommandKind {
    Login,
    Logout,
    Power,
    Boot,
    Query,
    Console,
    Help,
}

impl CommandKind {
    pub fn lookup(name: &str) -> Option<CommandKind> {
        match name {
            "login" => Some(CommandKind::Login),
            "logout" => Some(CommandKind::Logout),
            "power" => Some(CommandKind::Power),
            "boot" => Some(CommandKind::Boot),
            "query" => Some(CommandKind::Query),
            "console" => Some(CommandKind::Console),
            "help" => Some(CommandKind::Help),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Login => "login",
            CommandKind::Logout => "logout",
            CommandKind::Power => "power",
            CommandKind::Boot => "boot",
            CommandKind::Query => "query",
            CommandKind::Console => "console",
            CommandKind::Help => "help",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Login => "login -u [username] -p [password] -h [host]: logs you in",
            CommandKind::Logout => "logout: logs you out",
            CommandKind::Power => {
                "power [on|off|nmi|graceful_shutdown|cold_reboot|warm_reboot]: manage power state of the server"
            }
            CommandKind::Boot => {
                "boot [none|pxe|hdd|bios|virtual_cd|local_sd|local_cd] [-once]: set the first boot device"
            }
            CommandKind::Query => {
                "query [-watch 1[s|m|h]] <attribute>,<attribute2>...: gets info about the server's various sensors and attributes"
            }
            CommandKind::Console => "console: downloads the virtual console viewer",
            CommandKind::Help => "help: shows this message",
        }
    }

    // Argument validation happens before any credential or network access.
    async fn dispatch(self, command: &Command, ctx: &RuntimeContext) -> CliResult<()> {
        match self {
            CommandKind::Login => login::Args::try_from(command)?.dispatch(ctx).await,
            CommandKind::Logout => logout::Args.dispatch(ctx).await,
            CommandKind::Power => power::Args::try_from(command)?.dispatch(ctx).await,
            CommandKind::Boot => boot::Args::try_from(command)?.dispatch(ctx).await,
            CommandKind::Query => query::Args::try_from(command)?.dispatch(ctx).await,
            CommandKind::Console => console::Args.dispatch(ctx).await,
            CommandKind::Help => help::Args.dispatch(ctx).await,
        }
    }
}

/// Resolves the parsed command to its handler and runs it.
pub async fn run(command: &Command, ctx: &RuntimeContext) -> CliResult<()> {
    if command.is_empty() {
        return Err(CliError::NoCommand);
    }
    let Some(kind) = CommandKind::lookup(command.name()) else {
        return Err(CliError::CommandNotFound(command.name().to_string()));
    };
    debug!(command = kind.name(), "dispatching");
    kind.dispatch(command, ctx).await
}
