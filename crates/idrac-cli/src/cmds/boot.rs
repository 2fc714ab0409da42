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

use libidrac::BootDevice;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::command::Command;
use crate::errors::{CliError, CliResult};

const USAGE: &str =
    "specify a boot device (none|pxe|hdd|bios|virtual_cd|local_sd|local_cd), optionally with -once";

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub device: BootDevice,
    pub once: bool,
}

impl TryFrom<&Command> for Args {
    type Error = CliError;

    fn try_from(command: &Command) -> CliResult<Args> {
        let device = command
            .positional()
            .first()
            .and_then(|token| token.parse::<BootDevice>().ok())
            .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
        Ok(Args {
            device,
            once: command.flag("once") == Some("true"),
        })
    }
}

impl Dispatch for Args {
    async fn dispatch(self, ctx: &RuntimeContext) -> CliResult<()> {
        let client = ctx.authenticated_client()?;
        let response = client.set_boot_override(self.device, self.once).await?;
        println!("{response}");
        Ok(())
    }
}
