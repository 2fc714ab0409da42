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

use libidrac::PowerState;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::command::Command;
use crate::errors::{CliError, CliResult};

const USAGE: &str = "specify a power state (on|off|cold_reboot|warm_reboot|nmi|graceful_shutdown)";

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub state: PowerState,
}

impl TryFrom<&Command> for Args {
    type Error = CliError;

    fn try_from(command: &Command) -> CliResult<Args> {
        let state = command
            .positional()
            .first()
            .and_then(|token| token.parse::<PowerState>().ok())
            .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
        Ok(Args { state })
    }
}

impl Dispatch for Args {
    async fn dispatch(self, ctx: &RuntimeContext) -> CliResult<()> {
        let client = ctx.authenticated_client()?;
        let response = client.set_power_state(self.state).await?;
        println!("{response}");
        Ok(())
    }
}
