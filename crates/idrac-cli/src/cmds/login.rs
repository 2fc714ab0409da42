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

use tracing::{info, warn};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::command::Command;
use crate::credential::Credential;
use crate::errors::{CliError, CliResult};

const USAGE: &str = "username (-u), password (-p), and a host (-h) must be defined";

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub username: String,
    pub password: String,
    pub host: String,
}

impl TryFrom<&Command> for Args {
    type Error = CliError;

    fn try_from(command: &Command) -> CliResult<Args> {
        // the host may also be given as the first positional argument
        let host = command
            .flag("h")
            .or_else(|| command.positional().first().map(String::as_str));

        match (command.flag("u"), command.flag("p"), host) {
            (Some(username), Some(password), Some(host)) => Ok(Args {
                username: username.to_string(),
                password: password.to_string(),
                host: host.to_string(),
            }),
            _ => Err(CliError::Usage(USAGE.to_string())),
        }
    }
}

impl Dispatch for Args {
    async fn dispatch(self, ctx: &RuntimeContext) -> CliResult<()> {
        match ctx.credentials.load() {
            Ok(Some(existing)) if existing.host == self.host => {
                return Err(CliError::AlreadyLoggedIn(self.host));
            }
            Ok(_) => {}
            // a broken file gets replaced by the new session
            Err(error) => warn!(%error, "ignoring unreadable credentials"),
        }

        info!(host = %self.host, username = %self.username, "logging in");
        let mut client = ctx.client_for(&self.host)?;
        let auth_token = client.login(&self.username, &self.password).await?;

        ctx.credentials.save(&Credential {
            host: self.host,
            username: self.username,
            auth_token,
        })
    }
}
