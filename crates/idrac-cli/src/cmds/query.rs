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

use std::future::Future;
use std::time::Duration;

use libidrac::{Attribute, SessionClient};
use tracing::debug;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::command::Command;
use crate::errors::{CliError, CliResult};
use crate::shutdown_handle::ShutdownHandle;
use crate::watch::{self, WatchSummary};

const USAGE: &str = "you should pass query parameters";

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub attributes: Vec<Attribute>,
    pub watch: Option<Duration>,
}

impl TryFrom<&Command> for Args {
    type Error = CliError;

    fn try_from(command: &Command) -> CliResult<Args> {
        let attributes: Vec<Attribute> = command
            .positional()
            .iter()
            .flat_map(|token| token.split(','))
            .filter(|token| !token.is_empty())
            .map(Attribute::from)
            .collect();
        if attributes.is_empty() {
            return Err(CliError::Usage(USAGE.to_string()));
        }

        let watch = command.flag("watch").map(watch::parse_interval).transpose()?;
        Ok(Args { attributes, watch })
    }
}

impl Dispatch for Args {
    async fn dispatch(self, ctx: &RuntimeContext) -> CliResult<()> {
        let client = ctx.authenticated_client()?;
        let response = client.query(&self.attributes).await?;
        println!("{response}");

        if let Some(interval) = self.watch {
            let summary =
                watch_until(client, self.attributes, interval, tokio::signal::ctrl_c()).await?;
            debug!(ticks = summary.ticks, reason = ?summary.reason, "watch finished");
        }
        Ok(())
    }
}

/// Re-issues the query every `interval` and prints each response until
/// `stop` resolves. A failed query ends the refresh without an error.
pub(crate) async fn watch_until<F>(
    client: SessionClient,
    attributes: Vec<Attribute>,
    interval: Duration,
    stop: F,
) -> CliResult<WatchSummary>
where
    F: Future<Output = std::io::Result<()>>,
{
    let handle = watch::spawn(
        interval,
        move || {
            let client = client.clone();
            let attributes = attributes.clone();
            async move { client.query(&attributes).await }
        },
        |response| println!("{response}"),
    );

    // keep waiting even when the loop already stopped on its own
    let stopped = stop.await;
    let summary = handle.shutdown_and_wait().await?;
    stopped?;
    Ok(summary)
}
