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

//! Background refresh of a query on a fixed interval.
//!
//! The loop is either running or stopped. It stops when the shutdown handle
//! is used, which is only observed between ticks, or when a query fails.
//! Failures are not reported to the user.


use std::future::Future;
use std::time::Duration;

use libidrac::IdracError;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::errors::{CliError, CliResult};
use crate::shutdown_handle::ShutdownHandle;

/// Parses `<int><unit>` intervals such as `10s`, `5m` or `1h`.
pub fn parse_interval(interval: &str) -> CliResult<Duration> {
    let parsed = duration_str::parse(interval)
        .map_err(|error| CliError::Parse(format!("invalid watch interval {interval:?}: {error}")))?;
    if parsed.is_zero() {
        return Err(CliError::Parse(format!(
            "invalid watch interval {interval:?}: must be greater than zero"
        )));
    }
    Ok(parsed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    QueryFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchSummary {
    /// Successful queries.
    pub ticks: usize,
    pub reason: StopReason,
}

pub struct WatchHandle {
    shutdown_tx: oneshot::Sender<()>,
    join_handle: JoinHandle<WatchSummary>,
}

impl ShutdownHandle<WatchSummary> for WatchHandle {
    fn into_parts(self) -> (oneshot::Sender<()>, JoinHandle<WatchSummary>) {
        (self.shutdown_tx, self.join_handle)
    }
}

/// Spawns the loop. Every `interval` it awaits `query` and hands a
/// successful response to `emit`.
pub fn spawn<Q, Fut, E>(interval: Duration, mut query: Q, mut emit: E) -> WatchHandle
where
    Q: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<String, IdracError>> + Send,
    E: FnMut(String) + Send + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let join_handle = tokio::spawn(async move {
        let mut ticks = 0;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown_rx => {
                    return WatchSummary { ticks, reason: StopReason::Cancelled };
                }
                _ = tokio::time::sleep(interval) => {}
            }

            match query().await {
                Ok(response) => {
                    ticks += 1;
                    emit(response);
                }
                Err(error) => {
                    debug!(%error, ticks, "watch query failed, stopping");
                    return WatchSummary {
                        ticks,
                        reason: StopReason::QueryFailed,
                    };
                }
            }
        }
    });

    WatchHandle {
        shutdown_tx,
        join_handle,
    }
}
