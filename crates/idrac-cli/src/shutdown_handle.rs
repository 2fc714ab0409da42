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

use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};

/// Convenience trait for a task with a shutdown handle (in the form of a [`oneshot::Sender<()>`])
///
/// Dropping the shutdown handle and sending on it mean the same thing: the task stops at its next
/// opportunity.
pub trait ShutdownHandle<R> {
    fn into_parts(self) -> (oneshot::Sender<()>, JoinHandle<R>);

    fn shutdown_and_wait(self) -> impl std::future::Future<Output = Result<R, JoinError>> + Send
    where
        Self: Send + Sized,
        R: Send,
    {
        async move {
            let (shutdown_tx, join_handle) = self.into_parts();
            std::mem::drop(shutdown_tx);
            join_handle.await
        }
    }
}
