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

use tracing::info;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

pub struct Args;

impl Dispatch for Args {
    async fn dispatch(self, ctx: &RuntimeContext) -> CliResult<()> {
        let client = ctx.authenticated_client()?;
        let viewer = client
            .download_console_viewer(chrono::Utc::now().timestamp())
            .await?;

        let path = &ctx.config.viewer_path;
        tokio::fs::write(path, &viewer).await?;
        info!(path = %path.display(), bytes = viewer.len(), "saved console viewer");
        println!("{}", path.display());
        Ok(())
    }
}
