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

use libidrac::IdracError;

use crate::cfg::config::ConfigError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Usage(String),

    #[error("No command given, run `help` to list the commands")]
    NoCommand,

    #[error("The command \"{0}\" was not found.")]
    CommandNotFound(String),

    #[error("You should log in first")]
    NotLoggedIn,

    #[error("You are already logged in to {0}")]
    AlreadyLoggedIn(String),

    #[error("Could not read credentials at {path}: {error}")]
    CredentialRead { path: String, error: std::io::Error },

    #[error("Invalid credentials file at {path}: {error}")]
    CredentialFormat {
        path: String,
        error: serde_json::Error,
    },

    #[error("Could not write credentials to {path}: {error}")]
    CredentialWrite { path: String, error: std::io::Error },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Idrac(#[from] IdracError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Watch task failed: {0}")]
    Watch(#[from] tokio::task::JoinError),
}
