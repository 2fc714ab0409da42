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

//! Persisted session: `{Host, Username, AuthToken}` as plaintext JSON.


use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CliError, CliResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credential {
    pub host: String,
    #[serde(default)]
    pub username: String,
    pub auth_token: String,
}

#[derive(Clone, Debug)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> CredentialStore {
        CredentialStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when nobody is logged in.
    pub fn load(&self) -> CliResult<Option<Credential>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(CliError::CredentialRead {
                    path: self.path.display().to_string(),
                    error,
                });
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|error| CliError::CredentialFormat {
                path: self.path.display().to_string(),
                error,
            })
    }

    pub fn save(&self, credential: &Credential) -> CliResult<()> {
        let contents =
            serde_json::to_string_pretty(credential).map_err(|error| CliError::CredentialFormat {
                path: self.path.display().to_string(),
                error,
            })?;
        std::fs::write(&self.path, contents + "\n").map_err(|error| CliError::CredentialWrite {
            path: self.path.display().to_string(),
            error,
        })
    }

    /// Returns whether there was anything to remove.
    pub fn remove(&self) -> CliResult<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(error) => Err(CliError::CredentialWrite {
                path: self.path.display().to_string(),
                error,
            }),
        }
    }
}
