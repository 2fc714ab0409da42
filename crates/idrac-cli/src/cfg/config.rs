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

use std::path::{Path, PathBuf};
use std::time::Duration;

use duration_str::deserialize_duration;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
/// Configuration for the idrac CLI. Fields are documented as comments in the output of [`Config::into_annotated_config_file`].
pub struct Config {
    #[serde(default = "Defaults::credentials_path")]
    pub credentials_path: PathBuf,
    #[serde(default = "Defaults::viewer_path")]
    pub viewer_path: PathBuf,
    #[serde(default = "Defaults::accept_invalid_certs")]
    pub accept_invalid_certs: bool,
    #[serde(
        default = "Defaults::request_timeout",
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub request_timeout: Duration,
    #[serde(
        default = "Defaults::connect_timeout",
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub connect_timeout: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_path: Defaults::credentials_path(),
            viewer_path: Defaults::viewer_path(),
            accept_invalid_certs: Defaults::accept_invalid_certs(),
            request_timeout: Defaults::request_timeout(),
            connect_timeout: Defaults::connect_timeout(),
            override_base_url: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        toml::from_str::<Self>(&cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })
    }

    pub fn into_annotated_config_file(self) -> String {
        let Self {
            credentials_path,
            viewer_path,
            accept_invalid_certs,
            request_timeout,
            connect_timeout,
            override_base_url: _,
        } = self;
        let request_timeout = format!("{}s", request_timeout.as_secs());
        let connect_timeout = format!("{}s", connect_timeout.as_secs());

        format!(
            r#"
#####
## This is a default config file for idrac. Everything in this file is optional: Any non-comment
## line in this file simply represents default values. Commented lines with a single `#` represent
## examples for optional configuration which is not part of the default config.
#####

## Where the session obtained by `login` is stored. Created by `login`, removed by `logout`.
credentials_path = {credentials_path:?}

## Where `console` writes the downloaded virtual console descriptor.
viewer_path = {viewer_path:?}

## Skip TLS certificate validation. iDRACs ship with self-signed certificates.
accept_invalid_certs = {accept_invalid_certs}

## Deadline for a whole request to the iDRAC.
request_timeout = {request_timeout:?}

## Deadline for connecting to the iDRAC, TLS handshake included.
connect_timeout = {connect_timeout:?}

## Send requests to this URL instead of https://<host> (useful for testing against a mock)
# override_base_url = "http://127.0.0.1:8080"
"#
        )
    }
}

pub struct Defaults;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file at {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("TOML error reading config file at {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
}

impl Defaults {
    pub fn credentials_path() -> PathBuf {
        PathBuf::from("./credentials.json")
    }

    pub fn viewer_path() -> PathBuf {
        PathBuf::from("./viewer.jnlp")
    }

    pub fn accept_invalid_certs() -> bool {
        true
    }

    pub fn request_timeout() -> Duration {
        libidrac::DEFAULT_TIMEOUT
    }

    pub fn connect_timeout() -> Duration {
        libidrac::DEFAULT_CONNECT_TIMEOUT
    }
}

fn serialize_duration<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}s", d.as_secs()))
}
