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

use libidrac::SessionClient;

use crate::cfg::config::Config;
use crate::credential::{Credential, CredentialStore};
use crate::errors::{CliError, CliResult};

// RuntimeContext is passed to every command handler. It is
// built once per invocation from the loaded configuration.
pub struct RuntimeContext {
    pub config: Config,
    pub credentials: CredentialStore,
}

impl RuntimeContext {
    pub fn new(config: Config) -> RuntimeContext {
        let credentials = CredentialStore::new(config.credentials_path.clone());
        RuntimeContext {
            config,
            credentials,
        }
    }

    /// Unauthenticated client for `host`, set up from the configuration.
    pub fn client_for(&self, host: &str) -> CliResult<SessionClient> {
        let mut builder = SessionClient::builder(host)
            .accept_invalid_certs(self.config.accept_invalid_certs)
            .timeout(self.config.request_timeout)
            .connect_timeout(self.config.connect_timeout);
        if let Some(base_url) = &self.config.override_base_url {
            builder = builder.base_url(base_url);
        }
        Ok(builder.build()?)
    }

    /// Client resuming the persisted session.
    pub fn authenticated_client(&self) -> CliResult<SessionClient> {
        let Some(Credential {
            host,
            username,
            auth_token,
        }) = self.credentials.load()?
        else {
            return Err(CliError::NotLoggedIn);
        };
        Ok(self.client_for(&host)?.with_session(username, auth_token))
    }
}
