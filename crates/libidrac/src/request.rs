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

use reqwest::Method;

use crate::attributes::{Attribute, BootDevice, PowerState};

/// Query string for the `/data` endpoint, e.g. `get=pwState,hostName` or
/// `set=pwState:1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataRequest {
    query: String,
}

impl DataRequest {
    pub fn set_power(state: PowerState) -> DataRequest {
        DataRequest {
            query: format!("set=pwState:{}", state.code()),
        }
    }

    pub fn set_boot(device: BootDevice, once: bool) -> DataRequest {
        DataRequest {
            query: format!(
                "set=vmBootOnce:{once},firstBootDevice:{}",
                device.code()
            ),
        }
    }

    pub fn get(attributes: &[Attribute]) -> DataRequest {
        let tokens: Vec<&str> = attributes.iter().map(Attribute::as_str).collect();
        DataRequest {
            query: format!("get={}", tokens.join(",")),
        }
    }

    pub fn query_string(&self) -> &str {
        &self.query
    }

    pub fn method(&self) -> Method {
        method_for(&self.query)
    }
}

/// The firmware expects POST for anything that writes. It has no per-operation
/// tag, so any query string containing "set" is sent as a POST, including reads
/// of attributes whose name happens to contain it.
pub fn uses_post(query: &str) -> bool {
    query.contains("set")
}

pub(crate) fn method_for(query: &str) -> Method {
    if uses_post(query) {
        Method::POST
    } else {
        Method::GET
    }
}
