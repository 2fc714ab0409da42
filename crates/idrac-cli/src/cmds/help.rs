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

use libidrac::Attribute;
use strum::IntoEnumIterator;

use crate::cfg::CommandKind;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

const ATTRIBUTES_PER_LINE: usize = 10;

pub struct Args;

impl Dispatch for Args {
    async fn dispatch(self, _ctx: &RuntimeContext) -> CliResult<()> {
        print!("{}", help_text());
        Ok(())
    }
}

pub fn help_text() -> String {
    let mut text = String::new();
    for kind in CommandKind::iter() {
        text.push_str(kind.usage());
        text.push('\n');
    }

    text.push_str("Possible attributes:\n");
    for line in Attribute::known().chunks(ATTRIBUTES_PER_LINE) {
        let line: Vec<&str> = line.iter().map(Attribute::as_str).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}
