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

//! Tokenizer for the `<command> [-flag value]... [positional]...` command line.
//!
//! Flags are introduced by a single `-`. A flag takes the next element as its
//! value, unless it is the last element or it is `-once`, in which case its
//! value is `"true"`. A repeated flag keeps only its last value. Everything
//! else is positional and kept in order under the empty-string key.


use std::collections::BTreeMap;

const FLAG_MARKER: char = '-';
const POSITIONAL: &str = "";
const TRUE: &str = "true";

// Flags that never take a value.
const BOOLEAN_FLAGS: &[&str] = &["once"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub arguments: BTreeMap<String, Vec<String>>,
}

impl Command {
    /// Never fails; validating the result is up to the command handler.
    pub fn parse<I, S>(args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let Some(name) = args.next() else {
            return Command::default();
        };

        let mut arguments: BTreeMap<String, Vec<String>> = BTreeMap::new();
        while let Some(arg) = args.next() {
            // a lone "-" is not a flag
            let flag = arg
                .strip_prefix(FLAG_MARKER)
                .filter(|flag_name| !flag_name.is_empty());

            match flag {
                Some(flag_name) => {
                    let value = if BOOLEAN_FLAGS.contains(&flag_name) {
                        TRUE.to_string()
                    } else {
                        args.next().unwrap_or_else(|| TRUE.to_string())
                    };
                    arguments.insert(flag_name.to_string(), vec![value]);
                }
                None => arguments
                    .entry(POSITIONAL.to_string())
                    .or_default()
                    .push(arg),
            }
        }

        Command { name, arguments }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when no command was given at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.arguments.is_empty()
    }

    pub fn positional(&self) -> &[String] {
        self.arguments
            .get(POSITIONAL)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn flag(&self, name: &str) -> Option<&str> {
        self.arguments
            .get(name)
            .and_then(|values| values.last())
            .map(String::as_str)
    }
}
