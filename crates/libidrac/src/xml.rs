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

//! Converts the XML documents returned by the `/data` endpoint into JSON text.
//!
//! Elements become object keys. An element holding only text becomes a string,
//! attributes are stored under `-name`, text next to child elements under
//! `#content`, and repeated siblings are collected into an array.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        source: quick_xml::Error,
    },
    #[error("closing tag </{0}> has no matching opening tag")]
    UnbalancedTag(String),
    #[error("document ended inside <{0}>")]
    UnclosedTag(String),
}

struct Node {
    name: String,
    fields: Map<String, Value>,
    text: String,
}

impl Node {
    fn from_start(start: &BytesStart) -> Result<Node, quick_xml::Error> {
        let mut fields = Map::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = format!("-{}", String::from_utf8_lossy(attr.key.as_ref()));
            fields.insert(key, Value::String(attr.unescape_value()?.into_owned()));
        }
        Ok(Node {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            fields,
            text: String::new(),
        })
    }

    fn into_value(self) -> (String, Value) {
        let Node {
            name,
            mut fields,
            text,
        } = self;
        if fields.is_empty() {
            return (name, Value::String(text));
        }
        if !text.is_empty() {
            fields.insert("#content".to_string(), Value::String(text));
        }
        (name, Value::Object(fields))
    }
}

fn attach(fields: &mut Map<String, Value>, name: String, value: Value) {
    match fields.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(name, value);
        }
    }
}

pub fn xml_to_json(xml: &str) -> Result<String, TranslateError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut root = Map::new();
    let mut stack: Vec<Node> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|source| TranslateError::Xml {
            position: reader.buffer_position(),
            source,
        })?;
        let xml_err = |source| TranslateError::Xml {
            position: reader.buffer_position(),
            source,
        };
        match event {
            Event::Start(start) => stack.push(Node::from_start(&start).map_err(xml_err)?),
            Event::Empty(start) => {
                let (name, value) = Node::from_start(&start).map_err(xml_err)?.into_value();
                match stack.last_mut() {
                    Some(parent) => attach(&mut parent.fields, name, value),
                    None => attach(&mut root, name, value),
                }
            }
            Event::End(end) => {
                let Some(node) = stack.pop() else {
                    return Err(TranslateError::UnbalancedTag(
                        String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                    ));
                };
                let (name, value) = node.into_value();
                match stack.last_mut() {
                    Some(parent) => attach(&mut parent.fields, name, value),
                    None => attach(&mut root, name, value),
                }
            }
            Event::Text(text) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text.unescape().map_err(xml_err)?);
                }
            }
            Event::CData(data) => {
                if let Some(node) = stack.last_mut() {
                    node.text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(node) = stack.pop() {
        return Err(TranslateError::UnclosedTag(node.name));
    }

    Ok(Value::Object(root).to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn translate(xml: &str) -> Value {
        serde_json::from_str(&xml_to_json(xml).unwrap()).unwrap()
    }

    #[test]
    fn text_elements_become_strings() {
        let value = translate(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <root><pwState>1</pwState><hostName>web-01</hostName><status>ok</status></root>"#,
        );
        assert_eq!(
            value,
            json!({"root": {"pwState": "1", "hostName": "web-01", "status": "ok"}})
        );
    }

    #[test]
    fn repeated_siblings_become_arrays() {
        let value = translate(
            "<root><fans><fan><name>FAN1</name></fan><fan><name>FAN2</name></fan><fan><name>FAN3</name></fan></fans></root>",
        );
        assert_eq!(
            value,
            json!({"root": {"fans": {"fan": [
                {"name": "FAN1"},
                {"name": "FAN2"},
                {"name": "FAN3"}
            ]}}})
        );
    }

    #[test]
    fn attributes_and_mixed_content() {
        let value = translate(r#"<root><sensor unit="C" id="3">42</sensor><flag on="1"/></root>"#);
        assert_eq!(
            value,
            json!({"root": {
                "sensor": {"-unit": "C", "-id": "3", "#content": "42"},
                "flag": {"-on": "1"}
            }})
        );
    }

    #[test]
    fn empty_elements_and_entities() {
        let value = translate("<root><osName/><sysDesc>R&amp;D &lt;lab&gt;</sysDesc></root>");
        assert_eq!(
            value,
            json!({"root": {"osName": "", "sysDesc": "R&D <lab>"}})
        );
    }

    #[test]
    fn cdata_is_kept_verbatim() {
        let value = translate("<root><log><![CDATA[a < b]]></log></root>");
        assert_eq!(value, json!({"root": {"log": "a < b"}}));
    }

    #[test]
    fn empty_document() {
        assert_eq!(xml_to_json("").unwrap(), "{}");
        assert_eq!(xml_to_json("  \n ").unwrap(), "{}");
    }

    #[test]
    fn unclosed_document_is_an_error() {
        assert!(matches!(
            xml_to_json("<root><pwState>1</pwState>"),
            Err(TranslateError::UnclosedTag(name)) if name == "root"
        ));
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        assert!(xml_to_json("<root><a>1</b></root>").is_err());
    }
}
