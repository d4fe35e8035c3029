// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A typed literal bound to a statement placeholder.
///
/// The remote query parser decides how to interpret a literal from its type tag, not from its
/// textual form: `"123"` bound as [`Value::Number`] is compared numerically, while the same text
/// bound as [`Value::Text`] is compared as a string. On the wire each value is
/// `{"xsi_type": "<Kind>Value", "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "xsi_type", content = "value")]
pub enum Value {
    #[serde(rename = "TextValue")]
    Text(String),
    /// Numbers travel in their textual form, so both integer ids and decimal amounts can be
    /// bound without loss
    #[serde(rename = "NumberValue")]
    Number(String),
    #[serde(rename = "BooleanValue")]
    Boolean(bool),
    #[serde(rename = "DateValue")]
    Date(DateValue),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    /// Bind anything that displays as a number (`i64`, `f64`, or a numeric string such as a
    /// command line argument).
    pub fn number(value: impl Display) -> Self {
        Value::Number(value.to_string())
    }

    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn date(value: NaiveDate) -> Self {
        Value::Date(value.into())
    }

    /// The type tag the remote parser sees
    pub fn xsi_type(&self) -> &'static str {
        match self {
            Value::Text(_) => "TextValue",
            Value::Number(_) => "NumberValue",
            Value::Boolean(_) => "BooleanValue",
            Value::Date(_) => "DateValue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}
