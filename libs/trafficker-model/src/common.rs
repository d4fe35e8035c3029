// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// All amounts we create are in US dollars
pub const CURRENCY_CODE: &str = "USD";

/// The 1×1 size used for pixel trackers and prebid creatives
pub const PIXEL_SIZE: Size = Size {
    width: 1,
    height: 1,
    is_aspect_ratio: None,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency_code: String,
    /// Amount in millionths of the currency unit
    pub micro_amount: i64,
}

impl Money {
    pub fn usd_micros(micro_amount: i64) -> Self {
        Self {
            currency_code: CURRENCY_CODE.to_string(),
            micro_amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_aspect_ratio: Option<bool>,
}
