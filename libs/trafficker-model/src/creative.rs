// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use trafficker_query::Identified;

use crate::{Creatable, PIXEL_SIZE, RemoteEntity, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    pub id: i64,
    pub name: Option<String>,
    pub advertiser_id: Option<i64>,
    pub size: Option<Size>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Identified for Creative {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl RemoteEntity for Creative {
    const SERVICE: &'static str = "CreativeService";
    const PLURAL: &'static str = "Creatives";
}

impl Creatable for Creative {
    type Config = CreativeConfig;
}

/// A third-party creative: markup (typically a tracker or an ad server render snippet) that the
/// remote service serves verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeConfig {
    #[serde(rename = "xsi_type")]
    pub xsi_type: String,
    pub name: String,
    pub advertiser_id: i64,
    pub size: Size,
    pub snippet: String,
    pub is_safe_frame_compatible: bool,
}

pub const THIRD_PARTY_CREATIVE_TYPE: &str = "ThirdPartyCreative";

/// Build the config for a 1×1, SafeFrame-compatible third-party creative serving `snippet`
pub fn create_creative_config(name: &str, advertiser_id: i64, snippet: &str) -> CreativeConfig {
    CreativeConfig {
        xsi_type: THIRD_PARTY_CREATIVE_TYPE.to_string(),
        name: name.to_string(),
        advertiser_id,
        size: PIXEL_SIZE,
        snippet: snippet.to_string(),
        is_safe_frame_compatible: true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn creative_config_payload() {
        let config = create_creative_config("Prebid creative", 8675309, "<script></script>");

        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({
                "xsi_type": "ThirdPartyCreative",
                "name": "Prebid creative",
                "advertiserId": 8675309,
                "size": {"width": 1, "height": 1},
                "snippet": "<script></script>",
                "isSafeFrameCompatible": true
            })
        );
    }
}
