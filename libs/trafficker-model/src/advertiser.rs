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

use crate::RemoteEntity;

/// Advertisers are companies of type `ADVERTISER` on the remote side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertiser {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

pub const ADVERTISER_COMPANY_TYPE: &str = "ADVERTISER";

impl Identified for Advertiser {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl RemoteEntity for Advertiser {
    const SERVICE: &'static str = "CompanyService";
    const PLURAL: &'static str = "Companies";
}
